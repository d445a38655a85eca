use plantcare::{category_for_position, parse_tips, process_response, Category, EXPECTED_TIP_COUNT};
use proptest::prelude::*;

// Property: parse_tips should never panic for arbitrary input
proptest! {
    #[test]
    fn prop_parse_tips_no_panic(s in "(?s).*") {
        let _ = parse_tips(&s);
    }
}

/// Tip bodies without digits, so they cannot contain a marker.
fn tip_bodies_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z ,!?]{0,40}", 1..200)
}

/// Numbered response built from bodies, with arbitrary (possibly repeated
/// or out-of-order) numerals in front of each body.
fn response_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    tip_bodies_strategy().prop_flat_map(|bodies| {
        let len = bodies.len();
        prop::collection::vec(0u32..1000, len).prop_map(move |numerals| {
            let mut text = String::new();
            for (numeral, body) in numerals.iter().zip(&bodies) {
                text.push_str(&format!("{numeral}. {body}\n"));
            }
            let expected = bodies.iter().map(|b| b.trim().to_string()).collect();
            (expected, text)
        })
    })
}

proptest! {
    #[test]
    fn prop_ids_follow_order_of_appearance((bodies, text) in response_strategy()) {
        let set = process_response(&text).unwrap();
        let expected: Vec<&String> = bodies.iter().filter(|b| !b.is_empty()).collect();
        prop_assert_eq!(set.len(), expected.len());
        for (index, tip) in set.tips().iter().enumerate() {
            prop_assert_eq!(tip.id() as usize, index + 1);
            prop_assert_eq!(tip.content(), expected[index].as_str());
            prop_assert_eq!(tip.category(), category_for_position(tip.id()));
        }
        prop_assert_eq!(set.count_mismatch(), set.len() != EXPECTED_TIP_COUNT);
    }

    #[test]
    fn prop_category_is_monotonic(a in 0u32..400, b in 0u32..400) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(category_for_position(low) <= category_for_position(high));
    }

    #[test]
    fn prop_category_is_idempotent(p in any::<u32>()) {
        prop_assert_eq!(category_for_position(p), category_for_position(p));
    }

    #[test]
    fn prop_category_contains_position(p in 1u32..=150) {
        prop_assert!(category_for_position(p).range().contains(&p));
    }

    #[test]
    fn prop_positions_past_range_use_last_category(p in 151u32..100_000) {
        prop_assert_eq!(category_for_position(p), Category::AdvancedGardening);
    }
}
