// Tip parsing, categorization and assembly

pub mod category;
pub mod parse;
pub mod record;

pub use category::{category_for_position, Category, UnknownCategory, EXPECTED_TIP_COUNT};
pub use parse::{parse_tips, CountMismatch, Fragment, ParsedTips};
pub use record::{assemble, process_response, Tip, TipSet};
