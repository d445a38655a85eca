use plantcare::{AiConfig, Config, ImageConfig};
use serial_test::serial;

fn clear_env() {
    for key in [
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_API_URL",
        "PIXABAY_API_KEY",
        "PIXABAY_API_URL",
        "PIXABAY_PER_PAGE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn ai_config_from_env_missing_key() {
    clear_env();
    assert!(AiConfig::from_env().is_none());
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.model, "gemini-1.5-flash");
    assert!(cfg.api_url.is_none());
}

#[test]
#[serial]
fn ai_config_from_env_custom_model_and_url() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::set_var("GEMINI_MODEL", "gemini-2.0-flash");
    std::env::set_var("GEMINI_API_URL", "http://localhost:1234/v1beta");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(
        cfg.generate_url(),
        "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
    );
}

#[test]
#[serial]
fn image_config_per_page_falls_back_on_garbage() {
    clear_env();
    std::env::set_var("PIXABAY_API_KEY", "p");
    std::env::set_var("PIXABAY_PER_PAGE", "lots");
    let cfg = ImageConfig::from_env().unwrap();
    assert_eq!(cfg.per_page, 10);

    std::env::set_var("PIXABAY_PER_PAGE", "25");
    assert_eq!(ImageConfig::from_env().unwrap().per_page, 25);
}

#[test]
#[serial]
fn config_from_env_reads_both_services() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "g");
    std::env::set_var("PIXABAY_API_KEY", "p");
    let cfg = Config::from_env();
    assert_eq!(cfg.ai.unwrap().api_key, "g");
    assert_eq!(cfg.images.unwrap().api_key, "p");
}

#[test]
#[serial]
fn config_without_image_key_disables_images() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "g");
    let cfg = Config::from_env();
    assert!(cfg.ai.is_some());
    assert!(cfg.images.is_none());
}
