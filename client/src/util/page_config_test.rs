use super::*;

#[test]
fn normalize_api_base_trims_whitespace_and_slashes() {
    assert_eq!(
        normalize_api_base(Some("  https://api.example.com//  ")),
        Some("https://api.example.com".to_owned())
    );
}

#[test]
fn normalize_api_base_blank_is_none() {
    assert_eq!(normalize_api_base(Some("   ")), None);
    assert_eq!(normalize_api_base(Some("/")), None);
    assert_eq!(normalize_api_base(None), None);
}

#[test]
fn page_config_without_base_is_demo_mode() {
    let config = PageConfig::new(None);
    assert!(config.demo_mode());
    assert_eq!(config.base_url(), "");
}

#[test]
fn page_config_with_base_uses_api() {
    let config = PageConfig::new(Some("https://api.example.com/"));
    assert!(!config.demo_mode());
    assert_eq!(config.base_url(), "https://api.example.com");
}
