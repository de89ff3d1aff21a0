use std::fs;

use mfuko_config::{Config, ConfigError, ConfigManager};
use mfuko_domain::CheckoutMode;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = manager.load().expect("load defaults");

    assert_eq!(config.currency, "TZS");
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.backend.checkout_function, "stripe-checkout");
    assert!(!config.backend.is_configured());
    let premium = config.product("premium").expect("default premium product");
    assert_eq!(premium.mode, CheckoutMode::Subscription);
}

#[test]
fn save_then_load_preserves_changes() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let mut config = Config::default();
    config.currency = "KES".into();
    config.backend.base_url = Some("https://project.example.co".into());
    config.data_path = Some(dir.path().join("dataset.json"));

    manager.save(&config).expect("save config");
    assert!(manager.config_path().exists());
    assert!(!manager.config_path().with_extension("json.tmp").exists());

    let loaded = manager.load().expect("reload config");
    assert_eq!(loaded, config);
    assert!(loaded.backend.is_configured());
}

#[test]
fn partial_document_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(
        manager.config_path(),
        r#"{ "backend": { "base_url": "https://project.example.co", "api_key": "anon" } }"#,
    )
    .expect("write partial config");

    let config = manager.load().expect("load partial config");
    assert_eq!(config.currency, "TZS");
    assert_eq!(config.backend.api_key.as_deref(), Some("anon"));
    assert_eq!(config.backend.subscriptions_table, "stripe_user_subscriptions");
    assert_eq!(config.products.len(), 1);
}

#[test]
fn malformed_document_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(manager.config_path(), "{ not json").expect("write garbage");

    match manager.load() {
        Err(ConfigError::Serde(_)) => {}
        other => panic!("expected serde error, got {other:?}"),
    }
}
