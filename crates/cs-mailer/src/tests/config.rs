use crate::config::{MailerConfig, PLACEHOLDER_PUBLIC_KEY};

#[test]
fn test_default_config_is_not_configured() {
    let config = MailerConfig::default();

    assert_eq!(config.public_key, PLACEHOLDER_PUBLIC_KEY);
    assert!(!config.is_configured());
}

#[test]
fn test_real_public_key_means_configured() {
    let config = MailerConfig {
        public_key: "pk_live_1234".to_string(),
        ..Default::default()
    };

    assert!(config.is_configured());
}

#[test]
fn test_empty_public_key_means_not_configured() {
    let config = MailerConfig {
        public_key: String::new(),
        ..Default::default()
    };

    assert!(!config.is_configured());
}
