use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn server_config_requires_database_url() {
    let err = ServerConfig::from_lookup(&lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn server_config_blank_database_url_is_missing() {
    let err = ServerConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn server_config_defaults() {
    let cfg = ServerConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "postgres://localhost/site")])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.db_max_connections, 5);
    assert!(!cfg.cookie_secure);
    assert_eq!(cfg.guard_policy, GuardPolicyKind::Permissive);
    assert!(cfg.resend.is_none());
    assert!(cfg.telegram.is_none());
    assert!(cfg.staff_seed.is_none());
}

#[test]
fn server_config_parses_overrides() {
    let cfg = ServerConfig::from_lookup(&lookup_from(&[
        ("DATABASE_URL", "postgres://localhost/site"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("COOKIE_SECURE", "yes"),
        ("GUARD_POLICY", "strict"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.guard_policy, GuardPolicyKind::Strict);
}

#[test]
fn server_config_rejects_bad_port() {
    let err = ServerConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn server_config_rejects_unknown_guard_policy() {
    let err = ServerConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "postgres://x"), ("GUARD_POLICY", "paranoid")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "GUARD_POLICY", .. }));
}

#[test]
fn server_config_rejects_bad_cookie_flag() {
    let err = ServerConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "postgres://x"), ("COOKIE_SECURE", "maybe")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "COOKIE_SECURE", .. }));
}

#[test]
fn cookie_secure_follows_https_site_url() {
    let cfg = ServerConfig::from_lookup(&lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("SITE_URL", "https://studio.example"),
    ]))
    .unwrap();
    assert!(cfg.cookie_secure);

    let cfg = ServerConfig::from_lookup(&lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("SITE_URL", "https://studio.example"),
        ("COOKIE_SECURE", "off"),
    ]))
    .unwrap();
    assert!(!cfg.cookie_secure);
}

// =============================================================================
// Optional integrations
// =============================================================================

#[test]
fn resend_config_needs_all_three_values() {
    assert!(ResendConfig::from_lookup(&lookup_from(&[("RESEND_API_KEY", "re_1"), ("RESEND_FROM", "site@x")])).is_none());
    let cfg = ResendConfig::from_lookup(&lookup_from(&[
        ("RESEND_API_KEY", "re_1"),
        ("RESEND_FROM", "site@studio.example"),
        ("CONTACT_INBOX", "hello@studio.example"),
    ]))
    .unwrap();
    assert_eq!(cfg.to, "hello@studio.example");
}

#[test]
fn resend_debug_hides_api_key() {
    let cfg = ResendConfig { api_key: "re_secret".into(), from: "a@x".into(), to: "b@x".into() };
    assert!(!format!("{cfg:?}").contains("re_secret"));
}

#[test]
fn telegram_config_defaults_api_base() {
    let cfg = TelegramConfig::from_lookup(&lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc"), ("TELEGRAM_CHAT_ID", "-100")]))
        .unwrap();
    assert_eq!(cfg.api_base, "https://api.telegram.org");
    assert_eq!(cfg.chat_id, "-100");
}

#[test]
fn telegram_config_trims_trailing_slash() {
    let cfg = TelegramConfig::from_lookup(&lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_CHAT_ID", "-100"),
        ("TELEGRAM_API_BASE", "http://localhost:9000/"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base, "http://localhost:9000");
}

#[test]
fn telegram_config_missing_chat_is_none() {
    assert!(TelegramConfig::from_lookup(&lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).is_none());
}

#[test]
fn staff_seed_debug_hides_password() {
    let seed = StaffSeed::from_lookup(&lookup_from(&[("STAFF_EMAIL", "ops@studio.example"), ("STAFF_PASSWORD", "hunter22")]))
        .unwrap();
    assert!(!format!("{seed:?}").contains("hunter22"));
}
