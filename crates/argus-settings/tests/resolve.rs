use argus_settings::{
    DEFAULT_API_KEY_ENV, DEFAULT_PORT, LogLevel, Overrides, parse_config_toml, resolve_settings,
};
use camino::Utf8PathBuf;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn empty_config_resolves_to_standard_profile() {
    let cfg = parse_config_toml("").unwrap();
    let resolved = resolve_settings(cfg, Overrides::default()).unwrap();

    assert_eq!(resolved.policy.profile, "standard");
    assert_eq!(resolved.policy.provider_timeout, Duration::from_millis(5_000));
    assert_eq!(resolved.policy.registry_timeout, Duration::from_millis(1_000));
    assert!(!resolved.policy.issuer_reputation);
    assert_eq!(resolved.server.port, DEFAULT_PORT);
    assert_eq!(resolved.reputation.api_key_env, DEFAULT_API_KEY_ENV);
    assert_eq!(resolved.registry_path, None);
    assert_eq!(resolved.log_level, LogLevel::Info);
}

#[test]
fn strict_profile_enables_issuer_screening() {
    let cfg = parse_config_toml("profile = \"strict\"").unwrap();
    let resolved = resolve_settings(cfg, Overrides::default()).unwrap();
    assert_eq!(resolved.policy.profile, "strict");
    assert!(resolved.policy.issuer_reputation);
    assert!(resolved.policy.provider_timeout < Duration::from_millis(5_000));
}

#[test]
fn file_values_override_preset() {
    let cfg = parse_config_toml(
        r#"
profile = "strict"

[server]
host = "127.0.0.1"
port = 8080

[reputation]
base_url = "http://localhost:9000"
timeout_ms = 250
api_key_env = "ARGUS_KEY"

[registry]
path = "/etc/argus/registry.toml"
timeout_ms = 75

[assets]
issuer_reputation = false

[logging]
level = "DEBUG"
"#,
    )
    .unwrap();
    let resolved = resolve_settings(cfg, Overrides::default()).unwrap();

    assert_eq!(resolved.server.bind_addr(), "127.0.0.1:8080");
    assert_eq!(resolved.reputation.base_url, "http://localhost:9000");
    assert_eq!(resolved.reputation.api_key_env, "ARGUS_KEY");
    assert_eq!(resolved.policy.provider_timeout, Duration::from_millis(250));
    assert_eq!(resolved.policy.registry_timeout, Duration::from_millis(75));
    assert!(!resolved.policy.issuer_reputation);
    assert_eq!(
        resolved.registry_path.as_deref().map(|p| p.as_str()),
        Some("/etc/argus/registry.toml")
    );
    assert_eq!(resolved.log_level, LogLevel::Debug);
}

#[test]
fn overrides_win_over_file() {
    let cfg = parse_config_toml(
        "profile = \"strict\"\n[server]\nport = 8080\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();
    let overrides = Overrides {
        profile: Some("standard".to_string()),
        port: Some(4000),
        host: Some("::1".to_string()),
        log_level: Some("trace".to_string()),
        ..Overrides::default()
    };
    let resolved = resolve_settings(cfg, overrides).unwrap();
    assert_eq!(resolved.policy.profile, "standard");
    assert_eq!(resolved.server.port, 4000);
    assert_eq!(resolved.server.host, "::1");
    assert_eq!(resolved.log_level, LogLevel::Trace);
}

#[test]
fn relative_registry_path_follows_config_dir() {
    let cfg = parse_config_toml("[registry]\npath = \"data/registry.toml\"").unwrap();
    let overrides = Overrides {
        config_dir: Some(Utf8PathBuf::from("/srv/argus")),
        ..Overrides::default()
    };
    let resolved = resolve_settings(cfg, overrides).unwrap();
    assert_eq!(
        resolved.registry_path,
        Some(Utf8PathBuf::from("/srv/argus/data/registry.toml"))
    );
}

#[test]
fn rejects_bad_values() {
    for input in [
        "profile = \"paranoid\"",
        "[reputation]\ntimeout_ms = 0",
        "[registry]\ntimeout_ms = 0",
        "[reputation]\nbase_url = \"ftp://example.com\"",
        "[reputation]\napi_key_env = \" \"",
        "[logging]\nlevel = \"loud\"",
    ] {
        let cfg = parse_config_toml(input).unwrap();
        assert!(
            resolve_settings(cfg, Overrides::default()).is_err(),
            "accepted {input:?}"
        );
    }
}

#[test]
fn rejects_unknown_schema_and_bad_types() {
    assert!(parse_config_toml("schema = \"argus.config.v2\"").is_err());
    assert!(parse_config_toml("schema = \"argus.config.v1\"").is_ok());
    assert!(parse_config_toml("[server]\nport = \"eighty\"").is_err());
}

proptest! {
    #[test]
    fn positive_timeouts_are_taken_verbatim(ms in 1u64..=600_000) {
        let cfg = parse_config_toml(&format!("[reputation]\ntimeout_ms = {ms}")).unwrap();
        let resolved = resolve_settings(cfg, Overrides::default()).unwrap();
        prop_assert_eq!(resolved.policy.provider_timeout, Duration::from_millis(ms));
    }
}
