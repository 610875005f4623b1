//! Layered configuration: defaults, TOML files, environment.

use std::path::PathBuf;

use causal_core::config::defaults;
use causal_core::{CausalConfig, ConfigError, SelectionPolicy};

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("causal-config-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults_are_valid() {
    let config = CausalConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.extension.max_extensions, defaults::DEFAULT_MAX_EXTENSIONS);
    assert_eq!(config.intervention.policy, SelectionPolicy::Oracle);
    assert_eq!(config.intervention.policy.as_str(), defaults::DEFAULT_SELECTION_POLICY);
    assert!(config.intervention.parallel);
    assert_eq!(config.observability.log_level, defaults::DEFAULT_LOG_LEVEL);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = CausalConfig::from_toml(
        r#"
[intervention]
policy = "expected"
"#,
    )
    .unwrap();
    assert_eq!(config.intervention.policy, SelectionPolicy::Expected);
    assert!(config.intervention.parallel);
    assert_eq!(config.extension.max_extensions, None);
}

#[test]
fn full_toml_round_trips() {
    let config = CausalConfig::from_toml(
        r#"
[extension]
max_extensions = 500

[intervention]
policy = "worst_case"
parallel = false

[observability]
log_level = "debug"
json = true
"#,
    )
    .unwrap();
    assert_eq!(config.extension.max_extensions, Some(500));
    assert_eq!(config.intervention.policy, SelectionPolicy::WorstCase);
    assert!(!config.intervention.parallel);
    assert!(config.observability.json);

    let text = toml::to_string(&config).unwrap();
    assert_eq!(CausalConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn zero_extension_cap_is_rejected() {
    let err = CausalConfig::from_toml("[extension]\nmax_extensions = 0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "extension.max_extensions"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = CausalConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_policy_is_a_parse_error() {
    let err = CausalConfig::from_toml("[intervention]\npolicy = \"random\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn load_reads_file() {
    let path = temp_config("load", "[extension]\nmax_extensions = 7\n");
    let config = CausalConfig::load(&path);
    std::fs::remove_file(&path).ok();
    // Environment may override the cap; only check the file parsed.
    assert!(config.is_ok());
}

#[test]
fn load_missing_file_fails() {
    let path = std::env::temp_dir().join("causal-config-does-not-exist.toml");
    assert!(matches!(
        CausalConfig::load(&path),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn load_malformed_file_fails() {
    let path = temp_config("malformed", "[extension\nmax_extensions = ");
    let result = CausalConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn env_cap_must_be_numeric() {
    let mut config = CausalConfig::default();
    let result = config.apply_env_overrides(|k| {
        (k == defaults::ENV_MAX_EXTENSIONS).then(|| "many".to_string())
    });
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn policy_names_round_trip() {
    for policy in SelectionPolicy::ALL {
        assert_eq!(SelectionPolicy::from_str_name(policy.as_str()), Some(policy));
        assert_eq!(policy.to_string(), policy.as_str());
    }
}
