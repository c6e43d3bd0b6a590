// tests/config_test.rs
use project_semver::config::{load_config, Config, CONFIG_ENV_VAR};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.declared, None);
    assert!(config.components.is_empty());
    assert!(!config.behavior.strict);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
declared = "0.4.0"

[components]
"plugin-a" = "0.4.0"
"plugin-b" = "0.5.0-rc.1"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.declared.as_deref(), Some("0.4.0"));
    assert_eq!(
        config.components.get("plugin-b"),
        Some(&"0.5.0-rc.1".to_string())
    );
    assert!(!config.behavior.strict);
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/components.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.components.len(), 3);
    assert!(config.behavior.strict);
}

#[test]
fn test_load_missing_file_is_error() {
    assert!(load_config(Some("tests/fixtures/missing.toml")).is_err());
}

#[test]
fn test_load_invalid_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[components\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration file"));
}

#[test]
#[serial]
fn test_load_from_env_var() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"declared = \"3.0.0\"\n").unwrap();
    temp_file.flush().unwrap();

    std::env::set_var(CONFIG_ENV_VAR, temp_file.path());
    let config = load_config(None);
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().declared.as_deref(), Some("3.0.0"));
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env_var() {
    std::env::set_var(CONFIG_ENV_VAR, "tests/fixtures/missing.toml");
    let config = load_config(Some("tests/fixtures/components.toml"));
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().declared.as_deref(), Some("1.2.0"));
}
