use moviegrid::config::{Config, ConfigError, SourceConfig, DEFAULT_CATALOG_URL};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

/// Test that Config::default() points at the public catalog.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.source.url, DEFAULT_CATALOG_URL);
    assert_eq!(config.source.request_timeout_seconds, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_source_section() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[source]
url = "http://127.0.0.1:8080/movies.json"
request_timeout_seconds = 5
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.source,
        SourceConfig {
            url: "http://127.0.0.1:8080/movies.json".to_string(),
            request_timeout_seconds: 5,
        }
    );
}

#[test]
fn test_partial_section_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[source]\nrequest_timeout_seconds = 12\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.url, DEFAULT_CATALOG_URL);
    assert_eq!(config.source.request_timeout_seconds, 12);
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[source\nurl = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[source]\nrequest_timeout_seconds = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_non_http_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[source]\nurl = \"ftp://example.com/movies\"\n");

    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("ftp://")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[source]\nrequest_timeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_empty_url_fails_validation() {
    let mut config = Config::default();
    config.source.url = "   ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_overrides_replace_file_values() {
    let config = Config::default().with_overrides(
        Some("https://example.com/catalog.json".to_string()),
        Some(3),
    );
    assert_eq!(config.source.url, "https://example.com/catalog.json");
    assert_eq!(config.source.request_timeout_seconds, 3);

    let untouched = Config::default().with_overrides(None, None);
    assert_eq!(untouched, Config::default());
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("moviegrid/config.toml"));
}
