//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::{Path, PathBuf};
use swatch_common::{ConfigError, EvictionPolicy};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_swatch_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[cache]
eviction = "strict_lru"

[palette]
accent = "#00d4ff"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.cache.eviction, EvictionPolicy::StrictLru);
    assert_eq!(config.palette.get("accent"), Some("#00d4ff"));
    // Defaults preserved
    assert_eq!(config.cache.max_entries, 1024);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_eviction_policy_is_parse_error() {
    let result = load_from_str("[cache]\neviction = \"random\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_still_returns_parsed() {
    let config = load_from_str("[cache]\nmax_entries = 0\n").unwrap();
    assert_eq!(config.cache.max_entries, 0);
}

#[test]
fn empty_string_gives_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config, crate::SwatchConfig::default());
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[cache]"));
    assert!(content.contains("[palette]"));
}

#[test]
fn default_template_parses_to_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::SwatchConfig::default());
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[cache]\nmax_entries = 8\n").unwrap();

    let result = create_default_config(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
    assert_eq!(load_from_path(&path).unwrap().cache.max_entries, 8);
}

#[test]
fn config_path_prefers_explicit_path() {
    let path = super::paths::resolve_config_path(
        Some(PathBuf::from("/etc/swatch.toml")),
        Some(PathBuf::from("/home/me/.config")),
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/etc/swatch.toml"));
}

#[test]
fn config_path_falls_back_to_config_dir() {
    let config_dir = Some(PathBuf::from("/home/me/.config"));
    let path = super::paths::resolve_config_path(Some(PathBuf::new()), config_dir).unwrap();
    assert_eq!(path, PathBuf::from("/home/me/.config/swatch/config.toml"));
}

#[test]
fn config_path_without_any_directory_names_the_env_var() {
    let err = super::paths::resolve_config_path(None, None).unwrap_err();
    assert!(err.to_string().contains(CONFIG_PATH_ENV));
}

#[test]
fn default_template_declares_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.version, crate::CONFIG_SCHEMA_VERSION);
}
