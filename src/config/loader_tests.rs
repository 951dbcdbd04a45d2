//! Tests for config loading

use super::*;
use std::io::Write;

use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_from_path(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.search.url, None);
    assert_eq!(config.search.debounce_ms, 300);
}

#[test]
fn test_valid_file_is_parsed() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[search]
url = "http://localhost:8000/users/search"
debounce_ms = 200
"#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.search.url.as_deref(),
        Some("http://localhost:8000/users/search")
    );
    assert_eq!(config.search.debounce_ms, 200);
    assert_eq!(config.dropdown.max_visible, 8);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[search\nurl = ");

    let result = load_from_path(&path);
    assert!(matches!(result, Err(MentioError::Config(_))));
}

#[test]
fn test_config_path_ends_with_expected_components() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/mentio/config.toml"));
    }
}
