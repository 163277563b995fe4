//! Tests for FetchError and AppError

use super::*;

#[test]
fn test_status_error_display() {
    let error = FetchError::Status {
        code: 503,
        url: "https://example.test/users".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Failed to fetch suggestions"));
    assert!(msg.contains("503"));
    assert!(msg.contains("https://example.test/users"));
}

#[test]
fn test_network_error_display() {
    let error = FetchError::Network("connection refused".to_string());
    assert_eq!(error.to_string(), "Network error: connection refused");
}

#[test]
fn test_decode_error_display() {
    let error = FetchError::Decode("expected a sequence".to_string());
    assert!(error.to_string().contains("expected a sequence"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let app_err = AppError::from(io_err);
    assert!(matches!(app_err, AppError::Io(_)));
    assert!(app_err.to_string().contains("test error"));
}

#[test]
fn test_config_error_names_path() {
    let source = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let error = AppError::Config {
        path: PathBuf::from("/tmp/typeahead.toml"),
        source,
    };
    assert!(error.to_string().contains("/tmp/typeahead.toml"));
}
