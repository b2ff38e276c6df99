// Rust guideline compliant 2026-10-15

//! Tests for core error formatting and conversions.

use folio_core::{Error, Mode, Project};

#[test]
fn test_display_messages() {
    assert_eq!(
        Error::NotFound("prj-abc123".to_string()).to_string(),
        "Project not found: prj-abc123"
    );
    assert_eq!(
        Error::InvalidConfig("bad".to_string()).to_string(),
        "Invalid config: bad"
    );
}

#[test]
fn test_io_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}

#[test]
fn test_json_conversion() {
    let parse = serde_json::from_str::<Project>("{").expect_err("Expected parse failure");
    let err: Error = parse.into();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_invalid_mode_value() {
    let err = "gallery".parse::<Mode>().expect_err("Expected invalid mode");
    assert!(matches!(err, Error::InvalidValue(_)));
}

#[test]
fn test_blank_title_is_invalid_project() {
    let project = Project::new("prj-000001".to_string(), Mode::Std, String::new(), " ".to_string());
    assert!(matches!(project.validate(), Err(Error::InvalidProject(_))));
}
