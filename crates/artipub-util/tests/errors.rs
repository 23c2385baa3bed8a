use std::path::PathBuf;

use artipub_util::errors::{ArtipubError, ManifestFormat};

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = ArtipubError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_configuration_error_display() {
    let err = ArtipubError::Configuration {
        message: "Artifactory URL is missing and Mandatory".to_string(),
    };
    assert_eq!(err.to_string(), "Artifactory URL is missing and Mandatory");
}

#[test]
fn test_manifest_not_found_display_per_format() {
    let pom = ArtipubError::ManifestNotFound {
        format: ManifestFormat::Pom,
        path: PathBuf::from("NOP"),
    };
    assert_eq!(pom.to_string(), "Given pom file has to exists: NOP");

    let package = ArtipubError::ManifestNotFound {
        format: ManifestFormat::Package,
        path: PathBuf::from("NOP"),
    };
    assert!(package
        .to_string()
        .contains("Given package file has to exist"));
}

#[test]
fn test_manifest_parse_display() {
    let err = ArtipubError::ManifestParse {
        format: ManifestFormat::Package,
        message: "expected value at line 1".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "An error happened while trying to parse the package file: expected value at line 1"
    );
}

#[test]
fn test_manifest_incomplete_lists_missing_fields() {
    let err = ArtipubError::ManifestIncomplete {
        format: ManifestFormat::Pom,
        missing: vec!["groupId", "version"],
    };
    let msg = err.to_string();
    assert!(msg.starts_with("Some artifact details are missing from Pom file"));
    assert!(msg.contains("groupId, version"), "got: {msg}");
}

#[test]
fn test_conflict_error_display() {
    let err = ArtipubError::Conflict {
        path: "libs-release-local/a/b/1.0/b-1.0.jar".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Artifact already exists at libs-release-local/a/b/1.0/b-1.0.jar"
    );
}

#[test]
fn test_transport_error_display() {
    let err = ArtipubError::Transport {
        message: "HTTP 500".to_string(),
    };
    assert_eq!(err.to_string(), "Transport error: HTTP 500");
}

#[test]
fn test_manifest_format_config_key() {
    assert_eq!(ManifestFormat::Pom.config_key(), "pom");
    assert_eq!(ManifestFormat::Package.to_string(), "package");
}
