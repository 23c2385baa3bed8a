use std::path::{Path, PathBuf};

use artipub_core::config::{RawConfig, ScalarValue};
use artipub_core::resolve::{coordinate_source, resolve, CoordinateSource};
use artipub_core::ArtifactCoordinate;
use artipub_util::errors::ManifestFormat;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/files")
}

fn with_url() -> RawConfig {
    RawConfig {
        url: Some("http".to_string()),
        ..Default::default()
    }
}

fn explicit(group: &str, artifact: &str, version: ScalarValue) -> RawConfig {
    RawConfig {
        group_id: Some(group.to_string()),
        artifact_id: Some(artifact.to_string()),
        version: Some(version),
        ..with_url()
    }
}

#[test]
fn test_missing_url_fails() {
    let err = resolve(&RawConfig::default(), &fixtures()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Artifactory URL is missing and Mandatory"));
}

#[test]
fn test_missing_url_fails_regardless_of_other_fields() {
    let raw = RawConfig {
        url: Some("   ".to_string()),
        pom: Some("pom.xml".to_string()),
        ..explicit("drone", "arti", "1.0".into())
    };
    let err = resolve(&raw, &fixtures()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Artifactory URL is missing and Mandatory"));
}

#[test]
fn test_defaults_are_applied() {
    let raw = explicit("drone", "artifactory", ScalarValue::Float(2.0));
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.username, "");
    assert_eq!(d.password, "");
    assert!(d.files.is_empty());
    assert!(!d.force_upload);
    assert!(d.repo_key.is_none());
    assert_eq!(d.coordinate.version, "2");
}

#[test]
fn test_no_coordinate_source_fails() {
    for raw in [
        with_url(),
        RawConfig {
            group_id: Some("drone".into()),
            ..with_url()
        },
        RawConfig {
            group_id: Some("drone".into()),
            artifact_id: Some("artifactory".into()),
            ..with_url()
        },
    ] {
        let err = resolve(&raw, &fixtures()).unwrap_err();
        assert!(
            err.to_string()
                .contains("Artifact details must be specified manually if no Pom file is given"),
            "got: {err}"
        );
    }
}

#[test]
fn test_explicit_coordinates_are_used() {
    let raw = explicit("com.example.drone", "artifactory", "0".into());
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(
        d.coordinate,
        ArtifactCoordinate::new("com.example.drone", "artifactory", "0")
    );
    assert!(d.manifest.is_none());
}

#[test]
fn test_explicit_coordinates_never_read_manifest() {
    // The pom path does not exist; reading it would fail.
    let raw = RawConfig {
        pom: Some("does-not-exist.xml".into()),
        ..explicit("drone", "arti", "1.0".into())
    };
    assert!(matches!(
        coordinate_source(&raw),
        Some(CoordinateSource::Explicit(_))
    ));
    let d = resolve(&raw, &fixtures()).unwrap();
    assert!(d.files.is_empty());
}

#[test]
fn test_partial_explicit_falls_back_to_pom() {
    let raw = RawConfig {
        group_id: Some("ignored".into()),
        pom: Some("pom.xml".into()),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.coordinate.group_id, "com.example.drone");
}

#[test]
fn test_pom_is_added_to_files() {
    let raw = RawConfig {
        pom: Some("pom.xml".into()),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.files, vec![PathBuf::from("pom.xml")]);
    assert_eq!(
        d.coordinate,
        ArtifactCoordinate::new("com.example.drone", "artifactory", "0")
    );
    let manifest = d.manifest.unwrap();
    assert_eq!(manifest.format, ManifestFormat::Pom);
}

#[test]
fn test_pom_is_not_duplicated_in_files() {
    let raw = RawConfig {
        pom: Some("pom.xml".into()),
        files: Some(vec!["pom.xml".into()]),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.files, vec![PathBuf::from("pom.xml")]);
}

#[test]
fn test_pom_appended_after_configured_files() {
    let raw = RawConfig {
        pom: Some("pom.xml".into()),
        files: Some(vec!["*.jar".into(), "./pom.xml".into()]),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(
        d.files,
        vec![PathBuf::from("*.jar"), PathBuf::from("./pom.xml")]
    );
}

#[test]
fn test_pom_preferred_over_package() {
    let raw = RawConfig {
        pom: Some("pom.xml".into()),
        package: Some("useless_package.json".into()),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.manifest.unwrap().format, ManifestFormat::Pom);
}

#[test]
fn test_package_file_is_read() {
    let raw = RawConfig {
        package: Some("package.json".into()),
        files: Some(vec![]),
        ..with_url()
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(
        d.coordinate,
        ArtifactCoordinate::new("com.example.drone", "artifactory", "0")
    );
    assert_eq!(d.files, vec![PathBuf::from("package.json")]);
}

#[test]
fn test_manifest_errors_propagate() {
    let raw = RawConfig {
        pom: Some("pom.json".into()),
        ..with_url()
    };
    let err = resolve(&raw, &fixtures()).unwrap_err();
    assert!(err
        .to_string()
        .contains("An error happened while trying to parse the pom file"));
}

#[test]
fn test_optional_settings_carry_through() {
    let raw = RawConfig {
        username: Some("admin".into()),
        password: Some("secret".into()),
        repo_key: Some("custom_repo".into()),
        force_upload: Some(true),
        insecure: Some(true),
        files: Some(vec!["test.jar".into(), "".into()]),
        ..explicit("drone", "arti", "2.0-SNAPSHOT".into())
    };
    let d = resolve(&raw, &fixtures()).unwrap();
    assert_eq!(d.username, "admin");
    assert_eq!(d.password, "secret");
    assert_eq!(d.repo_key.as_deref(), Some("custom_repo"));
    assert!(d.force_upload);
    assert!(d.transport.insecure);
    assert!(!d.transport.enable_proxy);
    assert_eq!(d.files, vec![PathBuf::from("test.jar")]);
}

#[test]
fn test_connection_settings_carry_through() {
    let root = fixtures();
    let raw = RawConfig {
        api_key: Some("AKC".to_string()),
        pem_file_path: Some("certs/ca.pem".to_string()),
        pem_file_contents: Some("  ".to_string()),
        ..explicit("drone", "arti", "1.0".into())
    };
    let d = resolve(&raw, &root).unwrap();
    assert_eq!(d.api_key.as_deref(), Some("AKC"));
    assert_eq!(d.transport.pem_path, Some(root.join("certs/ca.pem")));
    assert_eq!(d.transport.pem_contents, None);
}
