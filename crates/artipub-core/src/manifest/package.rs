//! Package descriptor reader (`package.json`).
//!
//! Coordinates are taken from `groupId`, `artifactId` and `version`. The
//! snake-case spellings are accepted too, and `group`/`name` serve as
//! fallbacks for descriptors written for other tooling. When several
//! spellings are present the camel-case key wins.

use serde::Deserialize;

use super::{ManifestFormat, ManifestReader};
use crate::config::ScalarValue;
use crate::coordinate::PartialCoordinate;

#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    #[serde(default, rename = "groupId")]
    group_id: Option<String>,
    #[serde(default, rename = "group_id")]
    group_id_snake: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default, rename = "artifactId")]
    artifact_id: Option<String>,
    #[serde(default, rename = "artifact_id")]
    artifact_id_snake: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<ScalarValue>,
}

/// [`ManifestReader`] for JSON package descriptors.
pub struct PackageReader;

impl ManifestReader for PackageReader {
    const FORMAT: ManifestFormat = ManifestFormat::Package;

    fn parse(content: &str) -> Result<PartialCoordinate, String> {
        let pkg: PackageDescriptor = serde_json::from_str(content).map_err(|e| e.to_string())?;
        Ok(PartialCoordinate {
            group_id: pkg.group_id.or(pkg.group_id_snake).or(pkg.group),
            artifact_id: pkg.artifact_id.or(pkg.artifact_id_snake).or(pkg.name),
            version: pkg.version.map(|v| v.normalize()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_fields() {
        let c = PackageReader::parse(
            r#"{"groupId": "com.example.drone", "artifactId": "artifactory", "version": "0"}"#,
        )
        .unwrap();
        assert_eq!(c.group_id.as_deref(), Some("com.example.drone"));
        assert_eq!(c.artifact_id.as_deref(), Some("artifactory"));
        assert_eq!(c.version.as_deref(), Some("0"));
    }

    #[test]
    fn camel_and_snake_keys_together_prefer_camel() {
        let c = PackageReader::parse(
            r#"{"groupId": "com.a", "group_id": "com.b", "artifactId": "x", "artifact_id": "y", "version": "1"}"#,
        )
        .unwrap();
        assert_eq!(c.group_id.as_deref(), Some("com.a"));
        assert_eq!(c.artifact_id.as_deref(), Some("x"));
    }

    #[test]
    fn falls_back_to_name_and_group() {
        let c = PackageReader::parse(
            r#"{"group": "com.example", "name": "web-ui", "version": "1.2.3", "private": true}"#,
        )
        .unwrap();
        assert_eq!(c.group_id.as_deref(), Some("com.example"));
        assert_eq!(c.artifact_id.as_deref(), Some("web-ui"));
    }

    #[test]
    fn explicit_artifact_id_beats_name() {
        let c =
            PackageReader::parse(r#"{"artifact_id": "core", "name": "@scope/core"}"#).unwrap();
        assert_eq!(c.artifact_id.as_deref(), Some("core"));
    }

    #[test]
    fn numeric_version_is_normalized() {
        let c = PackageReader::parse(r#"{"version": 2.0}"#).unwrap();
        assert_eq!(c.version.as_deref(), Some("2"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PackageReader::parse("{ not json").is_err());
        assert!(PackageReader::parse("<project/>").is_err());
    }

    #[test]
    fn non_object_is_an_error() {
        assert!(PackageReader::parse("[1, 2, 3]").is_err());
    }
}
