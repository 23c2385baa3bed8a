//! Maven-style `group:artifact:version` coordinates.

use std::fmt;

use serde::Serialize;

use artipub_util::errors::{ArtipubError, ManifestFormat};

/// Version suffix that routes uploads to the snapshot repository.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A fully resolved artifact coordinate. All three parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Whether the version carries the `-SNAPSHOT` suffix.
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Coordinate parts as read from a manifest, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCoordinate {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl PartialCoordinate {
    /// Promote to a full coordinate, or report which parts are missing.
    /// Blank values count as missing.
    pub fn complete(self, format: ManifestFormat) -> Result<ArtifactCoordinate, ArtipubError> {
        let group_id = filled(self.group_id);
        let artifact_id = filled(self.artifact_id);
        let version = filled(self.version);

        match (group_id, artifact_id, version) {
            (Some(g), Some(a), Some(v)) => Ok(ArtifactCoordinate::new(g, a, v)),
            (g, a, v) => {
                let mut missing = Vec::new();
                if g.is_none() {
                    missing.push("groupId");
                }
                if a.is_none() {
                    missing.push("artifactId");
                }
                if v.is_none() {
                    missing.push("version");
                }
                Err(ArtipubError::ManifestIncomplete { format, missing })
            }
        }
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
