//! The validated upload descriptor handed to the upload orchestrator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use artipub_util::errors::ManifestFormat;

use crate::coordinate::ArtifactCoordinate;

/// The manifest coordinates were read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRef {
    #[serde(serialize_with = "serialize_format")]
    pub format: ManifestFormat,
    /// Path as configured, relative to the workspace root.
    pub path: PathBuf,
}

fn serialize_format<S: serde::Serializer>(
    format: &ManifestFormat,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(format.config_key())
}

/// HTTP client knobs that do not affect upload semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransportOptions {
    pub insecure: bool,
    pub enable_proxy: bool,
    /// Inline PEM data; takes precedence over `pem_path`.
    #[serde(skip_serializing)]
    pub pem_contents: Option<String>,
    pub pem_path: Option<PathBuf>,
}

/// Everything needed to publish one coordinate.
///
/// Built once by [`crate::resolve::resolve`]. Right after resolution `files`
/// still holds the configured patterns; [`UploadDescriptor::with_files`]
/// swaps them for the expanded, de-duplicated paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadDescriptor {
    pub server_url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub repo_key: Option<String>,
    pub coordinate: ArtifactCoordinate,
    pub files: Vec<PathBuf>,
    pub force_upload: bool,
    pub workspace_root: PathBuf,
    pub manifest: Option<ManifestRef>,
    pub transport: TransportOptions,
}

impl UploadDescriptor {
    /// File patterns as strings, for the file expander.
    pub fn patterns(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    /// Replace the file list, keeping the first occurrence of each path.
    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = dedup_preserving_order(files);
        self
    }

    /// Absolute-or-root-relative location of a file entry.
    pub fn locate(&self, file: &Path) -> PathBuf {
        self.workspace_root.join(file)
    }

    /// Whether `file` is the manifest coordinates were extracted from.
    pub fn is_manifest(&self, file: &Path, format: ManifestFormat) -> bool {
        match &self.manifest {
            Some(m) if m.format == format => {
                normalize(&self.locate(&m.path)) == normalize(&self.locate(file))
            }
            _ => false,
        }
    }
}

fn dedup_preserving_order(files: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    files
        .into_iter()
        .filter(|f| seen.insert(normalize(f)))
        .collect()
}

/// Lexically drop `.` components so `./a/pom.xml` and `a/pom.xml` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}
