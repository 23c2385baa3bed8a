//! Manifest readers: pull artifact coordinates out of a project manifest.
//!
//! Both formats share one shape of failure (missing file, unparsable file,
//! incomplete coordinate) and differ only in how the document is parsed.
//! Each format implements [`ManifestReader`]; [`extract`] picks the reader
//! from a [`ManifestFormat`].

pub mod package;
pub mod pom;

use std::path::{Path, PathBuf};

pub use artipub_util::errors::ManifestFormat;
use artipub_util::errors::ArtipubError;

use crate::coordinate::{ArtifactCoordinate, PartialCoordinate};

/// Parses one manifest format into coordinate parts.
pub trait ManifestReader {
    /// Format this reader handles; used to tag errors.
    const FORMAT: ManifestFormat;

    /// Parse the manifest text. `Err` carries the parser's message.
    fn parse(content: &str) -> Result<PartialCoordinate, String>;
}

/// A coordinate read from a manifest, plus the manifest path to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedManifest {
    pub coordinate: ArtifactCoordinate,
    /// The manifest path as configured (relative to the workspace root).
    pub path: PathBuf,
}

/// Read coordinates from the manifest at `path` (relative to `workspace_root`).
pub fn extract(
    format: ManifestFormat,
    workspace_root: &Path,
    path: &Path,
) -> Result<ExtractedManifest, ArtipubError> {
    match format {
        ManifestFormat::Pom => read_manifest::<pom::PomReader>(workspace_root, path),
        ManifestFormat::Package => read_manifest::<package::PackageReader>(workspace_root, path),
    }
}

/// Shared not-found / parse / incomplete handling for any reader.
pub fn read_manifest<R: ManifestReader>(
    workspace_root: &Path,
    path: &Path,
) -> Result<ExtractedManifest, ArtipubError> {
    let full = workspace_root.join(path);
    if !full.is_file() {
        return Err(ArtipubError::ManifestNotFound {
            format: R::FORMAT,
            path: full,
        });
    }

    let content = std::fs::read_to_string(&full).map_err(|e| ArtipubError::ManifestParse {
        format: R::FORMAT,
        message: format!("failed to read {}: {e}", full.display()),
    })?;

    let partial = R::parse(&content).map_err(|message| ArtipubError::ManifestParse {
        format: R::FORMAT,
        message,
    })?;

    let coordinate = partial.complete(R::FORMAT)?;
    tracing::debug!("Read {coordinate} from {} file {}", R::FORMAT, full.display());

    Ok(ExtractedManifest {
        coordinate,
        path: path.to_path_buf(),
    })
}
