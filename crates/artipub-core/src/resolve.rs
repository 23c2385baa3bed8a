//! Parameter resolution: raw configuration in, validated descriptor out.
//!
//! Coordinates come from the first available source, in order: explicit
//! `group_id`/`artifact_id`/`version`, the `pom` file, the `package` file.
//! A manifest is only read when the explicit coordinate is incomplete.

use std::path::{Path, PathBuf};

use artipub_util::errors::{ArtipubError, ManifestFormat};

use crate::config::{non_blank, RawConfig};
use crate::coordinate::ArtifactCoordinate;
use crate::descriptor::{ManifestRef, TransportOptions, UploadDescriptor};
use crate::manifest;

pub const MISSING_URL: &str = "Artifactory URL is missing and Mandatory";
pub const MISSING_COORDINATES: &str =
    "Artifact details must be specified manually if no Pom file is given";

const DEFAULT_USERNAME: &str = "";
const DEFAULT_PASSWORD: &str = "";
const DEFAULT_FORCE_UPLOAD: bool = false;

/// Where the coordinate for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateSource {
    Explicit(ArtifactCoordinate),
    Manifest { format: ManifestFormat, path: PathBuf },
}

/// Pick the coordinate source without touching the filesystem.
///
/// Returns `None` when neither explicit coordinates nor a manifest path
/// are configured.
pub fn coordinate_source(raw: &RawConfig) -> Option<CoordinateSource> {
    let version = raw.version.as_ref().map(|v| v.normalize());
    let explicit = (
        non_blank(raw.group_id.as_deref()),
        non_blank(raw.artifact_id.as_deref()),
        non_blank(version.as_deref()),
    );
    if let (Some(g), Some(a), Some(v)) = explicit {
        return Some(CoordinateSource::Explicit(ArtifactCoordinate::new(g, a, v)));
    }

    if let Some(pom) = non_blank(raw.pom.as_deref()) {
        return Some(CoordinateSource::Manifest {
            format: ManifestFormat::Pom,
            path: PathBuf::from(pom),
        });
    }
    if let Some(package) = non_blank(raw.package.as_deref()) {
        return Some(CoordinateSource::Manifest {
            format: ManifestFormat::Package,
            path: PathBuf::from(package),
        });
    }
    None
}

/// Validate `raw` and build the descriptor for `workspace_root`.
///
/// Fails before any network activity: missing URL, no coordinate source,
/// or a manifest that is missing, unparsable or incomplete. The returned
/// descriptor's `files` are still unexpanded patterns.
pub fn resolve(raw: &RawConfig, workspace_root: &Path) -> miette::Result<UploadDescriptor> {
    let Some(server_url) = non_blank(raw.url.as_deref()) else {
        return Err(ArtipubError::Configuration {
            message: MISSING_URL.to_string(),
        }
        .into());
    };

    let mut files: Vec<PathBuf> = raw
        .files
        .iter()
        .flatten()
        .filter(|f| !f.trim().is_empty())
        .map(PathBuf::from)
        .collect();

    let (coordinate, manifest) = match coordinate_source(raw) {
        Some(CoordinateSource::Explicit(coordinate)) => {
            tracing::info!("Using configured coordinate {coordinate}");
            (coordinate, None)
        }
        Some(CoordinateSource::Manifest { format, path }) => {
            let extracted = manifest::extract(format, workspace_root, &path)?;
            tracing::info!(
                "Read coordinate {} from {}",
                extracted.coordinate,
                extracted.path.display()
            );
            if !files.iter().any(|f| same_entry(f, &extracted.path)) {
                files.push(extracted.path.clone());
            }
            (
                extracted.coordinate,
                Some(ManifestRef {
                    format,
                    path: extracted.path,
                }),
            )
        }
        None => {
            return Err(ArtipubError::Configuration {
                message: MISSING_COORDINATES.to_string(),
            }
            .into());
        }
    };

    Ok(UploadDescriptor {
        server_url: server_url.to_string(),
        username: non_blank(raw.username.as_deref())
            .unwrap_or(DEFAULT_USERNAME)
            .to_string(),
        password: raw
            .password
            .clone()
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        access_token: non_blank(raw.access_token.as_deref()).map(str::to_string),
        api_key: non_blank(raw.api_key.as_deref()).map(str::to_string),
        repo_key: non_blank(raw.repo_key.as_deref()).map(str::to_string),
        coordinate,
        files,
        force_upload: raw.force_upload.unwrap_or(DEFAULT_FORCE_UPLOAD),
        workspace_root: workspace_root.to_path_buf(),
        manifest,
        transport: TransportOptions {
            insecure: raw.insecure.unwrap_or(false),
            enable_proxy: raw.enable_proxy.unwrap_or(false),
            pem_contents: non_blank(raw.pem_file_contents.as_deref()).map(str::to_string),
            pem_path: non_blank(raw.pem_file_path.as_deref()).map(|p| workspace_root.join(p)),
        },
    })
}

fn same_entry(a: &Path, b: &Path) -> bool {
    let strip = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, std::path::Component::CurDir))
            .collect()
    };
    strip(a) == strip(b)
}
