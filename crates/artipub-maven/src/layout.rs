//! Repository layout: repo key selection, Maven paths, base URL handling.

use std::path::Path;

use reqwest::Url;

use artipub_core::coordinate::ArtifactCoordinate;
use artipub_core::descriptor::UploadDescriptor;
use artipub_util::errors::{ArtipubError, ManifestFormat};

/// Default repository for release versions.
pub const RELEASE_REPO_KEY: &str = "libs-release-local";

/// Default repository for `-SNAPSHOT` versions.
pub const SNAPSHOT_REPO_KEY: &str = "libs-snapshot-local";

/// Path segment under which Artifactory serves its repositories.
const ARTIFACTORY_SEGMENT: &str = "/artifactory";

/// `com.example.xyz` becomes `com/example/xyz`.
pub fn replace_dots(group: &str) -> String {
    group.replace('.', "/")
}

/// Repository key for a coordinate. An explicit override always wins.
pub fn repo_key<'a>(coordinate: &ArtifactCoordinate, override_key: Option<&'a str>) -> &'a str {
    match override_key {
        Some(key) => key,
        None if coordinate.is_snapshot() => SNAPSHOT_REPO_KEY,
        None => RELEASE_REPO_KEY,
    }
}

/// Standard Maven layout path for a given coordinate.
///
/// `com.example.drone:artifactory:2.0` becomes
/// `com/example/drone/artifactory/2.0`
pub fn coordinate_path(coordinate: &ArtifactCoordinate) -> String {
    format!(
        "{}/{}/{}",
        replace_dots(&coordinate.group_id),
        coordinate.artifact_id,
        coordinate.version
    )
}

/// Canonical POM file name: `{artifact}-{version}.pom`.
pub fn pom_filename(coordinate: &ArtifactCoordinate) -> String {
    format!("{}-{}.pom", coordinate.artifact_id, coordinate.version)
}

/// Whether `file` should be published as the coordinate's POM.
///
/// True for the POM coordinates were read from, any file named
/// `pom.xml`, and any `.pom` file.
pub fn is_pom(descriptor: &UploadDescriptor, file: &Path) -> bool {
    descriptor.is_manifest(file, ManifestFormat::Pom)
        || file.file_name().is_some_and(|n| n == "pom.xml")
        || file.extension().is_some_and(|e| e == "pom")
}

/// Remote file name: the canonical POM name for POMs, the basename otherwise.
pub fn remote_filename(descriptor: &UploadDescriptor, file: &Path) -> String {
    if is_pom(descriptor, file) {
        return pom_filename(&descriptor.coordinate);
    }
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string_lossy().into_owned())
}

/// `{repo_key}/{group_path}/{artifact_id}/{version}/{filename}`
pub fn remote_path(descriptor: &UploadDescriptor, file: &Path) -> String {
    format!(
        "{}/{}/{}",
        repo_key(&descriptor.coordinate, descriptor.repo_key.as_deref()),
        coordinate_path(&descriptor.coordinate),
        remote_filename(descriptor, file)
    )
}

/// Normalize a server URL to the Artifactory REST root.
///
/// Anything after an `/artifactory` path segment is dropped; a URL without
/// one gets it appended. Query and fragment are discarded.
pub fn sanitize_base_url(input: &str) -> Result<String, ArtipubError> {
    let invalid = || ArtipubError::Configuration {
        message: format!("Invalid Artifactory URL: {input}"),
    };
    let mut url = Url::parse(input.trim()).map_err(|_| invalid())?;
    if url.host_str().is_none() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    let path = url.path().trim_end_matches('/').to_string();
    let root = match path.find(ARTIFACTORY_SEGMENT) {
        Some(idx) => format!("{}{ARTIFACTORY_SEGMENT}", &path[..idx]),
        None => format!("{path}{ARTIFACTORY_SEGMENT}"),
    };
    url.set_path(&root);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Full URL to a remote path under a sanitized base.
pub fn file_url(base_url: &str, remote_path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), remote_path)
}
