//! Sequential, conflict-aware upload of a descriptor's files.
//!
//! Files are processed strictly in order. For each one the remote path is
//! probed first; an existing artifact is a conflict unless `force_upload`
//! is set. The first failure stops the run: later files are never probed
//! or uploaded, and files already uploaded stay uploaded.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use artipub_core::descriptor::UploadDescriptor;
use artipub_util::errors::ArtipubError;

use crate::layout;
use crate::transport::{ArtifactTransport, Probe};

/// Per-file result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Created,
    /// Reserved for a skip policy; a pre-existing artifact without
    /// `force_upload` is reported as `Failed`.
    SkippedExists,
    Failed,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
    pub file: PathBuf,
    pub remote_path: String,
    pub status: UploadStatus,
    /// Whether the probe found an existing artifact that was overwritten.
    pub overwritten: bool,
    pub error: Option<String>,
}

/// Outcomes of a run in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    pub outcomes: Vec<UploadOutcome>,
    /// True iff every outcome is [`UploadStatus::Created`].
    pub success: bool,
}

impl UploadReport {
    pub fn new(outcomes: Vec<UploadOutcome>) -> Self {
        let success = outcomes.iter().all(|o| o.status == UploadStatus::Created);
        Self { outcomes, success }
    }
}

/// The first failure of a run, with everything that completed before it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct UploadFailure {
    pub completed: Vec<UploadOutcome>,
    pub failed: UploadOutcome,
    #[source]
    pub error: ArtipubError,
}

impl UploadFailure {
    /// Report covering the completed files and the failed one.
    pub fn report(&self) -> UploadReport {
        let mut outcomes = self.completed.clone();
        outcomes.push(self.failed.clone());
        UploadReport::new(outcomes)
    }

    pub fn into_error(self) -> ArtipubError {
        self.error
    }
}

/// A file and where it would be published, without any network call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedUpload {
    pub file: PathBuf,
    pub remote_path: String,
}

/// Remote paths for every file of the descriptor, in order.
pub fn plan(descriptor: &UploadDescriptor) -> Vec<PlannedUpload> {
    descriptor
        .files
        .iter()
        .map(|file| PlannedUpload {
            file: file.clone(),
            remote_path: layout::remote_path(descriptor, file),
        })
        .collect()
}

/// Upload every file of `descriptor` through `transport`.
///
/// Resolves with a fully successful report, or stops at the first failing
/// file and returns it together with the files created so far.
///
/// Each file is read fully into memory before its PUT so the checksum
/// headers can precede the body. Only one file is held at a time, so peak
/// memory is bounded by the largest artifact, not the total.
pub async fn upload<T: ArtifactTransport>(
    transport: &T,
    descriptor: &UploadDescriptor,
) -> Result<UploadReport, UploadFailure> {
    let mut completed = Vec::with_capacity(descriptor.files.len());
    for file in &descriptor.files {
        let remote_path = layout::remote_path(descriptor, file);
        match upload_one(transport, descriptor, file, &remote_path).await {
            Ok(overwritten) => completed.push(UploadOutcome {
                file: file.clone(),
                remote_path,
                status: UploadStatus::Created,
                overwritten,
                error: None,
            }),
            Err(error) => {
                let failed = UploadOutcome {
                    file: file.clone(),
                    remote_path,
                    status: UploadStatus::Failed,
                    overwritten: false,
                    error: Some(error.to_string()),
                };
                return Err(UploadFailure {
                    completed,
                    failed,
                    error,
                });
            }
        }
    }
    Ok(UploadReport::new(completed))
}

/// Probe, apply the overwrite policy, then PUT. Returns whether an existing
/// artifact was overwritten.
async fn upload_one<T: ArtifactTransport>(
    transport: &T,
    descriptor: &UploadDescriptor,
    file: &Path,
    remote_path: &str,
) -> Result<bool, ArtipubError> {
    let overwritten = match transport.probe(remote_path).await? {
        Probe::Missing => false,
        Probe::Exists if descriptor.force_upload => {
            tracing::info!("Overwriting existing artifact {remote_path}");
            true
        }
        Probe::Exists => {
            return Err(ArtipubError::Conflict {
                path: remote_path.to_string(),
            });
        }
    };

    let body = tokio::fs::read(descriptor.locate(file)).await?;
    transport.put(remote_path, body).await?;
    Ok(overwritten)
}
