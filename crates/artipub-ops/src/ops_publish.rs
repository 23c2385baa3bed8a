//! Operation: resolve, expand and upload.

use std::path::Path;

use artipub_core::RawConfig;
use artipub_maven::auth::Credentials;
use artipub_maven::client;
use artipub_maven::transport::HttpTransport;
use artipub_maven::upload::{self, UploadReport};
use artipub_util::errors::ArtipubError;
use artipub_util::progress::{spinner, status, status_info, status_warn};

/// Publish every configured file. Stops at the first failure.
pub async fn publish(raw: &RawConfig, workspace_root: &Path) -> miette::Result<UploadReport> {
    let descriptor = crate::prepare(raw, workspace_root)?;
    status_info(
        "Resolved",
        &format!(
            "{} ({} file(s))",
            descriptor.coordinate,
            descriptor.files.len()
        ),
    );
    if descriptor.files.is_empty() {
        status_warn("Warning", "no files matched; nothing to upload");
    }

    let http = client::build_client(&descriptor.transport)?;
    let transport = HttpTransport::new(
        http,
        &descriptor.server_url,
        Credentials::from_descriptor(&descriptor),
    )?;
    tracing::info!("Publishing to {}", transport.base_url());

    let sp = spinner(&format!("Uploading {} file(s)...", descriptor.files.len()));
    let result = upload::upload(&transport, &descriptor).await;
    sp.finish_and_clear();

    match result {
        Ok(report) => {
            for outcome in &report.outcomes {
                let label = if outcome.overwritten {
                    "Overwrote"
                } else {
                    "Uploaded"
                };
                status(label, &outcome.remote_path);
            }
            Ok(report)
        }
        Err(failure) => {
            for outcome in &failure.completed {
                status("Uploaded", &outcome.remote_path);
            }
            let label = match failure.error {
                ArtipubError::Conflict { .. } => "Conflict",
                _ => "Failed",
            };
            status_warn(label, &failure.failed.remote_path);
            Err(failure.into_error().into())
        }
    }
}
