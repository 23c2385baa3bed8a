//! Operation: show where each file would be published, without uploading.

use std::path::Path;

use artipub_core::RawConfig;
use artipub_maven::layout;
use artipub_maven::upload::{self, PlannedUpload};

/// A resolved publication plan.
#[derive(Debug, Clone)]
pub struct Plan {
    pub base_url: String,
    pub coordinate: String,
    pub uploads: Vec<PlannedUpload>,
}

/// Resolve, expand and compute remote paths. No network access.
pub fn plan(raw: &RawConfig, workspace_root: &Path) -> miette::Result<Plan> {
    let descriptor = crate::prepare(raw, workspace_root)?;
    let base_url = layout::sanitize_base_url(&descriptor.server_url)?;
    Ok(Plan {
        base_url,
        coordinate: descriptor.coordinate.to_string(),
        uploads: upload::plan(&descriptor),
    })
}
