pub mod ops_plan;
pub mod ops_publish;

use std::path::Path;

use artipub_core::{files, resolve, RawConfig, UploadDescriptor};

/// Resolve the configuration and expand its file patterns.
///
/// Every validation failure surfaces here, before any network call.
pub fn prepare(raw: &RawConfig, workspace_root: &Path) -> miette::Result<UploadDescriptor> {
    let descriptor = resolve::resolve(raw, workspace_root)?;
    let expanded = files::expand(workspace_root, &descriptor.patterns())?;
    Ok(descriptor.with_files(expanded))
}
