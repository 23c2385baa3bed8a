//! Handler for `artipub publish`.

use std::path::Path;

use miette::Result;

use artipub_core::RawConfig;

pub async fn exec(raw: &RawConfig, workspace_root: &Path) -> Result<()> {
    let report = artipub_ops::ops_publish::publish(raw, workspace_root).await?;
    artipub_util::progress::status(
        "Finished",
        &format!("{} file(s) published", report.outcomes.len()),
    );
    Ok(())
}
