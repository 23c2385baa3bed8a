//! Handler for `artipub plan`.

use std::path::Path;

use miette::Result;

use artipub_core::RawConfig;
use artipub_util::errors::ArtipubError;

pub fn exec(raw: &RawConfig, workspace_root: &Path, json: bool) -> Result<()> {
    let plan = artipub_ops::ops_plan::plan(raw, workspace_root)?;

    if json {
        let doc = serde_json::json!({
            "base_url": plan.base_url,
            "coordinate": plan.coordinate,
            "uploads": plan.uploads,
        });
        let text = serde_json::to_string_pretty(&doc).map_err(|e| ArtipubError::Generic {
            message: format!("Failed to render plan: {e}"),
        })?;
        println!("{text}");
        return Ok(());
    }

    println!("{} -> {}", plan.coordinate, plan.base_url);
    if plan.uploads.is_empty() {
        println!("  (no files)");
    }
    for upload in &plan.uploads {
        println!("  {} -> {}", upload.file.display(), upload.remote_path);
    }
    Ok(())
}
