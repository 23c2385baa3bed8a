//! Command dispatch and handler modules.

mod plan;
mod publish;

use miette::Result;

use artipub_core::RawConfig;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli, raw: RawConfig) -> Result<()> {
    let workspace_root = cli.settings.workspace_root()?;
    match cli.command.unwrap_or(Command::Publish) {
        Command::Publish => publish::exec(&raw, &workspace_root).await,
        Command::Plan { json } => plan::exec(&raw, &workspace_root, json),
    }
}
