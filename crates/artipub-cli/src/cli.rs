//! CLI argument definitions for artipub.
//!
//! Every setting can be given as a flag or through the `PLUGIN_*`
//! environment variable a CI host exports for plugin settings. Flags and
//! environment variables override values from `--config`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use artipub_core::config::{RawConfig, ScalarValue};

#[derive(Parser, Debug)]
#[command(
    name = "artipub",
    version,
    about = "Publish CI build outputs to an Artifactory repository",
    long_about = "artipub resolves artifact coordinates from explicit settings, a pom.xml or a \
                  package.json, expands file globs, and uploads each file to Artifactory. \
                  Existing artifacts are never overwritten unless force_upload is set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub settings: Settings,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve, expand and upload (the default)
    Publish,

    /// Show the remote path of every file without uploading
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct Settings {
    /// TOML file with plugin settings
    #[arg(long, env = "PLUGIN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root that file and manifest paths are relative to
    #[arg(long, env = "DRONE_WORKSPACE", global = true)]
    pub workspace: Option<PathBuf>,

    /// Artifactory server URL
    #[arg(long, env = "PLUGIN_URL", global = true)]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(long, env = "PLUGIN_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "PLUGIN_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Access token (sent as a bearer token, wins over username/password)
    #[arg(long, env = "PLUGIN_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Artifactory API key (used when neither token nor username is set)
    #[arg(long, env = "PLUGIN_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Artifact group ID
    #[arg(long, env = "PLUGIN_GROUP_ID", global = true)]
    pub group_id: Option<String>,

    /// Artifact ID
    #[arg(long, env = "PLUGIN_ARTIFACT_ID", global = true)]
    pub artifact_id: Option<String>,

    /// Artifact version
    #[arg(long, env = "PLUGIN_VERSION", global = true)]
    pub artifact_version: Option<String>,

    /// pom.xml to read coordinates from
    #[arg(long, env = "PLUGIN_POM", global = true)]
    pub pom: Option<String>,

    /// package.json to read coordinates from
    #[arg(long, env = "PLUGIN_PACKAGE", global = true)]
    pub package: Option<String>,

    /// File globs to upload (comma-separated or repeated)
    #[arg(long, env = "PLUGIN_FILES", value_delimiter = ',', global = true)]
    pub files: Option<Vec<String>>,

    /// Target repository key (overrides the release/snapshot default)
    #[arg(long, env = "PLUGIN_REPO_KEY", global = true)]
    pub repo_key: Option<String>,

    /// Overwrite artifacts that already exist
    #[arg(long, env = "PLUGIN_FORCE_UPLOAD", global = true)]
    pub force_upload: Option<bool>,

    /// Accept invalid TLS certificates
    #[arg(long, env = "PLUGIN_INSECURE", global = true)]
    pub insecure: Option<bool>,

    /// Use HARNESS_HTTP(S)_PROXY / HARNESS_NO_PROXY for outgoing requests
    #[arg(long, env = "PLUGIN_ENABLE_PROXY", global = true)]
    pub enable_proxy: Option<bool>,

    /// PEM-encoded CA certificate(s) to trust
    #[arg(long, env = "PLUGIN_PEM_FILE_CONTENTS", global = true, hide_env_values = true)]
    pub pem_file_contents: Option<String>,

    /// Path to a PEM CA bundle to trust
    #[arg(long, env = "PLUGIN_PEM_FILE_PATH", global = true)]
    pub pem_file_path: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "PLUGIN_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Settings given on the command line or in the environment.
    fn overrides(&self) -> RawConfig {
        RawConfig {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            access_token: self.access_token.clone(),
            api_key: self.api_key.clone(),
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.artifact_version.as_deref().map(ScalarValue::from),
            pom: self.pom.clone(),
            package: self.package.clone(),
            files: self.files.clone(),
            repo_key: self.repo_key.clone(),
            force_upload: self.force_upload,
            insecure: self.insecure,
            enable_proxy: self.enable_proxy,
            pem_file_contents: self.pem_file_contents.clone(),
            pem_file_path: self.pem_file_path.clone(),
            log_level: self.log_level.clone(),
        }
    }

    /// Config file (if any) with flags and environment layered on top.
    pub fn to_raw_config(&self) -> miette::Result<RawConfig> {
        let base = match &self.config {
            Some(path) => RawConfig::from_path(path)?,
            None => RawConfig::default(),
        };
        Ok(base.merge(self.overrides()))
    }

    /// Workspace root, defaulting to the current directory.
    pub fn workspace_root(&self) -> miette::Result<PathBuf> {
        match &self.workspace {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir()
                .map_err(|e| artipub_util::errors::ArtipubError::Io(e).into()),
        }
    }
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
