//! Raw plugin configuration as supplied by the CI host.
//!
//! Every key is optional here; validation and defaulting happen in
//! [`crate::resolve`]. Values arrive from a TOML file, CLI flags, or
//! `PLUGIN_*` environment variables and are layered with [`RawConfig::merge`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A scalar that may be written as a string or a number.
///
/// Versions such as `version = 2.0` in TOML deserialize as floats and must
/// be turned back into text before they become part of a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ScalarValue {
    /// String form used in coordinates. Whole floats drop their fraction (`2.0` → `2`).
    pub fn normalize(&self) -> String {
        match self {
            ScalarValue::Text(s) => s.trim().to_string(),
            ScalarValue::Integer(n) => n.to_string(),
            ScalarValue::Float(f) => f.to_string(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

/// Plugin settings before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<ScalarValue>,

    /// Path to a `pom.xml`, relative to the workspace root.
    #[serde(default)]
    pub pom: Option<String>,
    /// Path to a `package.json`, relative to the workspace root.
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub repo_key: Option<String>,
    #[serde(default)]
    pub force_upload: Option<bool>,

    #[serde(default)]
    pub insecure: Option<bool>,
    #[serde(default)]
    pub enable_proxy: Option<bool>,
    /// PEM-encoded CA certificate(s) to trust, given inline.
    #[serde(default)]
    pub pem_file_contents: Option<String>,
    /// Path to a PEM CA bundle, relative to the workspace root.
    #[serde(default)]
    pub pem_file_path: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RawConfig {
    /// Parse a TOML document into a raw configuration.
    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            artipub_util::errors::ArtipubError::Configuration {
                message: format!("Failed to parse configuration file: {e}"),
            }
            .into()
        })
    }

    /// Load a raw configuration from a TOML file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            artipub_util::errors::ArtipubError::Configuration {
                message: format!("Failed to read configuration file {}: {e}", path.display()),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// Layer `overrides` on top of `self`; any key set in `overrides` wins.
    pub fn merge(self, overrides: RawConfig) -> RawConfig {
        RawConfig {
            url: overrides.url.or(self.url),
            username: overrides.username.or(self.username),
            password: overrides.password.or(self.password),
            access_token: overrides.access_token.or(self.access_token),
            api_key: overrides.api_key.or(self.api_key),
            group_id: overrides.group_id.or(self.group_id),
            artifact_id: overrides.artifact_id.or(self.artifact_id),
            version: overrides.version.or(self.version),
            pom: overrides.pom.or(self.pom),
            package: overrides.package.or(self.package),
            files: overrides.files.or(self.files),
            repo_key: overrides.repo_key.or(self.repo_key),
            force_upload: overrides.force_upload.or(self.force_upload),
            insecure: overrides.insecure.or(self.insecure),
            enable_proxy: overrides.enable_proxy.or(self.enable_proxy),
            pem_file_contents: overrides.pem_file_contents.or(self.pem_file_contents),
            pem_file_path: overrides.pem_file_path.or(self.pem_file_path),
            log_level: overrides.log_level.or(self.log_level),
        }
    }
}

/// Treat blank strings the same as absent keys. CI hosts export unset
/// settings as empty environment variables.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
