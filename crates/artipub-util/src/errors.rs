use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// The two manifest flavours coordinates can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestFormat {
    /// A Maven project object model (`pom.xml`).
    Pom,
    /// A JSON package descriptor (`package.json`).
    Package,
}

impl ManifestFormat {
    /// Configuration key that selects this format.
    pub fn config_key(self) -> &'static str {
        match self {
            ManifestFormat::Pom => "pom",
            ManifestFormat::Package => "package",
        }
    }

    fn not_found_message(self) -> &'static str {
        match self {
            ManifestFormat::Pom => "Given pom file has to exists",
            ManifestFormat::Package => "Given package file has to exist",
        }
    }

    fn parse_message(self) -> &'static str {
        match self {
            ManifestFormat::Pom => "An error happened while trying to parse the pom file",
            ManifestFormat::Package => "An error happened while trying to parse the package file",
        }
    }

    fn incomplete_message(self) -> &'static str {
        match self {
            ManifestFormat::Pom => "Some artifact details are missing from Pom file",
            ManifestFormat::Package => "Some artifact details are missing from package file",
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Unified error type for all artipub operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ArtipubError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mandatory configuration is missing or no coordinate source resolves.
    #[error("{message}")]
    #[diagnostic(help("Set PLUGIN_URL and either group_id/artifact_id/version or a pom/package file"))]
    Configuration { message: String },

    /// The configured manifest file does not exist under the workspace root.
    #[error("{}: {}", .format.not_found_message(), .path.display())]
    ManifestNotFound {
        format: ManifestFormat,
        path: PathBuf,
    },

    /// The manifest exists but is not well-formed.
    #[error("{}: {message}", .format.parse_message())]
    ManifestParse {
        format: ManifestFormat,
        message: String,
    },

    /// The manifest parsed but lacks part of the coordinate.
    #[error("{} (missing: {})", .format.incomplete_message(), .missing.join(", "))]
    ManifestIncomplete {
        format: ManifestFormat,
        missing: Vec<&'static str>,
    },

    /// The remote artifact already exists and overwrite was not requested.
    #[error("Artifact already exists at {path}")]
    #[diagnostic(help("Set force_upload to overwrite the published artifact"))]
    Conflict { path: String },

    /// Network or server failure during the existence probe or the upload.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ArtipubResult<T> = miette::Result<T>;
