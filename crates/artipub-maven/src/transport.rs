//! The two repository calls an upload needs: HEAD probe and PUT.

use reqwest::{Client, StatusCode};

use artipub_util::errors::ArtipubError;
use artipub_util::hash::Checksums;

use crate::auth::{self, Credentials};
use crate::layout;

/// Result of an existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The server answered 2xx: something is already published there.
    Exists,
    /// The server answered 404.
    Missing,
}

/// Repository operations used by the upload orchestrator.
///
/// `remote_path` is relative to the repository root
/// (`{repo_key}/{group_path}/...`). Errors are already classified as
/// [`ArtipubError::Transport`] or [`ArtipubError::Io`].
#[allow(async_fn_in_trait)]
pub trait ArtifactTransport {
    /// Check whether an artifact already exists at `remote_path`.
    async fn probe(&self, remote_path: &str) -> Result<Probe, ArtipubError>;

    /// Upload `body` to `remote_path`. Succeeds only on a 2xx answer.
    async fn put(&self, remote_path: &str, body: Vec<u8>) -> Result<(), ArtipubError>;
}

/// [`ArtifactTransport`] over HTTP(S) against an Artifactory server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// `base_url` is sanitized with [`layout::sanitize_base_url`].
    pub fn new(client: Client, base_url: &str, credentials: Credentials) -> miette::Result<Self> {
        Ok(Self {
            client,
            base_url: layout::sanitize_base_url(base_url)?,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ArtifactTransport for HttpTransport {
    async fn probe(&self, remote_path: &str) -> Result<Probe, ArtipubError> {
        let url = layout::file_url(&self.base_url, remote_path);
        tracing::debug!("HEAD {url}");

        let req = auth::apply_auth(self.client.head(&url), &self.credentials);
        let resp = req.send().await.map_err(|e| ArtipubError::Transport {
            message: format!("Request to {url} failed: {e}"),
        })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Probe::Missing);
        }
        if status.is_success() {
            return Ok(Probe::Exists);
        }
        Err(ArtipubError::Transport {
            message: format!("HTTP {status} probing {url}"),
        })
    }

    async fn put(&self, remote_path: &str, body: Vec<u8>) -> Result<(), ArtipubError> {
        let url = layout::file_url(&self.base_url, remote_path);
        let sums = Checksums::of(&body);
        tracing::debug!("PUT {url} ({} bytes, sha1 {})", body.len(), sums.sha1);

        let req = self
            .client
            .put(&url)
            .header("X-Checksum-Sha1", sums.sha1)
            .header("X-Checksum-Sha256", sums.sha256)
            .header("X-Checksum-Md5", sums.md5)
            .body(body);
        let resp = auth::apply_auth(req, &self.credentials)
            .send()
            .await
            .map_err(|e| ArtipubError::Transport {
                message: format!("Request to {url} failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ArtipubError::Transport {
                message: format!("HTTP {status} uploading to {url}"),
            });
        }
        Ok(())
    }
}
