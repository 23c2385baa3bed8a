//! HTTP client construction for repository uploads.

use reqwest::{Certificate, Client, NoProxy, Proxy};

use artipub_core::descriptor::TransportOptions;
use artipub_util::errors::ArtipubError;

const USER_AGENT: &str = concat!("artipub/", env!("CARGO_PKG_VERSION"));

/// Environment variables consulted when `enable_proxy` is set.
pub const HARNESS_HTTP_PROXY: &str = "HARNESS_HTTP_PROXY";
pub const HARNESS_HTTPS_PROXY: &str = "HARNESS_HTTPS_PROXY";
pub const HARNESS_NO_PROXY: &str = "HARNESS_NO_PROXY";

/// Proxy endpoints taken from the CI host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub no_proxy: Option<String>,
}

impl ProxySettings {
    /// Read the `HARNESS_*` proxy variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            http: read(HARNESS_HTTP_PROXY),
            https: read(HARNESS_HTTPS_PROXY),
            no_proxy: read(HARNESS_NO_PROXY),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Build the reqwest client used for probes and uploads.
///
/// No request timeout is set; the transport's defaults apply.
pub fn build_client(options: &TransportOptions) -> miette::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if options.insecure {
        tracing::warn!("TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    } else {
        for cert in ca_certificates(options)? {
            builder = builder.add_root_certificate(cert);
        }
    }

    if options.enable_proxy {
        let settings = ProxySettings::from_env();
        let no_proxy = settings.no_proxy.as_deref().and_then(NoProxy::from_string);
        if let Some(http) = &settings.http {
            tracing::debug!("Using HTTP proxy {http}");
            let proxy = Proxy::http(http).map_err(proxy_error)?;
            builder = builder.proxy(proxy.no_proxy(no_proxy.clone()));
        }
        if let Some(https) = &settings.https {
            tracing::debug!("Using HTTPS proxy {https}");
            let proxy = Proxy::https(https).map_err(proxy_error)?;
            builder = builder.proxy(proxy.no_proxy(no_proxy));
        }
    }

    builder.build().map_err(|e| {
        ArtipubError::Transport {
            message: format!("Failed to create HTTP client: {e}"),
        }
        .into()
    })
}

/// Extra CA certificates to trust: inline PEM data first, then the PEM file.
///
/// Returns an empty list when neither is configured.
pub fn ca_certificates(options: &TransportOptions) -> Result<Vec<Certificate>, ArtipubError> {
    let (pem, origin) = match (&options.pem_contents, &options.pem_path) {
        (Some(contents), _) => (contents.clone().into_bytes(), "pem_file_contents".to_string()),
        (None, Some(path)) => {
            let bytes = std::fs::read(path).map_err(|e| ArtipubError::Configuration {
                message: format!("Failed to read PEM file {}: {e}", path.display()),
            })?;
            (bytes, path.display().to_string())
        }
        (None, None) => return Ok(Vec::new()),
    };

    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| ArtipubError::Configuration {
        message: format!("Invalid PEM certificate in {origin}: {e}"),
    })?;
    if certs.is_empty() {
        return Err(ArtipubError::Configuration {
            message: format!("No PEM certificate found in {origin}"),
        });
    }
    tracing::debug!("Trusting {} extra CA certificate(s) from {origin}", certs.len());
    Ok(certs)
}

fn proxy_error(e: reqwest::Error) -> ArtipubError {
    ArtipubError::Configuration {
        message: format!("Invalid proxy setting: {e}"),
    }
}
