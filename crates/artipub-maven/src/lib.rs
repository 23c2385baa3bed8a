//! Artifactory repository protocol: remote path layout, authentication,
//! existence probes, and sequential conflict-aware uploads.

pub mod auth;
pub mod client;
pub mod layout;
pub mod transport;
pub mod upload;
