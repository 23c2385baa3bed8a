use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Checksums Artifactory accepts as deploy headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    pub sha1: String,
    pub sha256: String,
    pub md5: String,
}

impl Checksums {
    /// Digest a byte slice with all three algorithms.
    pub fn of(data: &[u8]) -> Self {
        Self {
            sha1: sha1_bytes(data),
            sha256: sha256_bytes(data),
            md5: md5_bytes(data),
        }
    }
}

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-1 hash of a byte slice, returning a lowercase hex string.
pub fn sha1_bytes(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the MD5 hash of a byte slice, returning a lowercase hex string.
pub fn md5_bytes(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
