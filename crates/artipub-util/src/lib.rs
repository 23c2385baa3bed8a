//! Shared utilities for artipub.
//!
//! This crate provides cross-cutting concerns used by the other artipub
//! crates: the unified error type, checksum digests for deploy headers,
//! and Cargo-style terminal status output.

pub mod errors;
pub mod hash;
pub mod progress;
