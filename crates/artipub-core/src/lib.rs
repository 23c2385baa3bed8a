//! Core data types and resolution logic for artipub.
//!
//! Turns raw plugin configuration into a validated [`UploadDescriptor`]:
//! explicit coordinates win, otherwise they are read from a POM or a
//! package descriptor, and file patterns are expanded against the
//! workspace root.

pub mod config;
pub mod coordinate;
pub mod descriptor;
pub mod files;
pub mod manifest;
pub mod resolve;

pub use config::RawConfig;
pub use coordinate::ArtifactCoordinate;
pub use descriptor::UploadDescriptor;
