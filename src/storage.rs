//! Artifact storage
//!
//! Components:
//! - `storage_trait`: the Storage trait every backend implements.
//! - `types`: the artifact payload.
//! - `file_storage`: writes each artifact to its own newline-delimited file.

pub mod file_storage;
pub mod storage_trait;
pub mod types;

pub use file_storage::FileStorage;
pub use storage_trait::Storage;
pub use types::Artifact;
