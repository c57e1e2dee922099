//! Storage Trait
//!
//! Defines the `Storage` trait through which the controller persists the
//! artifact of each feature. Implementations must be shareable across the
//! blocking tasks that compute features.

use crate::error_handling::types::StorageError;
use crate::storage::types::Artifact;

pub trait Storage: Send + Sync {
    /// Persists `artifact`, replacing any previous artifact of the same feature.
    fn save_artifact(&self, artifact: &Artifact) -> Result<(), StorageError>;
}
