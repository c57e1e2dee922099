use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::configuration::Config;
use crate::error_handling::types::StorageError;
use crate::features::Feature;
use crate::storage::storage_trait::Storage;
use crate::storage::types::Artifact;

/// Writes every feature's artifact to its own file, one row per line, no header.
pub struct FileStorage {
    paths: HashMap<Feature, PathBuf>,
}

impl FileStorage {
    pub fn new(paths: HashMap<Feature, PathBuf>) -> Self {
        Self { paths }
    }

    /// Maps the four output paths of `config` to their features.
    pub fn from_config(config: &Config) -> Self {
        let paths = HashMap::from([
            (Feature::TopHosts, config.hosts_output.clone()),
            (Feature::BusiestWindows, config.hours_output.clone()),
            (Feature::TopResources, config.resources_output.clone()),
            (Feature::BlockedHosts, config.blocked_output.clone()),
        ]);
        Self::new(paths)
    }

    fn path_for(&self, feature: Feature) -> Result<&Path, StorageError> {
        self.paths.get(&feature).map(PathBuf::as_path).ok_or_else(|| {
            error!("No output path configured for {}", feature);
            StorageError::WriteFailed(
                PathBuf::new(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no output path"),
            )
        })
    }
}

impl Storage for FileStorage {
    fn save_artifact(&self, artifact: &Artifact) -> Result<(), StorageError> {
        let path = self.path_for(artifact.feature)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create output dir {}: {}", parent.display(), e);
                StorageError::WriteFailed(parent.to_path_buf(), e)
            })?;
        }

        let file = File::create(path).map_err(|e| {
            error!("Failed to create {}: {}", path.display(), e);
            StorageError::WriteFailed(path.to_path_buf(), e)
        })?;
        let mut writer = BufWriter::new(file);
        for row in &artifact.rows {
            writeln!(writer, "{}", row)
                .map_err(|e| StorageError::WriteFailed(path.to_path_buf(), e))?;
        }
        writer
            .flush()
            .map_err(|e| StorageError::WriteFailed(path.to_path_buf(), e))?;

        info!(
            "Wrote {} row(s) of {} to {}",
            artifact.rows.len(),
            artifact.feature,
            path.display()
        );
        Ok(())
    }
}
