use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use log::{error, info};
use tokio::task::JoinHandle;

use crate::configuration::config::Config;
use crate::error_handling::types::*;
use crate::features::Feature;
use crate::log_parsing::{parse_reader, LogEntry};
use crate::storage::{Artifact, FileStorage, Storage};

/// Drives one mining run: parse the whole log, then compute and store the
/// four features.
pub struct Controller {
    pub config: Config,
    storage: Arc<dyn Storage>,
}

impl Controller {
    /// Controller writing artifacts to the paths named in `config`.
    pub fn new(config: Config) -> Self {
        let storage = Arc::new(FileStorage::from_config(&config));
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Runs every feature to completion.
    ///
    /// Parsing finishes before any feature starts; a malformed line aborts the
    /// run without writing any artifact. Features then run as independent
    /// blocking tasks over the shared records and are awaited in a fixed order.
    pub async fn run(&self) -> Result<(), ControllerError> {
        let entries = Arc::new(self.load_entries().await?);

        let handles: Vec<(Feature, JoinHandle<Result<usize, ControllerError>>)> = Feature::ALL
            .into_iter()
            .map(|feature| {
                let entries = Arc::clone(&entries);
                let storage = Arc::clone(&self.storage);
                let tuning = self.config.tuning.clone();
                let handle = tokio::task::spawn_blocking(move || -> Result<usize, ControllerError> {
                    info!("Making feature: {}", feature);
                    let rows = feature.rows(&entries, &tuning)?;
                    let count = rows.len();
                    storage.save_artifact(&Artifact::new(feature, rows))?;
                    Ok(count)
                });
                (feature, handle)
            })
            .collect();

        for (feature, handle) in handles {
            let rows = handle
                .await
                .map_err(|e| ControllerError::TaskFailed(format!("{}: {}", feature, e)))?
                .map_err(|e| {
                    error!("Feature {} failed: {}", feature, e);
                    e
                })?;
            info!("Finished feature: {} ({} row(s))", feature, rows);
        }
        Ok(())
    }

    async fn load_entries(&self) -> Result<Vec<LogEntry>, ControllerError> {
        let path = self.config.input.clone();
        info!("Reading data from {}", path.display());

        let entries = tokio::task::spawn_blocking(move || -> Result<_, ControllerError> {
            let file = File::open(&path).map_err(|e| StorageError::ReadFailed(path.clone(), e))?;
            Ok(parse_reader(BufReader::new(file))?)
        })
        .await
        .map_err(|e| ControllerError::TaskFailed(format!("parsing: {}", e)))??;

        info!("Finished reading data: {} record(s)", entries.len());
        Ok(entries)
    }
}
