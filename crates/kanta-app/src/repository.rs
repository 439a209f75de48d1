//! Store construction for the persistence layer

use std::path::PathBuf;

use kanta_infra::persistence::{FileSettingsRepository, FileSlipRepository};
use kanta_store::{SettingsStore, SlipStore};
use kanta_types::Result;

use crate::config::Config;

/// Open the slip store over its file adapter
pub fn open_slip_store(config: &Config) -> Result<SlipStore> {
    open_slip_store_at(config.data_dir()?)
}

/// Open the settings store over its file adapter
pub fn open_settings_store(config: &Config) -> Result<SettingsStore> {
    open_settings_store_at(config.data_dir()?)
}

/// Open the slip store at a custom directory
pub fn open_slip_store_at(data_dir: PathBuf) -> Result<SlipStore> {
    let repo = FileSlipRepository::open(data_dir)?;
    SlipStore::open(Box::new(repo))
}

/// Open the settings store at a custom directory
pub fn open_settings_store_at(data_dir: PathBuf) -> Result<SettingsStore> {
    let repo = FileSettingsRepository::open(data_dir)?;
    SettingsStore::open(Box::new(repo))
}
