//! Repository trait definitions for data persistence
//!
//! The stores own all mutation; these adapters only move whole collections
//! to and from storage. `save` must be all-or-nothing: when it fails, the
//! previously persisted state is still intact and the store keeps its
//! in-memory state unchanged.

use kanta_types::Result;

use crate::model::{Settings, Slip};

/// Adapter for the slip collection, stored in creation order
pub trait SlipRepository: Send + Sync {
    /// Load all slips
    fn load(&self) -> Result<Vec<Slip>>;

    /// Replace the persisted collection
    fn save(&self, slips: &[Slip]) -> Result<()>;
}

/// Adapter for the single settings record
pub trait SettingsRepository: Send + Sync {
    /// Load the settings record, `None` when never saved
    fn load(&self) -> Result<Option<Settings>>;

    /// Replace the persisted record
    fn save(&self, settings: &Settings) -> Result<()>;
}
