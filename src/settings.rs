//! Level preference
//!
//! The learner's chosen difficulty level, persisted in its own slot with a
//! lifecycle independent from the exposure ledger. Reads never fail: absent,
//! invalid, or unreadable values fall back to the default level.

use std::sync::Arc;

use crate::storage::{SlotStorage, StorageResult};
use crate::types::Level;

/// Slot holding the persisted level string, compatible with the original app
pub const LEVEL_SLOT: &str = "gm-word-level";

/// Persisted level preference
pub struct LevelPreference {
    storage: Arc<SlotStorage>,
}

impl LevelPreference {
    pub fn new(storage: Arc<SlotStorage>) -> Self {
        Self { storage }
    }

    /// Current preference, defaulting to `Level::Middle` when the slot is
    /// absent, holds an unrecognized value, or cannot be read.
    pub fn get(&self) -> Level {
        match self.storage.get_slot(LEVEL_SLOT) {
            Ok(Some(raw)) => Level::parse(&raw).unwrap_or_default(),
            Ok(None) => Level::default(),
            Err(e) => {
                log::warn!("level preference read failed, using default: {}", e);
                Level::default()
            }
        }
    }

    /// Persist a new preference
    pub fn set(&self, level: Level) -> StorageResult<()> {
        self.storage.set_slot(LEVEL_SLOT, level.as_str())
    }
}
