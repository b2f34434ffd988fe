//! # gmword-core - GM Word review scheduling core
//!
//! Core logic for the GM Word flashcard app: pick which vocabulary word to
//! show next, partitioned by difficulty level, while avoiding any word shown
//! within the last week.
//!
//! Design highlights:
//! - **Exposure ledger** - flat persisted log of `{id, shownAt}` records; the
//!   "recently shown" set is derived from the current time on every query,
//!   and stale entries are compacted away on each write.
//! - **Uniform selection** - one independent random draw per call over the
//!   recency-filtered pool; no per-word scheduling state, no
//!   spaced-repetition intervals.
//! - **Degraded, never fatal** - corrupt or unavailable storage yields an
//!   empty suppression set, an unknown level preference yields the default;
//!   the learner always gets a card. Pool exhaustion is a first-class
//!   outcome, not an error.
//!
//! ## Module structure
//!
//! - [`types`] - `Level`, `Word`, suppression window constant
//! - [`catalog`] - read-only word catalog and integrity validation
//! - [`storage`] - SQLite-backed named slots holding serialized state
//! - [`ledger`] - exposure ledger with expiry-aware membership queries
//! - [`scheduler`] - level-filtered uniform-random selection
//! - [`settings`] - persisted level preference with default fallback
//! - [`session`] - ephemeral card/revealed/exhausted state for the UI layer
//!
//! ## Usage example
//!
//! ```rust
//! use std::sync::Arc;
//! use gmword_core::{
//!     Catalog, ExposureLedger, LevelPreference, ReviewScheduler, ReviewSession,
//!     SlotStorage, now_ms,
//! };
//!
//! let storage = Arc::new(SlotStorage::in_memory().unwrap());
//! let ledger = ExposureLedger::new(Arc::clone(&storage));
//! let scheduler = ReviewScheduler::new(Catalog::new(vec![]), ledger);
//! let preference = LevelPreference::new(Arc::clone(&storage));
//!
//! let mut session = ReviewSession::new(scheduler, preference);
//! session.advance(now_ms());
//! assert!(session.is_exhausted()); // empty catalog
//! ```

pub mod catalog;
pub mod ledger;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod storage;
pub mod types;

pub use catalog::{Catalog, ValidationReport};
pub use ledger::{ExposureLedger, ShownRecord, SHOWN_WORDS_SLOT};
pub use scheduler::{ReviewScheduler, SelectionOutcome};
pub use session::ReviewSession;
pub use settings::{LevelPreference, LEVEL_SLOT};
pub use storage::{SlotStorage, StorageError, StorageResult};
pub use types::{now_ms, Level, Word, SUPPRESSION_WINDOW_MS};
