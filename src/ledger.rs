//! Exposure ledger
//!
//! Durable record of which words were shown and when. The ledger is
//! level-agnostic: it tracks ids only, and suppression of a recently shown
//! word applies no matter which level it was drawn from.
//!
//! The persisted form is a flat JSON array in a single slot. "Recently shown"
//! is a derived view recomputed from `now` on every query, not stored state;
//! expired entries are physically dropped only when a new exposure is
//! written.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::SlotStorage;
use crate::types::SUPPRESSION_WINDOW_MS;

/// Slot holding the serialized ledger, kept compatible with the original app
pub const SHOWN_WORDS_SLOT: &str = "gm-word-shown-words";

// ============================================================
// ShownRecord
// ============================================================

/// One exposure: a word id and when it was last shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShownRecord {
    pub id: i64,
    /// Milliseconds since the Unix epoch
    pub shown_at: i64,
}

impl ShownRecord {
    /// Whether this exposure still suppresses re-selection at `now`.
    ///
    /// Strict `<`: an exposure exactly one window old is already expired.
    pub fn is_active(&self, now: i64) -> bool {
        now - self.shown_at < SUPPRESSION_WINDOW_MS
    }
}

// ============================================================
// ExposureLedger
// ============================================================

/// Recency tracking over a single storage slot
///
/// Every read path degrades to "no suppression" on storage failure or
/// malformed data: the learner always gets a card, at the cost of a possible
/// early repeat. A corrupt slot heals itself on the next `record`.
pub struct ExposureLedger {
    storage: Arc<SlotStorage>,
}

impl ExposureLedger {
    pub fn new(storage: Arc<SlotStorage>) -> Self {
        Self { storage }
    }

    /// Raw persisted records, expired entries included.
    ///
    /// Absent, unreadable, or malformed data all come back as an empty list.
    pub fn load_all(&self) -> Vec<ShownRecord> {
        let raw = match self.storage.get_slot(SHOWN_WORDS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("exposure ledger read failed, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("exposure ledger slot malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Ids whose most recent exposure is still inside the suppression window
    pub fn active_ids(&self, now: i64) -> HashSet<i64> {
        self.load_all()
            .iter()
            .filter(|r| r.is_active(now))
            .map(|r| r.id)
            .collect()
    }

    /// Record an exposure of `id` at `now` and persist.
    ///
    /// This is the compaction point: expired entries and any prior entry for
    /// `id` are dropped as part of the same write, so the ledger never grows
    /// past one record per recently shown word. Persistence failure is logged
    /// and swallowed; selection must not block on the ledger.
    pub fn record(&self, id: i64, now: i64) {
        let mut records = self.load_all();
        records.retain(|r| r.is_active(now) && r.id != id);
        records.push(ShownRecord { id, shown_at: now });

        let serialized = match serde_json::to_string(&records) {
            Ok(serialized) => serialized,
            Err(e) => {
                log::warn!("exposure ledger serialization failed, skipping write: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_slot(SHOWN_WORDS_SLOT, &serialized) {
            log::warn!("exposure ledger write failed, exposure not recorded: {}", e);
        }
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ledger() -> (Arc<SlotStorage>, ExposureLedger) {
        let storage =
            Arc::new(SlotStorage::in_memory().expect("Failed to create in-memory storage"));
        let ledger = ExposureLedger::new(Arc::clone(&storage));
        (storage, ledger)
    }

    #[test]
    fn test_fresh_ledger_is_empty() {
        let (_storage, ledger) = make_ledger();

        assert!(ledger.load_all().is_empty());
        assert!(ledger.active_ids(1_000).is_empty());
    }

    #[test]
    fn test_record_then_active() {
        let (_storage, ledger) = make_ledger();

        ledger.record(7, 1_000);

        let active = ledger.active_ids(2_000);
        assert_eq!(active, HashSet::from([7]));
    }

    #[test]
    fn test_window_boundary_is_strict() {
        let (_storage, ledger) = make_ledger();
        ledger.record(7, 0);

        // One millisecond before a full window: still suppressed.
        assert!(ledger.active_ids(SUPPRESSION_WINDOW_MS - 1).contains(&7));
        // Exactly one window: expired.
        assert!(!ledger.active_ids(SUPPRESSION_WINDOW_MS).contains(&7));
    }

    #[test]
    fn test_record_same_time_twice_is_idempotent() {
        let (_storage, ledger) = make_ledger();

        ledger.record(7, 1_000);
        let once = ledger.active_ids(2_000);
        ledger.record(7, 1_000);
        let twice = ledger.active_ids(2_000);

        assert_eq!(once, twice);
        assert_eq!(ledger.load_all().len(), 1);
    }

    #[test]
    fn test_record_replaces_prior_entry_for_id() {
        let (_storage, ledger) = make_ledger();

        ledger.record(7, 1_000);
        ledger.record(7, 5_000);

        let records = ledger.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].shown_at, 5_000);
    }

    #[test]
    fn test_write_compacts_expired_entries() {
        let (_storage, ledger) = make_ledger();

        ledger.record(1, 0);
        ledger.record(2, 100);

        // Writing past the window drops both earlier records physically.
        ledger.record(3, SUPPRESSION_WINDOW_MS + 200);

        let records = ledger.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 3);
    }

    #[test]
    fn test_expired_entries_excluded_without_write() {
        let (_storage, ledger) = make_ledger();

        ledger.record(1, 0);
        ledger.record(2, 500_000_000);

        let active = ledger.active_ids(SUPPRESSION_WINDOW_MS + 100);
        assert_eq!(active, HashSet::from([2]));
        // No write happened, so the stale record is still physically present.
        assert_eq!(ledger.load_all().len(), 2);
    }

    #[test]
    fn test_malformed_slot_treated_as_empty() {
        let (storage, ledger) = make_ledger();

        storage
            .set_slot(SHOWN_WORDS_SLOT, "{definitely not an array")
            .expect("Failed to set slot");

        assert!(ledger.load_all().is_empty());
        assert!(ledger.active_ids(1_000).is_empty());

        // The next write heals the slot.
        ledger.record(9, 1_000);
        assert_eq!(ledger.active_ids(1_000), HashSet::from([9]));
    }

    #[test]
    fn test_persisted_shape_matches_original_app() {
        let (storage, ledger) = make_ledger();

        ledger.record(101, 1_234);

        let raw = storage
            .get_slot(SHOWN_WORDS_SLOT)
            .expect("Failed to get slot")
            .expect("Slot not written");
        assert_eq!(raw, r#"[{"id":101,"shownAt":1234}]"#);
    }

    #[test]
    fn test_reads_records_written_by_original_app() {
        let (storage, ledger) = make_ledger();

        storage
            .set_slot(
                SHOWN_WORDS_SLOT,
                r#"[{"id":101,"shownAt":1000},{"id":205,"shownAt":2000}]"#,
            )
            .expect("Failed to set slot");

        assert_eq!(ledger.active_ids(3_000), HashSet::from([101, 205]));
    }
}
