//! Review selection scheduler
//!
//! Decides which word to show next for a requested level: filters the catalog
//! down to words of that level not suppressed by the exposure ledger, draws
//! one uniformly at random, and records the exposure. The scheduler keeps no
//! state of its own between calls beyond the draw RNG; everything durable
//! lives in the ledger.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::Catalog;
use crate::ledger::ExposureLedger;
use crate::types::{Level, Word};

// ============================================================
// SelectionOutcome
// ============================================================

/// Result of one selection call
///
/// `Exhausted` is not an error: it means every word of the requested level
/// was shown within the suppression window, and the caller should present
/// its terminal state and offer a level change.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    Selected(Word),
    Exhausted,
}

// ============================================================
// ReviewScheduler
// ============================================================

/// Uniform-random selection over a recency-filtered pool
pub struct ReviewScheduler {
    catalog: Catalog,
    ledger: ExposureLedger,
    rng: ChaCha8Rng,
}

impl ReviewScheduler {
    /// Create a scheduler with a time-seeded RNG
    pub fn new(catalog: Catalog, ledger: ExposureLedger) -> Self {
        let seed = {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        };
        Self::with_seed(catalog, ledger, seed)
    }

    /// Create a scheduler with a fixed RNG seed (for deterministic tests)
    pub fn with_seed(catalog: Catalog, ledger: ExposureLedger, seed: u64) -> Self {
        Self {
            catalog,
            ledger,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick the next word to show for `level`, or report exhaustion.
    ///
    /// Each call is an independent uniform draw over the currently eligible
    /// pool; there is no weighting by prior exposure count or time since
    /// expiry. On `Selected` the exposure is recorded before returning; on
    /// `Exhausted` the ledger is left untouched.
    pub fn select_next(&mut self, level: Level, now: i64) -> SelectionOutcome {
        let suppressed = self.ledger.active_ids(now);

        let pool: Vec<&Word> = self
            .catalog
            .words()
            .iter()
            .filter(|w| w.level == level && !suppressed.contains(&w.id))
            .collect();

        if pool.is_empty() {
            return SelectionOutcome::Exhausted;
        }

        let index = self.rng.gen_range(0..pool.len());
        let picked: Word = (*pool[index]).clone();
        self.ledger.record(picked.id, now);

        SelectionOutcome::Selected(picked)
    }

    /// Size of the currently eligible pool for `level`, without drawing
    pub fn remaining(&self, level: Level, now: i64) -> usize {
        let suppressed = self.ledger.active_ids(now);
        self.catalog
            .words_for_level(level)
            .filter(|w| !suppressed.contains(&w.id))
            .count()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ExposureLedger {
        &self.ledger
    }
}

// ============================================================
// Tests
// ============================================================
