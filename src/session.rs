//! Review session
//!
//! Ephemeral per-session state owned by the rendering layer: the card
//! currently on screen, whether its answer side is revealed, and whether the
//! active level is exhausted. None of this is persisted; only the exposure
//! ledger and the level preference survive a restart.

use crate::scheduler::{ReviewScheduler, SelectionOutcome};
use crate::settings::LevelPreference;
use crate::types::{Level, Word};

/// One interactive review session
pub struct ReviewSession {
    scheduler: ReviewScheduler,
    preference: LevelPreference,
    level: Level,
    current: Option<Word>,
    revealed: bool,
    exhausted: bool,
}

impl ReviewSession {
    /// Start a session, loading the active level from the stored preference.
    ///
    /// The first card is not drawn yet; call `advance` once on initial load.
    pub fn new(scheduler: ReviewScheduler, preference: LevelPreference) -> Self {
        let level = preference.get();
        Self {
            scheduler,
            preference,
            level,
            current: None,
            revealed: false,
            exhausted: false,
        }
    }

    /// Draw the next card for the active level ("Next" button and initial load)
    pub fn advance(&mut self, now: i64) {
        match self.scheduler.select_next(self.level, now) {
            SelectionOutcome::Selected(word) => {
                self.current = Some(word);
                self.exhausted = false;
            }
            SelectionOutcome::Exhausted => {
                self.current = None;
                self.exhausted = true;
            }
        }
        self.revealed = false;
    }

    /// Show the answer side of the current card
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Switch the active level, persist the preference, and draw immediately.
    ///
    /// A failed preference write is logged and does not block the draw; the
    /// new level still applies for the rest of the session.
    pub fn change_level(&mut self, level: Level, now: i64) {
        if let Err(e) = self.preference.set(level) {
            log::warn!("level preference write failed: {}", e);
        }
        self.level = level;
        self.advance(now);
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn current(&self) -> Option<&Word> {
        self.current.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Eligible words left for the active level
    pub fn remaining(&self, now: i64) -> usize {
        self.scheduler.remaining(self.level, now)
    }
}
