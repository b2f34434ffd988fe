//! Common Types and Constants
//!
//! Shared data structures used across the scheduling modules.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// How long a shown word stays suppressed (7 days, in milliseconds)
pub const SUPPRESSION_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// The core APIs all take an explicit `now` so callers (and tests) control
/// the clock; this is the convenience the embedding app passes in.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// ==================== Level ====================

/// Difficulty level of a word
///
/// The catalog is partitioned into exactly three levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Middle,
    High,
}

impl Level {
    /// All levels, in ascending difficulty order
    pub const ALL: [Level; 3] = [Level::Low, Level::Middle, Level::High];

    /// Stable string form, matching the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Middle => "middle",
            Level::High => "high",
        }
    }

    /// Parse the persisted string form; `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "low" => Some(Level::Low),
            "middle" => Some(Level::Middle),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    /// Display label for the level picker
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "ローレベル",
            Level::Middle => "ミドルレベル",
            Level::High => "ハイレベル",
        }
    }

    /// Rough proficiency band the level targets
    pub fn description(&self) -> &'static str {
        match self {
            Level::Low => "TOEIC 400〜600点 / 英検準2級〜2級",
            Level::Middle => "TOEIC 600〜800点 / 英検準1級前後",
            Level::High => "TOEIC 800点以上 / 英検準1級以上",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Middle
    }
}

// ==================== Word ====================

/// One catalog entry
///
/// `id` is unique across the whole catalog, not per level. Everything except
/// `id` and `level` is display payload the scheduler never interprets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub examples: Vec<String>,
    pub level: Level,
}
