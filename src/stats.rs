//! Lifetime play statistics
//!
//! A tiny persisted record: best score, games played, best streak. Loading
//! never fails outward; missing or unreadable data just means a fresh
//! record. Saving can fail, and callers are expected to log it and keep
//! playing.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// File name under the platform config directory
const STATS_FILE: &str = "stats.json";

/// Lifetime counters across every run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Best final score ever reached
    pub high_score: u32,
    /// Completed runs
    pub games_played: u32,
    /// Historically tracked with the same max rule as `high_score`; kept as
    /// its own field rather than silently merged into it
    pub best_streak: u32,
}

impl PlayerStats {
    /// Fold one finished run into the record
    pub fn record_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.best_streak = self.best_streak.max(final_score);
    }

    /// Whether this score would beat the current best
    pub fn is_new_high(&self, score: u32) -> bool {
        score > self.high_score
    }
}

/// Where statistics live between sessions
pub trait StatsStore {
    /// Last persisted record, or a fresh default when there is none or it
    /// cannot be read
    fn load(&self) -> PlayerStats;
    /// Persist the record
    fn save(&self, stats: &PlayerStats) -> io::Result<()>;
}

/// One pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config directory
    pub fn open_default() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", "flappy-core")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        Ok(Self::at(dirs.config_dir().join(STATS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> PlayerStats {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(stats) => {
                    log::info!("Loaded stats from {}", self.path.display());
                    stats
                }
                Err(err) => {
                    log::warn!("Stats file unreadable ({err}), starting fresh");
                    PlayerStats::default()
                }
            },
            Err(_) => {
                log::info!("No stats found, starting fresh");
                PlayerStats::default()
            }
        }
    }

    fn save(&self, stats: &PlayerStats) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, json)?;
        log::info!("Stats saved ({} games played)", stats.games_played);
        Ok(())
    }
}

/// In-memory store: the no-persistence fallback, and a probe for tests.
/// Clones share one slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<PlayerStats>>>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> PlayerStats {
        (*self.slot.borrow()).unwrap_or_default()
    }

    fn save(&self, stats: &PlayerStats) -> io::Result<()> {
        *self.slot.borrow_mut() = Some(*stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_all_counters() {
        let mut stats = PlayerStats::default();
        stats.record_game_over(3);
        stats.record_game_over(1);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.high_score, 3);
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn test_zero_score_run_still_counts() {
        let mut stats = PlayerStats::default();
        stats.record_game_over(0);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.high_score, 0);
    }

    #[test]
    fn test_high_score_and_streak_move_together() {
        let mut stats = PlayerStats::default();
        for score in [2, 9, 4] {
            stats.record_game_over(score);
            assert_eq!(stats.best_streak, stats.high_score);
        }
        assert_eq!(stats.high_score, 9);
    }

    #[test]
    fn test_matching_score_is_not_a_new_high() {
        let mut stats = PlayerStats::default();
        stats.record_game_over(5);
        assert!(!stats.is_new_high(5));
        assert!(stats.is_new_high(6));
    }

    #[test]
    fn test_memory_store_shares_slot_between_clones() {
        let store = MemoryStore::default();
        let probe = store.clone();

        let mut stats = PlayerStats::default();
        stats.record_game_over(4);
        store.save(&stats).unwrap();

        assert_eq!(probe.load(), stats);
    }

    #[test]
    fn test_memory_store_defaults_when_empty() {
        assert_eq!(MemoryStore::default().load(), PlayerStats::default());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join(STATS_FILE));

        let mut stats = PlayerStats::default();
        stats.record_game_over(7);
        store.save(&stats).unwrap();

        assert_eq!(store.load(), stats);
    }

    #[test]
    fn test_file_store_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("nope.json"));
        assert_eq!(store.load(), PlayerStats::default());
    }

    #[test]
    fn test_file_store_corrupt_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATS_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::at(path);
        assert_eq!(store.load(), PlayerStats::default());
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("deep/nested/stats.json"));
        store.save(&PlayerStats::default()).unwrap();
        assert!(store.path().exists());
    }
}
