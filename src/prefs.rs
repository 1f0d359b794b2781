//! Presentation preferences
//!
//! View toggles the dashboard persists alongside the exams: list/grid
//! layout, hiding exams that already started, and the one-shot welcome
//! flag. Values are stored as plain strings under fixed keys, one file
//! per key, so they stay easy to inspect by hand.

use serde::{Deserialize, Serialize};

use crate::storage::{KvStore, Result};

pub const VIEW_MODE_KEY: &str = "examViewMode";
pub const HIDE_COMPLETED_KEY: &str = "hideCompletedExams";
pub const WELCOME_KEY: &str = "hasSeenWelcome";

/// Dashboard layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    List,
    Grid,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::List
    }
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Self::List),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }
}

/// Current preference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub view_mode: ViewMode,
    pub hide_completed: bool,
    pub has_seen_welcome: bool,
}

/// Reads and writes preferences in the shared key-value store
pub struct PrefsStore {
    kv: KvStore,
}

impl PrefsStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Read all preferences; anything missing or unreadable is its default
    pub fn load(&self) -> Preferences {
        Preferences {
            view_mode: self
                .kv
                .get(VIEW_MODE_KEY)
                .ok()
                .flatten()
                .and_then(|v| ViewMode::parse(v.trim()))
                .unwrap_or_default(),
            hide_completed: self.flag(HIDE_COMPLETED_KEY),
            has_seen_welcome: self.flag(WELCOME_KEY),
        }
    }

    fn flag(&self, key: &str) -> bool {
        matches!(
            self.kv.get(key).ok().flatten().as_deref().map(str::trim),
            Some("true")
        )
    }

    pub fn set_view_mode(&self, mode: ViewMode) -> Result<()> {
        self.kv.set(VIEW_MODE_KEY, mode.as_str())
    }

    pub fn set_hide_completed(&self, hide: bool) -> Result<()> {
        self.kv.set(HIDE_COMPLETED_KEY, if hide { "true" } else { "false" })
    }

    pub fn mark_welcome_seen(&self) -> Result<()> {
        self.kv.set(WELCOME_KEY, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_prefs() -> (PrefsStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf());
        kv.init().unwrap();
        (PrefsStore::new(kv), temp_dir)
    }

    #[test]
    fn test_defaults_when_empty() {
        let (prefs, _temp) = test_prefs();
        let p = prefs.load();
        assert_eq!(p.view_mode, ViewMode::List);
        assert!(!p.hide_completed);
        assert!(!p.has_seen_welcome);
    }

    #[test]
    fn test_round_trip() {
        let (prefs, _temp) = test_prefs();
        prefs.set_view_mode(ViewMode::Grid).unwrap();
        prefs.set_hide_completed(true).unwrap();
        prefs.mark_welcome_seen().unwrap();

        let p = prefs.load();
        assert_eq!(p.view_mode, ViewMode::Grid);
        assert!(p.hide_completed);
        assert!(p.has_seen_welcome);

        prefs.set_hide_completed(false).unwrap();
        assert!(!prefs.load().hide_completed);
    }

    #[test]
    fn test_garbage_values_fall_back_to_defaults() {
        let (prefs, temp) = test_prefs();
        let kv = KvStore::new(temp.path().to_path_buf());
        kv.set(VIEW_MODE_KEY, "carousel").unwrap();
        kv.set(HIDE_COMPLETED_KEY, "maybe").unwrap();

        let p = prefs.load();
        assert_eq!(p.view_mode, ViewMode::List);
        assert!(!p.hide_completed);
    }

    #[test]
    fn test_stored_encoding_is_plain_strings() {
        let (prefs, temp) = test_prefs();
        prefs.set_view_mode(ViewMode::Grid).unwrap();
        prefs.set_hide_completed(true).unwrap();

        let kv = KvStore::new(temp.path().to_path_buf());
        assert_eq!(kv.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("grid"));
        assert_eq!(kv.get(HIDE_COMPLETED_KEY).unwrap().as_deref(), Some("true"));
    }
}
