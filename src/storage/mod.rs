//! Local storage - keyed JSON persistence under the data directory
//!
//! The app persists each state container under a string key, one flat JSON
//! file per key. Writes replace the whole file (last write wins, no conflict
//! detection) and there is no versioning or migration path.
//!
//! Keys in use: `user`, `playground-projects`, `course-progress-{userId}`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Storage key for the current user record
pub const USER_KEY: &str = "user";

/// Storage key for saved playground projects
pub const PLAYGROUND_PROJECTS_KEY: &str = "playground-projects";

/// Storage key for a user's course progress collection
pub fn course_progress_key(user_id: &str) -> String {
    format!("course-progress-{}", user_id)
}

/// Keyed JSON store backed by flat files
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_dir: PathBuf,
}

impl LocalStore {
    /// Open (creating if needed) a store at the given directory
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)
            .context("Failed to create storage directory")?;
        Ok(Self { base_dir })
    }

    /// Open the store at the default platform data directory
    pub fn default_store() -> Result<Self> {
        let base_dir = crate::config::data_dir()?.join("storage");
        Self::open(base_dir)
    }

    /// Open the store at the configured data directory
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::open(config.storage_dir()?.join("storage"))
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// A missing key is `Ok(None)`; a file that exists but fails to parse is
    /// an error, surfaced to the caller rather than silently discarded.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Corrupt storage entry '{}'", key))?;
        Ok(Some(value))
    }

    /// Serialize `value` and write it under `key`, replacing any prior value
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key)?;
        let contents = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize storage entry '{}'", key))?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Stored '{}'", key);
        Ok(())
    }

    /// Remove the value under `key`; removing a missing key is a no-op
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            debug!("Removed '{}'", key);
        }
        Ok(())
    }

    /// Whether a value exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).map(|p| p.exists()).unwrap_or(false)
    }

    /// Get the base directory path
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    // Keys map 1:1 to file names, so only filename-safe characters are
    // accepted. Every key the app generates already satisfies this.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            anyhow::bail!("Invalid storage key: '{}'", key);
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_key_is_none() {
        let (_dir, store) = temp_store();
        let value: Option<Sample> = store.get("user").unwrap();
        assert!(value.is_none());
        assert!(!store.contains("user"));
    }

    #[test]
    fn set_get_round_trip() {
        let (_dir, store) = temp_store();
        let sample = Sample { name: "alex".to_string(), count: 3 };
        store.set("user", &sample).unwrap();
        assert!(store.contains("user"));

        let loaded: Sample = store.get("user").unwrap().unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn set_replaces_prior_value() {
        let (_dir, store) = temp_store();
        store.set("user", &Sample { name: "a".to_string(), count: 1 }).unwrap();
        store.set("user", &Sample { name: "b".to_string(), count: 2 }).unwrap();

        let loaded: Sample = store.get("user").unwrap().unwrap();
        assert_eq!(loaded.name, "b");
        assert_eq!(loaded.count, 2);
    }

    #[test]
    fn remove_deletes_and_is_idempotent() {
        let (_dir, store) = temp_store();
        store.set("user", &Sample { name: "a".to_string(), count: 1 }).unwrap();
        store.remove("user").unwrap();
        assert!(!store.contains("user"));
        // Removing again is a no-op
        store.remove("user").unwrap();
    }

    #[test]
    fn corrupt_entry_is_an_error_not_none() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("user.json"), "{ not json").unwrap();
        let result: Result<Option<Sample>> = store.get("user");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_path_like_keys() {
        let (_dir, store) = temp_store();
        assert!(store.set("../escape", &1).is_err());
        assert!(store.set("a/b", &1).is_err());
        assert!(store.set("", &1).is_err());
    }

    #[test]
    fn progress_key_embeds_user_id() {
        assert_eq!(course_progress_key("user-001"), "course-progress-user-001");
    }
}
