//! Default-name storage.
//!
//! The form remembers one value: the name to pre-fill. It is kept either in
//! a small JSON file or in process memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::config::{Config, MAX_DEFAULT_NAME_LENGTH, MSG_DEFAULT_NAME_TOO_LONG};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persisted preferences document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,
}

/// Preference store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stored default name, if any
    async fn default_name(&self) -> AppResult<Option<String>>;

    /// Replace the default name; an empty name clears it.
    ///
    /// # Errors
    /// `Validation` when the name exceeds the length limit.
    async fn set_default_name(&self, name: &str) -> AppResult<()>;

    /// Forget the default name
    async fn clear_default_name(&self) -> AppResult<()>;
}

/// Check a name against the default-name rules.
pub fn validate_default_name(name: &str) -> AppResult<()> {
    if name.chars().count() > MAX_DEFAULT_NAME_LENGTH {
        return Err(AppError::validation(MSG_DEFAULT_NAME_TOO_LONG));
    }
    Ok(())
}

fn normalize(name: &str) -> AppResult<Option<String>> {
    validate_default_name(name)?;
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(name.to_string()))
    }
}

/// JSON file backed store.
///
/// Writes replace the whole file through a rename. Writers within one store
/// are serialized; the temp file name carries the process id so separate
/// processes never share one.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<Preferences> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, prefs: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(prefs)?;
        let tmp = self
            .path
            .with_extension(format!("{}.tmp", std::process::id()));
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn default_name(&self) -> AppResult<Option<String>> {
        Ok(self.load().await?.default_name)
    }

    async fn set_default_name(&self, name: &str) -> AppResult<()> {
        let default_name = normalize(name)?;

        let _guard = self.write_lock.lock().await;
        let mut prefs = self.load().await?;
        prefs.default_name = default_name;
        self.save(&prefs).await
    }

    async fn clear_default_name(&self) -> AppResult<()> {
        self.set_default_name("").await
    }
}

/// Process-local store, used when no preferences path is configured.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    default_name: RwLock<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn default_name(&self) -> AppResult<Option<String>> {
        Ok(self.default_name.read().await.clone())
    }

    async fn set_default_name(&self, name: &str) -> AppResult<()> {
        let default_name = normalize(name)?;
        *self.default_name.write().await = default_name;
        Ok(())
    }

    async fn clear_default_name(&self) -> AppResult<()> {
        *self.default_name.write().await = None;
        Ok(())
    }
}

/// Build the store selected by configuration.
pub fn from_config(config: &Config) -> Arc<dyn PreferenceStore> {
    match &config.preferences_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using file preference store");
            Arc::new(FilePreferenceStore::new(path.clone()))
        }
        None => {
            tracing::debug!("PREFERENCES_PATH not set, default name kept in memory");
            Arc::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.default_name().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = FilePreferenceStore::new(&path);

        store.set_default_name("Ann").await.unwrap();
        assert_eq!(store.default_name().await.unwrap().as_deref(), Some("Ann"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"defaultName\": \"Ann\""));

        // A fresh handle sees the same value
        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.default_name().await.unwrap().as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_file_store_empty_name_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store.set_default_name("Ann").await.unwrap();
        store.set_default_name("").await.unwrap();
        assert_eq!(store.default_name().await.unwrap(), None);

        store.set_default_name("Bo").await.unwrap();
        store.clear_default_name().await.unwrap();
        assert_eq!(store.default_name().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = FilePreferenceStore::new(&path).default_name().await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.default_name().await.unwrap(), None);

        store.set_default_name("Ann").await.unwrap();
        assert_eq!(store.default_name().await.unwrap().as_deref(), Some("Ann"));

        store.clear_default_name().await.unwrap();
        assert_eq!(store.default_name().await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_file_store_concurrent_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = Arc::new(FilePreferenceStore::new(&path));

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.set_default_name(&format!("name{}", i)).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = store.default_name().await.unwrap().unwrap();
        assert!(stored.starts_with("name"));

        // Only the document remains, no leftover temp files
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_name_length_limit() {
        let too_long = "x".repeat(101);
        let dir = tempfile::tempdir().unwrap();
        let stores: [Arc<dyn PreferenceStore>; 2] = [
            Arc::new(FilePreferenceStore::new(dir.path().join("prefs.json"))),
            Arc::new(MemoryPreferenceStore::new()),
        ];

        for store in stores {
            let result = store.set_default_name(&too_long).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
            assert_eq!(store.default_name().await.unwrap(), None);

            store.set_default_name(&"x".repeat(100)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_from_config_without_path() {
        let store = from_config(&Config::default());

        store.set_default_name("Ann").await.unwrap();
        assert_eq!(store.default_name().await.unwrap().as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_from_config_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let config = Config {
            preferences_path: Some(path.clone()),
            ..Config::default()
        };

        from_config(&config).set_default_name("Ann").await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let prefs: Preferences = serde_json::from_str(&raw).unwrap();
        assert_eq!(prefs.default_name.as_deref(), Some("Ann"));
        assert_eq!(
            from_config(&config).default_name().await.unwrap().as_deref(),
            Some("Ann")
        );
    }
}
