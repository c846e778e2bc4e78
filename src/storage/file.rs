// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed key-value store for session state.
//!
//! One JSON object of string entries per store file. The file is read
//! once, on first access; afterwards every reader observes the same
//! in-memory cache. Writes update the cache first and then persist
//! best-effort: storage failures are logged and swallowed, never
//! surfaced to the caller.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Durable string key-value store with an in-memory cache.
///
/// Clones share the same cache and backing file, so a store handed to
/// several components behaves as one process-wide store per key.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<DashMap<String, String>>,
    /// Backing file. `None` keeps the store purely in memory (tests).
    path: Option<Arc<PathBuf>>,
    loaded: Arc<OnceCell<()>>,
}

impl SessionStore {
    /// Open a store backed by the given file. The file is not touched
    /// until the first read or write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            path: Some(Arc::new(path.into())),
            loaded: Arc::new(OnceCell::new()),
        }
    }

    /// Create an in-memory store for testing (no file I/O).
    pub fn in_memory() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            path: None,
            loaded: Arc::new(OnceCell::new()),
        }
    }

    /// `true` once the initial load from the backing file has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Last known value under `key`, after awaiting the initial load.
    pub async fn read(&self, key: &str) -> Option<String> {
        self.ensure_loaded().await;
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Persist `value` under `key`; `None` deletes the entry.
    ///
    /// The in-memory cache is updated before this returns. The file
    /// write is best-effort: failures are logged, not raised.
    pub async fn write(&self, key: &str, value: Option<String>) {
        self.ensure_loaded().await;
        match value {
            Some(value) => {
                self.entries.insert(key.to_string(), value);
            }
            None => {
                self.entries.remove(key);
            }
        }
        self.flush().await;
    }

    /// Load the backing file into the cache, exactly once per store.
    /// Concurrent callers share the same load.
    async fn ensure_loaded(&self) {
        self.loaded
            .get_or_init(|| async {
                let Some(path) = &self.path else { return };

                let text = match tokio::fs::read_to_string(path.as_ref()).await {
                    Ok(text) => text,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
                    Err(e) => {
                        tracing::warn!(error = %e, path = %path.display(), "Failed to read session store");
                        return;
                    }
                };

                match serde_json::from_str::<BTreeMap<String, String>>(&text) {
                    Ok(stored) => {
                        for (key, value) in stored {
                            self.entries.insert(key, value);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, path = %path.display(), "Unreadable session store, starting empty");
                    }
                }
            })
            .await;
    }

    /// Write the whole cache back to the file. Errors are logged only.
    async fn flush(&self) {
        let Some(path) = &self.path else { return };

        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let text = match serde_json::to_string_pretty(&snapshot) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session store");
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = tokio::fs::create_dir_all(parent).await {
                    tracing::warn!(error = %e, path = %path.display(), "Failed to create session store directory");
                    return;
                }
            }
        }

        if let Err(e) = tokio::fs::write(path.as_ref(), text).await {
            tracing::warn!(error = %e, path = %path.display(), "Failed to write session store");
        }
    }
}
