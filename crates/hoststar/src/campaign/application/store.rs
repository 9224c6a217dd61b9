use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::warn;

use super::domain::ApplicationDraft;

/// Fixed key the draft snapshot lives under, matching the key the campaign
/// page used in browser storage.
pub const DRAFT_STORE_KEY: &str = "hoststar_draft";

/// Error enumeration for draft persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum DraftStoreError {
    #[error("snapshot backend unavailable: {0}")]
    Backend(String),
    #[error("failed to serialize draft snapshot")]
    Serialize(#[from] serde_json::Error),
}

/// Opaque key/value snapshot storage, the browser-local-storage analogue.
///
/// Kept string-typed so the store layer owns parsing and can fail safe on a
/// corrupt snapshot. Swappable per deployment: in-memory for tests, a file
/// per key for the CLI demo.
pub trait SnapshotBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError>;
    fn remove(&self, key: &str) -> Result<(), DraftStoreError>;
}

#[derive(Default, Clone)]
pub struct InMemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryBackend {
    /// Seed a snapshot directly, bypassing the store. Test and demo hook.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("snapshot mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl SnapshotBackend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        let guard = self.entries.lock().expect("snapshot mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        let mut guard = self.entries.lock().expect("snapshot mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        let mut guard = self.entries.lock().expect("snapshot mutex poisoned");
        guard.remove(key);
        Ok(())
    }
}

/// One JSON file per key under a directory, so the CLI demo keeps drafts
/// across runs the way the browser page did.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn backend_err(err: io::Error) -> DraftStoreError {
        DraftStoreError::Backend(err.to_string())
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::backend_err(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        std::fs::create_dir_all(&self.dir).map_err(Self::backend_err)?;
        std::fs::write(self.path_for(key), value).map_err(Self::backend_err)
    }

    fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::backend_err(err)),
        }
    }
}

/// Durable (session-scoped) persistence of the application draft under
/// [`DRAFT_STORE_KEY`].
pub struct DraftStore<B> {
    backend: B,
    key: &'static str,
}

impl<B: SnapshotBackend> DraftStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DRAFT_STORE_KEY,
        }
    }

    /// Load the persisted snapshot, if any. A malformed snapshot is
    /// discarded (with a warning) rather than surfaced, so a corrupt entry
    /// can never wedge the session; the next save overwrites it.
    pub fn load(&self) -> Result<Option<ApplicationDraft>, DraftStoreError> {
        let Some(raw) = self.backend.read(self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(draft) => Ok(Some(draft)),
            Err(err) => {
                warn!(key = self.key, %err, "discarding malformed draft snapshot");
                Ok(None)
            }
        }
    }

    /// Serialize the draft and unconditionally overwrite the snapshot. The
    /// draft type carries no file references, so none can leak into storage.
    pub fn save(&self, draft: &ApplicationDraft) -> Result<(), DraftStoreError> {
        let snapshot = serde_json::to_string(draft)?;
        self.backend.write(self.key, &snapshot)
    }

    /// Remove the snapshot entirely.
    pub fn clear(&self) -> Result<(), DraftStoreError> {
        self.backend.remove(self.key)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
