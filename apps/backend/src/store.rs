//! File-backed progress store.
//!
//! Holds the single learning history for this server. Every change goes
//! through [`ProgressStore::update`], which runs under the store lock so
//! at most one writer touches the history at a time, and only swaps in the
//! new value once it has been written to disk.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use quizdrill_core::{snapshot, Progress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt progress file: {0}")]
    Corrupt(String),
}

pub struct ProgressStore {
    path: Option<PathBuf>,
    state: Mutex<Progress>,
}

impl ProgressStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts from the default history. A file that cannot
    /// be read or validated is an error rather than being overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let progress = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            snapshot::import(&text).map_err(|e| StoreError::Corrupt(e.to_string()))?
        } else {
            tracing::info!("No progress file at {}, starting fresh", path.display());
            Progress::default()
        };

        Ok(Self {
            path: Some(path),
            state: Mutex::new(progress),
        })
    }

    /// Store that never touches disk.
    pub fn in_memory(progress: Progress) -> Self {
        Self {
            path: None,
            state: Mutex::new(progress),
        }
    }

    /// Copy of the current history.
    pub fn load(&self) -> Progress {
        self.lock().clone()
    }

    /// Apply `f` to a copy of the history and keep the result if it succeeds.
    ///
    /// The file write happens inline while the lock is held, on the calling
    /// task. A history is one learner's records and stays small, so the write
    /// is short; holding the lock across it keeps disk and memory in step.
    pub fn update<F, E>(&self, f: F) -> Result<Progress, E>
    where
        F: FnOnce(Progress) -> Result<Progress, E>,
        E: From<StoreError>,
    {
        let mut guard = self.lock();
        let next = f(guard.clone())?;
        self.persist(&next)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Replace the whole history.
    pub fn replace(&self, progress: Progress) -> Result<(), StoreError> {
        self.update(|_| Ok::<_, StoreError>(progress)).map(|_| ())
    }

    fn lock(&self) -> MutexGuard<'_, Progress> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, progress: &Progress) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let text = snapshot::export(progress).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, path)?;

        tracing::debug!("Saved progress to {}", path.display());
        Ok(())
    }
}
