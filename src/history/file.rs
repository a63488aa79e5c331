// src/history/file.rs
use std::{
    fs,
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use super::{DEFAULT_CAP, HistoryEntry, HistoryError, HistoryStore, push_front_trimmed, remove_by_id};

/// History persisted as a pretty-printed JSON array.
///
/// A missing file or one that does not parse reads as empty history; the
/// next write replaces it. Any other read failure is an error.
///
/// Every operation runs load-modify-save under one in-process lock. Each
/// save goes through its own temp file, so concurrent processes never see a
/// torn file, but the file is meant to have a single writing process: two
/// processes recording at once can drop each other's entries.
#[derive(Debug)]
pub struct FileHistory {
    path: PathBuf,
    cap: usize,
    lock: Mutex<()>,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_cap(path, DEFAULT_CAP)
    }

    pub fn with_cap(path: impl Into<PathBuf>, cap: usize) -> Self {
        Self {
            path: path.into(),
            cap,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let data = match fs::read(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("history {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&data) {
            Ok(list) => Ok(list),
            Err(e) => {
                log::warn!("history {} is corrupt ({e}); starting empty", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    // Write to a uniquely named sibling temp file, then rename over the original.
    fn save(&self, list: &[HistoryEntry]) -> Result<(), HistoryError> {
        let dir = match self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            Some(d) => d,
            None => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut w = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut w, list)?;
            w.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl HistoryStore for FileHistory {
    fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let _guard = self.lock.lock();
        let mut list = self.load()?;
        push_front_trimmed(&mut list, entry, self.cap);
        self.save(&list)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let _guard = self.lock.lock();
        self.load()
    }

    fn delete(&self, id: &str) -> Result<bool, HistoryError> {
        let _guard = self.lock.lock();
        let mut list = self.load()?;
        let removed = remove_by_id(&mut list, id);
        if removed {
            self.save(&list)?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.lock.lock();
        self.save(&[])
    }
}
