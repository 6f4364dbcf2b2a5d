//! Connection management: one serialized writer plus an optional read-only
//! connection for file-backed databases.

pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use netgauge_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::{apply_pragmas, apply_read_pragmas};
use crate::migrations;

/// Owns the write connection and, for on-disk databases, a separate reader
/// so display queries never wait behind the writer's lock.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    reader: Option<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let open_failed = |e: rusqlite::Error| StorageError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        let writer = Connection::open(path).map_err(open_failed)?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        let reader = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(open_failed)?;
        apply_read_pragmas(&reader)?;

        tracing::info!(path = %path.display(), "verdict store opened");
        Ok(Self {
            writer: Mutex::new(writer),
            reader: Some(Mutex::new(reader)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database. Reads share the writer connection.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            reader: None,
            path: None,
        })
    }

    /// Execute a write operation with the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Execute a read operation on the reader, or the writer when in memory.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.reader {
            Some(reader) => {
                let guard = reader.lock().map_err(|_| StorageError::SqliteError {
                    message: "read lock poisoned".to_string(),
                })?;
                f(&guard)
            }
            None => self.with_writer(f),
        }
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
