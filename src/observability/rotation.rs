//! Size-bounded append-only file with numbered backups.
//!
//! When a write would push the active file past its size limit, the file is
//! shifted to `<name>.1`, existing backups move up by one (`.1` to `.2` and so
//! on) and the oldest backup beyond the retention limit is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit of the active trace file (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Line-oriented writer that rotates by size.
///
/// The file handle is opened lazily on the first write, so construction never
/// touches the filesystem.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    state: Mutex<Option<Active>>,
}

struct Active {
    file: File,
    len: u64,
}

impl RotatingFile {
    /// Writer with the default limits.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            max_bytes: MAX_FILE_SIZE_BYTES,
            max_backups: MAX_BACKUP_FILES,
            state: Mutex::new(None),
        }
    }

    /// Writer rotating once the file would exceed `max_bytes`, keeping
    /// `max_backups` old files.
    #[cfg(test)]
    const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            state: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if needed.
    ///
    /// A single line larger than the limit is still written, to a fresh file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from opening, rotating or writing, or an error
    /// if the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;

        if state.is_none() {
            *state = Some(self.open()?);
        }

        if let Some(active) = state.as_ref() {
            if active.len > 0 && active.len + incoming > self.max_bytes {
                *state = None;
                self.rotate()?;
                *state = Some(self.open()?);
            }
        }

        let active = state
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file is not open"))?;

        writeln!(active.file, "{line}")?;
        active.file.flush()?;
        active.len += incoming;

        Ok(())
    }

    fn open(&self) -> io::Result<Active> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let len = file.metadata()?.len();
        Ok(Active { file, len })
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.max_backups))?;

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }

        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
