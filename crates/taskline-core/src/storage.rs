use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use crate::task::{Task, TaskParseError};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Task file not found: {0}")]
    NotFound(PathBuf),
    #[error("Storage IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] TaskParseError),
}

/// Durable storage for the full task list as a newline-delimited text file.
///
/// Every save rewrites the whole file; there is no incremental diffing and
/// no locking (the file is owned by a single process).
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Binds storage to a file path, creating the parent directory if it is
    /// missing. The file itself does not have to exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every task from the file in stored order.
    ///
    /// Empty lines are ignored. Lines with an unrecognized category letter
    /// are skipped without failing the load, keeping files touched by other
    /// tools readable; any other malformed line fails the whole load.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()))
            }
            Err(err) => return Err(err.into()),
        };

        let mut tasks = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            match Task::parse_save_line(line) {
                Ok(task) => tasks.push(task),
                Err(TaskParseError::UnknownCategory(category)) => {
                    warn!(
                        "skipping line with unknown task category `{}` in {}",
                        category,
                        self.path.display()
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(tasks)
    }

    /// Overwrites the file with the serialized form of every task in list
    /// order, one per line. An empty list truncates the file.
    ///
    /// The content is written to a sibling temp file and renamed over the
    /// target, so a reader never observes a partially written file.
    pub fn save_all(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut content = String::new();
        for task in tasks {
            content.push_str(&task.save_line());
        }
        let tmp = self.temp_path();
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
