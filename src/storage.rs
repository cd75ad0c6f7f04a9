// File: ./src/storage.rs
use crate::error::StorageError;
use crate::model::Task;
use crate::model::adapter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const TASK_FILE_EXTENSION: &str = "txt";
pub const DEFAULT_TASK_FILE_NAME: &str = "tasks.txt";

/// Writes one task per line, in order.
///
/// The file is truncated first and written in place, so a failure halfway
/// leaves a partial file behind.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for task in tasks {
        writer
            .write_all(task.to_line().as_bytes())
            .map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Reads the whole file before parsing, so callers only ever see a complete list.
pub fn load(path: &Path) -> Result<Vec<Task>, StorageError> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(adapter::from_text(&contents))
}

/// Appends `.txt` to paths chosen without any extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(TASK_FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_order_and_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let tasks = vec![Task::new("a"), Task::new("✓ b"), Task::new("a")];

        save(&path, &tasks).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n✓ b\na\n");
        assert_eq!(load(&path).unwrap(), tasks);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "old\nstuff\nhere\n").unwrap();

        save(&path, &[Task::new("new")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn load_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
        assert!(matches!(load(&path), Err(StorageError::Read { .. })));
    }

    #[test]
    fn save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("list.txt");
        let err = save(&path, &[Task::new("a")]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.to_string().starts_with("writing "));
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/todo")),
            PathBuf::from("/tmp/todo.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/todo.md")),
            PathBuf::from("/tmp/todo.md")
        );
    }
}
