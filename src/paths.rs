// File: ./src/paths.rs
use directories::{ProjectDirs, UserDirs};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub struct AppPaths;

impl AppPaths {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "tasklet")
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::project_dirs().map(|d| d.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Starting directory for the save/load dialogs.
    pub fn dialog_dir() -> Option<PathBuf> {
        let dirs = UserDirs::new()?;
        Some(
            dirs.document_dir()
                .unwrap_or_else(|| dirs.home_dir())
                .to_path_buf(),
        )
    }
}
