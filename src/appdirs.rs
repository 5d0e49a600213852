// std imports
use std::{
    env,
    path::{Path, PathBuf},
};

// ---

const APPLICATIONS: &str = "applications";
const DEFAULT_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];

pub struct AppDirs {
    /// Application specific configuration directory.
    pub config_dir: PathBuf,
    /// User data directory shared by all applications, e.g. `~/.local/share`.
    pub data_dir: PathBuf,
}

impl AppDirs {
    pub fn new(name: &str) -> Option<Self> {
        let config_dir = sys::config_dir()?.join(name);
        let data_dir = sys::data_dir()?;
        Some(Self { config_dir, data_dir })
    }

    /// Directories holding desktop entries, most preferred first.
    pub fn application_dirs(&self) -> Vec<PathBuf> {
        application_dirs(Some(&self.data_dir))
    }
}

/// Directories holding desktop entries, starting with `data_dir` if given,
/// followed by the system data directories.
pub fn application_dirs(data_dir: Option<&Path>) -> Vec<PathBuf> {
    data_dir
        .map(Path::to_path_buf)
        .into_iter()
        .chain(data_dirs(env::var_os("XDG_DATA_DIRS")))
        .map(|dir| dir.join(APPLICATIONS))
        .collect()
}

/// Parses a `XDG_DATA_DIRS` style value, ignoring relative entries.
pub fn data_dirs(value: Option<std::ffi::OsString>) -> Vec<PathBuf> {
    let dirs = value
        .map(|value| {
            env::split_paths(&value)
                .filter_map(|dir| dirs_sys::is_absolute_path(dir.into_os_string()))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if dirs.is_empty() {
        DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect()
    } else {
        dirs
    }
}

#[cfg(target_os = "macos")]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }

    pub(crate) fn data_dir() -> Option<PathBuf> {
        env::var_os("XDG_DATA_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        dirs::config_dir()
    }

    pub(crate) fn data_dir() -> Option<PathBuf> {
        dirs::data_dir()
    }
}
