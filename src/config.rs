// std imports
use std::path::Path;

// local imports
use crate::{
    appdirs::AppDirs,
    error::{Error, Result},
    settings::Settings,
};

// ---

pub const APP_NAME: &str = "incsearch";
pub const CONFIG_FILE: &str = "config.yaml";

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

/// Loads settings from `path` if given, otherwise from the optional
/// configuration file in the application configuration directory.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path, true),
        None => {
            let dirs = app_dirs().ok_or(Error::AppDirs)?;
            Settings::load(&dirs.config_dir.join(CONFIG_FILE), false)
        }
    }
}
