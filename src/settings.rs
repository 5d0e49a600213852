// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    pub applications: Applications,
    pub source: SourceSettings,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid by the file at `path`.
    ///
    /// The file format is derived from its extension.
    /// A missing file is an error only if `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        log::debug!("load settings from {} (required: {})", path.display(), required);

        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .add_source(File::from(path).required(required))
            .build()?
            .try_deserialize()?)
    }

    /// Loads the embedded defaults only.
    #[cfg(test)]
    pub fn builtin() -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()?
            .try_deserialize()?)
    }
}

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Applications {
    pub search_dirs: Vec<PathBuf>,
    pub include_hidden: bool,
}

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct SourceSettings {
    pub skip_empty: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self { skip_empty: true }
    }
}
