// public modules
pub mod app;
pub mod appdirs;
pub mod apps;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod settings;
pub mod source;
pub mod xerr;

// public uses
pub use app::{App, Summary};
pub use apps::{AppDirectory, AppInfo};
pub use error::{Error, Result};
pub use settings::Settings;
pub use source::{Lines, Source};
pub use wildcard::{Expression, Reason, ValidationError, normalize};
