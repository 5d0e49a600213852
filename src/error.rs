// std imports
use std::{
    fmt::Write as _,
    io::{self, Write},
    path::PathBuf,
};

// third-party imports
use config::ConfigError;
use owo_colors::{OwoColorize, Style};
use thiserror::Error;

// local imports
use crate::xerr::{Highlight, HighlightQuoted, Suggestions};

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] wildcard::ValidationError),
    #[error("failed to read {}: {source}", .path.as_path().hlq())]
    Source { path: PathBuf, source: io::Error },
    #[error("application {} not found", .name.hlq())]
    AppNotFound { name: String, suggestions: Suggestions },
    #[error("executable {} of application {} not found", .executable.hlq(), .name.hlq())]
    ExecutableNotFound { name: String, executable: String },
    #[error("failed to start application {}: {source}", .name.hlq())]
    Launch { name: String, source: io::Error },
    #[error("could not determine configuration directory")]
    AppDirs,
}

impl Error {
    /// Writes the error followed by tips, if any, to standard error.
    ///
    /// Colors are stripped unless standard error supports them.
    pub fn log(&self) {
        self.log_to(&mut anstream::stderr()).ok();
    }

    /// Writes the error followed by tips, if any.
    pub fn log_to(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".style(ERROR), self)?;
        write!(target, "{}", self.tips())
    }

    /// Returns tips that may help to fix the error, one per line.
    pub fn tips(&self) -> String {
        let mut tips = String::new();
        match self {
            Self::AppNotFound { suggestions, .. } if !suggestions.is_empty() => {
                let names = suggestions.iter().map(|name| name.hlq().to_string()).collect::<Vec<_>>();
                let names = match names.split_last() {
                    Some((last, [])) => last.clone(),
                    Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
                    None => String::new(),
                };
                writeln!(tips, "{} did you mean {}?", "  tip:".style(TIP), names).ok();
            }
            Self::AppNotFound { .. } => {
                writeln!(tips, "{} run {} to see available applications", "  tip:".style(TIP), "incsearch apps list".hl()).ok();
            }
            Self::Validation(err) => {
                let hint = match err.reason() {
                    wildcard::Reason::QuestionMarkBeforeAsterisk => "'?' must not be immediately followed by '*'",
                    wildcard::Reason::IllegalCharacters => {
                        "only letters, digits, '_', whitespace, '*' and '?' are allowed"
                    }
                };
                writeln!(tips, "{} {}", "  tip:".style(TIP), hint).ok();
            }
            _ => {}
        }
        tips
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ---

const ERROR: Style = Style::new().bright_red().bold();
const TIP: Style = Style::new().green().bold();
