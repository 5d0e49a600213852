// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Args, Parser, Subcommand, ValueEnum};

// ---

/// Wildcard expression normalizer and desktop application launcher.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Color output options.
    #[arg(long, default_value = "auto", env = "INCSEARCH_COLOR", overrides_with = "color", global = true)]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Configuration file path, overrides the default location.
    #[arg(long, env = "INCSEARCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate wildcard expressions and print their canonical form, one per line.
    Normalize(NormalizeOpt),

    /// Work with installed desktop applications.
    #[command(subcommand)]
    Apps(AppsCommand),
}

#[derive(Args, Debug)]
pub struct NormalizeOpt {
    /// Wildcard expressions, '*' matches any run of characters and '?' matches exactly one character.
    pub patterns: Vec<String>,

    /// Read expressions from a file, one per line, use '-' for stdin.
    #[arg(short, long, conflicts_with = "patterns")]
    pub file: Option<PathBuf>,

    /// Keep empty lines when reading expressions from a file.
    #[arg(long)]
    pub keep_empty: bool,
}

#[derive(Subcommand, Debug)]
pub enum AppsCommand {
    /// List installed applications.
    List {
        /// Show only applications with names containing this text, ignoring case.
        filter: Option<String>,

        /// Show the command line and the desktop entry of each application.
        #[arg(short, long)]
        long: bool,
    },

    /// Start an application by its display name, ignoring case.
    Open {
        /// Application name, several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

impl From<ColorOption> for anstream::ColorChoice {
    fn from(value: ColorOption) -> Self {
        match value {
            ColorOption::Auto => Self::Auto,
            ColorOption::Always => Self::Always,
            ColorOption::Never => Self::Never,
        }
    }
}

#[cfg(test)]
mod tests;
