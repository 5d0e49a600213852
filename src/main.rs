// std imports
use std::{
    io::{IsTerminal, Write, stdin},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};

// local imports
use incsearch::{
    App, AppDirectory,
    cli::{self, AppsCommand, Command},
    config,
    error::*,
    launcher,
    source::Source,
};

// ---

const INCSEARCH_DEBUG_LOG: &str = "INCSEARCH_DEBUG_LOG";
const INCSEARCH_DEBUG_LOG_STYLE: &str = "INCSEARCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(INCSEARCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(INCSEARCH_DEBUG_LOG)
                .write_style(INCSEARCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();
    anstream::ColorChoice::from(opt.color).write_global();

    let settings = config::load(opt.config.as_deref())?;
    let app = App::new(settings);

    let mut output = anstream::stdout().lock();
    let mut errors = anstream::stderr().lock();

    match opt.command {
        Command::Normalize(opt) => {
            let summary = if let Some(file) = opt.file {
                app.normalize_source(&Source::from(file), opt.keep_empty, &mut output, &mut errors)?
            } else if !opt.patterns.is_empty() {
                app.normalize(&opt.patterns, &mut output, &mut errors)?
            } else if stdin().is_terminal() {
                let mut cmd = cli::Opt::command();
                if let Some(cmd) = cmd.find_subcommand_mut("normalize") {
                    cmd.print_help()?;
                }
                return Ok(false);
            } else {
                app.normalize_source(&Source::Stdin, opt.keep_empty, &mut output, &mut errors)?
            };
            output.flush()?;
            Ok(summary.is_success())
        }
        Command::Apps(command) => {
            let dirs = config::app_dirs();
            let apps = AppDirectory::load(&app.settings().applications, dirs.as_ref());
            match command {
                AppsCommand::List { filter, long } => {
                    app.list_apps(&apps, filter.as_deref(), long, &mut output)?;
                    output.flush()?;
                }
                AppsCommand::Open { name } => {
                    launcher::open(&apps, &name.join(" "))?;
                }
            }
            Ok(true)
        }
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
        Err(err) => {
            err.log();
            process::exit(1);
        }
    }
}
