// std imports
use std::{io::Write, iter::once};

// local imports
use crate::{
    apps::AppDirectory,
    error::{Error, Result},
    settings::Settings,
    source::Source,
};

// ---

/// Counts of processed expressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.rejected == 0
    }
}

// ---

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the canonical form of each expression to `output`, one per line.
    ///
    /// Rejected expressions are reported to `errors` and do not stop processing.
    pub fn normalize<I, S>(&self, patterns: I, output: &mut impl Write, errors: &mut impl Write) -> Result<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = Summary::default();
        for pattern in patterns {
            self.normalize_one(pattern.as_ref(), output, errors, &mut summary)?;
        }
        Ok(summary)
    }

    /// Same as [`App::normalize`] with expressions read from `source`, one per line.
    ///
    /// Empty lines are skipped if configured so, unless `keep_empty` is set.
    pub fn normalize_source(
        &self,
        source: &Source,
        keep_empty: bool,
        output: &mut impl Write,
        errors: &mut impl Write,
    ) -> Result<Summary> {
        let skip_empty = self.settings.source.skip_empty && !keep_empty;
        let mut summary = Summary::default();

        for line in source.open()? {
            let line = line.map_err(|e| source.error(e))?;
            if skip_empty && line.is_empty() {
                continue;
            }
            self.normalize_one(&line, output, errors, &mut summary)?;
        }

        log::debug!("{} processed: {:?}", source.description(), summary);
        Ok(summary)
    }

    /// Writes display names of applications containing `filter`, ignoring case.
    ///
    /// With `long` set, each line also holds the command line and the desktop entry path,
    /// separated with tabs. Returns the number of listed applications.
    pub fn list_apps(
        &self,
        apps: &AppDirectory,
        filter: Option<&str>,
        long: bool,
        output: &mut impl Write,
    ) -> Result<usize> {
        let filter = filter.map(str::to_lowercase);
        let mut n = 0;

        for (key, app) in apps.iter() {
            if filter.as_deref().is_some_and(|filter| !key.contains(filter)) {
                continue;
            }
            if long {
                let words = once(app.executable.as_str())
                    .chain(app.args.iter().map(String::as_str))
                    .collect::<Vec<_>>();
                writeln!(
                    output,
                    "{}\t{}\t{}",
                    app.name,
                    shellwords::join(&words),
                    app.path.display()
                )?;
            } else {
                writeln!(output, "{}", app.name)?;
            }
            n += 1;
        }

        Ok(n)
    }

    fn normalize_one(
        &self,
        pattern: &str,
        output: &mut impl Write,
        errors: &mut impl Write,
        summary: &mut Summary,
    ) -> Result<()> {
        match wildcard::normalize(pattern) {
            Ok(canonical) => {
                writeln!(output, "{}", canonical)?;
                summary.accepted += 1;
            }
            Err(err) => {
                Error::from(err).log_to(errors)?;
                summary.rejected += 1;
            }
        }
        Ok(())
    }
}
