// std imports
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Read, stdin},
    iter::FusedIterator,
    path::{Path, PathBuf},
};

// local imports
use crate::{
    error::{Error, Result},
    xerr::HighlightQuoted,
};

// ---

/// A boxed line source, as returned by [`Source::open`].
pub type DynLines = Lines<Box<dyn BufRead>>;

/// A reference to a line source, a file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Returns a human readable description of the source.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {}", path.as_path().hlq()),
        }
    }

    /// Returns the path of the source, or `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path.as_path()),
        }
    }

    /// Wraps an I/O error that occurred while reading the source.
    pub fn error(&self, source: io::Error) -> Error {
        match self.path() {
            Some(path) => Error::Source {
                path: path.to_owned(),
                source,
            },
            None => Error::Io(source),
        }
    }

    /// Opens the source and returns its trimmed lines.
    pub fn open(&self) -> Result<DynLines> {
        log::debug!("open {}", self.description());
        match self {
            Self::Stdin => Ok(Lines::new(Box::new(stdin().lock()))),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| self.error(e))?;
                Ok(Lines::new(Box::new(BufReader::new(file))))
            }
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

// ---

/// Returns trimmed lines of an already open reader.
pub fn lines<R: Read>(reader: R) -> Lines<BufReader<R>> {
    Lines::new(BufReader::new(reader))
}

/// Opens the file at `path` and returns its trimmed lines.
pub fn open(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| Error::Source {
        path: path.to_owned(),
        source,
    })?;
    Ok(lines(file))
}

// ---

/// A single-pass iterator over lines with leading and trailing whitespace removed.
///
/// The iterator owns its reader and drops it as soon as the end of input or the first
/// I/O error is reached, so the underlying handle is closed on every exit path, including
/// when the iterator itself is dropped before it is exhausted.
pub struct Lines<R> {
    reader: Option<R>,
    buf: String,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            buf: String::new(),
        }
    }
}

impl<R> Lines<R> {
    /// Returns `true` once the underlying reader has been released.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();
        match reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(Ok(self.buf.trim().to_owned())),
            Err(e) => {
                self.reader = None;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lines<R> {}

impl<R> fmt::Debug for Lines<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lines").field("closed", &self.is_closed()).finish()
    }
}

#[cfg(test)]
mod tests;
