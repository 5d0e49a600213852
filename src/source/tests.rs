use super::*;

use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use assert_matches::assert_matches;

/// A reader that raises a flag when it is dropped.
struct Tracked<R> {
    inner: R,
    closed: Arc<AtomicBool>,
}

impl<R> Tracked<R> {
    fn new(inner: R) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        (
            Self {
                inner,
                closed: closed.clone(),
            },
            closed,
        )
    }
}

impl<R: Read> Read for Tracked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for Tracked<R> {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// A reader that yields its data and then fails.
struct Failing(Option<&'static [u8]>);

impl Read for Failing {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.take() {
            Some(data) => {
                buf[..data.len()].copy_from_slice(data);
                Ok(data.len())
            }
            None => Err(io::Error::other("broken")),
        }
    }
}

#[test]
fn test_lines() {
    let items = lines(Cursor::new(" one \n\ttwo\r\n\nthree"))
        .collect::<io::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(items, vec!["one", "two", "", "three"]);
}

#[test]
fn test_lines_empty() {
    let mut iter = lines(Cursor::new(""));
    assert!(iter.next().is_none());
    assert!(iter.is_closed());
}

#[test]
fn test_lines_closed_at_end() {
    let (reader, closed) = Tracked::new(Cursor::new("a\nb\n"));
    let mut iter = lines(reader);
    assert_eq!(iter.next().unwrap().unwrap(), "a");
    assert_eq!(iter.next().unwrap().unwrap(), "b");
    assert!(!closed.load(Ordering::SeqCst));
    assert!(iter.next().is_none());
    assert!(closed.load(Ordering::SeqCst));
    assert!(iter.next().is_none());
}

#[test]
fn test_lines_closed_when_abandoned() {
    let (reader, closed) = Tracked::new(Cursor::new("a\nb\nc\n"));
    for line in lines(reader) {
        if line.unwrap() == "b" {
            break;
        }
    }
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_lines_closed_on_error() {
    let (reader, closed) = Tracked::new(Failing(Some(b"ok\n")));
    let mut iter = lines(reader);
    assert_eq!(iter.next().unwrap().unwrap(), "ok");
    assert_matches!(iter.next(), Some(Err(e)) if e.to_string() == "broken");
    assert!(closed.load(Ordering::SeqCst));
    assert!(iter.is_closed());
    assert!(iter.next().is_none());
}

#[test]
fn test_lines_invalid_utf8() {
    let mut iter = lines(Cursor::new(b"\xff\xfe\n".to_vec()));
    assert_matches!(iter.next(), Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData);
    assert!(iter.next().is_none());
}

#[test]
fn test_open() {
    let items = open(Path::new("sample/patterns.txt"))
        .unwrap()
        .collect::<io::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(items, vec!["fire*fox", "a??b", "", "a?*b", "café*", "x#y"]);
}

#[test]
fn test_open_not_found() {
    let result = open(Path::new("sample/no-such-file.txt"));
    assert_matches!(result, Err(Error::Source { path, source }) => {
        assert_eq!(path, PathBuf::from("sample/no-such-file.txt"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    });
}

#[test]
fn test_source() {
    assert_eq!(Source::from(PathBuf::from("-")), Source::Stdin);
    assert_eq!(Source::Stdin.description(), "<stdin>");

    let source = Source::from(PathBuf::from("sample/patterns.txt"));
    assert_eq!(source, Source::File(PathBuf::from("sample/patterns.txt")));
    assert_eq!(
        source.description(),
        "file \u{1b}[33m\"sample/patterns.txt\"\u{1b}[0m"
    );

    let items = source.open().unwrap().take(2).collect::<io::Result<Vec<_>>>().unwrap();
    assert_eq!(items, vec!["fire*fox", "a??b"]);
}

#[test]
fn test_source_open_not_found() {
    let source = Source::File(PathBuf::from("sample/no-such-file.txt"));
    assert_matches!(source.open(), Err(Error::Source { .. }));
}

#[test]
fn test_source_error() {
    let err = Source::Stdin.error(io::Error::other("broken"));
    assert_matches!(err, Error::Io(_));

    let source = Source::File(PathBuf::from("a.txt"));
    assert_eq!(source.path(), Some(Path::new("a.txt")));
    assert_matches!(source.error(io::Error::other("broken")), Error::Source { path, .. } if path == Path::new("a.txt"));
    assert_eq!(Source::Stdin.path(), None);
}

#[test]
fn test_lines_debug() {
    let mut iter = lines(Cursor::new("a\n"));
    assert_eq!(format!("{:?}", iter), "Lines { closed: false }");
    assert_eq!(iter.by_ref().count(), 1);
    assert_eq!(format!("{:?}", iter), "Lines { closed: true }");
}
