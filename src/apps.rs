// std imports
use std::{
    collections::{BTreeMap, btree_map::Entry},
    fs,
    path::{Path, PathBuf},
};

// third-party imports
use walkdir::WalkDir;

// local imports
use crate::{appdirs::AppDirs, settings};

// ---

const DESKTOP_ENTRY_GROUP: &str = "[Desktop Entry]";
const DESKTOP_EXTENSION: &str = "desktop";

/// An installed application that can be started by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Display name as written in the desktop entry.
    pub name: String,
    /// Program to run, either a bare name looked up in `PATH` or a path.
    pub executable: String,
    /// Arguments passed to the executable, with field codes removed.
    pub args: Vec<String>,
    /// The desktop entry file the application was loaded from.
    pub path: PathBuf,
}

impl AppInfo {
    /// Parses a desktop entry.
    ///
    /// Returns `None` for entries that do not describe a launchable application:
    /// deleted (`Hidden=true`) entries, entries of a type other than `Application`,
    /// entries without `Name` or `Exec`, and, unless `include_hidden` is set,
    /// entries marked with `NoDisplay=true`.
    pub fn parse(path: &Path, content: &str, include_hidden: bool) -> Option<Self> {
        let entry = DesktopEntry::parse(content);

        if entry.hidden || (entry.no_display && !include_hidden) {
            return None;
        }
        if entry.kind.as_deref().is_some_and(|kind| kind != "Application") {
            return None;
        }

        let (executable, args) = command(&entry.exec?)?;

        Some(Self {
            name: entry.name?,
            executable,
            args,
            path: path.to_owned(),
        })
    }

    /// The key the application is registered under.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

// ---

/// Installed applications by lowercase display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDirectory {
    apps: BTreeMap<String, AppInfo>,
}

impl AppDirectory {
    /// Discovers applications installed on the host.
    ///
    /// Scans the standard locations followed by `settings.search_dirs`.
    #[cfg(target_os = "linux")]
    pub fn load(settings: &settings::Applications, dirs: Option<&AppDirs>) -> Self {
        let mut search = match dirs {
            Some(dirs) => dirs.application_dirs(),
            None => crate::appdirs::application_dirs(None),
        };
        search.extend(settings.search_dirs.iter().cloned());

        Self::scan(search, settings.include_hidden)
    }

    /// Discovers applications installed on the host.
    ///
    /// Application discovery is not supported on this platform, so the directory is empty.
    #[cfg(not(target_os = "linux"))]
    pub fn load(_settings: &settings::Applications, _dirs: Option<&AppDirs>) -> Self {
        log::debug!("application discovery is not supported on this platform");
        Self::default()
    }

    /// Loads desktop entries found in the given directories and their subdirectories.
    ///
    /// If several entries share a name, the first one found wins.
    /// Unreadable entries are skipped.
    pub fn scan<I, P>(dirs: I, include_hidden: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut result = Self::default();

        for dir in dirs {
            let dir = dir.as_ref();
            if !dir.is_dir() {
                continue;
            }
            log::debug!("scan {}", dir.display());

            let entries = WalkDir::new(dir)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| entry.path().extension().is_some_and(|ext| ext == DESKTOP_EXTENSION));

            for entry in entries {
                let content = match fs::read_to_string(entry.path()) {
                    Ok(content) => content,
                    Err(err) => {
                        log::debug!("skip {}: {}", entry.path().display(), err);
                        continue;
                    }
                };
                if let Some(app) = AppInfo::parse(entry.path(), &content, include_hidden) {
                    result.insert(app);
                }
            }
        }

        log::debug!("found {} applications", result.len());
        result
    }

    /// Adds an application unless one with the same name is already present.
    ///
    /// Returns `true` if the application was added.
    pub fn insert(&mut self, app: AppInfo) -> bool {
        match self.apps.entry(app.key()) {
            Entry::Vacant(entry) => {
                entry.insert(app);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Looks up an application by display name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&AppInfo> {
        self.apps.get(&name.to_lowercase())
    }

    /// Lowercase display names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppInfo)> {
        self.apps.iter().map(|(key, app)| (key.as_str(), app))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl FromIterator<AppInfo> for AppDirectory {
    fn from_iter<T: IntoIterator<Item = AppInfo>>(iter: T) -> Self {
        let mut result = Self::default();
        for app in iter {
            result.insert(app);
        }
        result
    }
}

// ---

#[derive(Default)]
struct DesktopEntry {
    name: Option<String>,
    exec: Option<String>,
    kind: Option<String>,
    hidden: bool,
    no_display: bool,
}

impl DesktopEntry {
    fn parse(content: &str) -> Self {
        let mut entry = Self::default();
        let mut in_group = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_group = line == DESKTOP_ENTRY_GROUP;
                continue;
            }
            if !in_group {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "Name" => entry.name = Some(unescape(value)),
                "Exec" => entry.exec = Some(unescape(value)),
                "Type" => entry.kind = Some(value.to_owned()),
                "Hidden" => entry.hidden = value == "true",
                "NoDisplay" => entry.no_display = value == "true",
                _ => {}
            }
        }

        entry
    }
}

/// Resolves escape sequences allowed in string values.
fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('s') => result.push(' '),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

/// Splits an `Exec` value into the executable and its arguments.
fn command(exec: &str) -> Option<(String, Vec<String>)> {
    let words = match shellwords::split(exec) {
        Ok(words) => words,
        Err(err) => {
            log::debug!("invalid command line {:?}: {}", exec, err);
            return None;
        }
    };
    let mut words = words.into_iter().filter_map(|word| strip_field_codes(&word));
    let executable = words.next()?;
    Some((executable, words.collect()))
}

/// Removes field codes such as `%f` or `%U` from a word, turning `%%` into `%`.
///
/// Returns `None` if nothing but field codes was in the word.
fn strip_field_codes(word: &str) -> Option<String> {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        if chars.next() == Some('%') {
            result.push('%');
        }
    }

    if result.is_empty() && !word.is_empty() {
        None
    } else {
        Some(result)
    }
}
