//! Stack set discovery over a template directory.
//!
//! A stack set is announced by a template file (`<name>.template` by default).
//! Two optional sibling files refine how it deploys:
//! - `<name>.global` — existence alone flags the stack set as global
//! - `<name>.blacklist` — accounts and regions excluded from deployment

use crate::error::{Result, SspadError};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

static ACCOUNT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static IGNORED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(#.*)?$").unwrap());

/// File name suffixes the discovery convention is built on.
///
/// Immutable once built; thread a value through [`find_all`] /
/// [`StackSet::from_path`] instead of mutating shared defaults.
#[derive(Debug, Clone)]
pub struct Suffixes {
    /// Suffix identifying template files.
    pub template: String,
    /// Suffix of the marker file flagging a stack set as global.
    pub global: String,
    /// Suffix of the per-stack blacklist file.
    pub blacklist: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            template: ".template".to_string(),
            global: ".global".to_string(),
            blacklist: ".blacklist".to_string(),
        }
    }
}

impl Suffixes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, suffix: impl Into<String>) -> Self {
        self.template = suffix.into();
        self
    }

    pub fn with_global(mut self, suffix: impl Into<String>) -> Self {
        self.global = suffix.into();
        self
    }

    pub fn with_blacklist(mut self, suffix: impl Into<String>) -> Self {
        self.blacklist = suffix.into();
        self
    }
}

/// One deployable stack set and its deployment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackSet {
    /// Path to the template file.
    pub path: PathBuf,
    /// Template path without its suffix; sibling marker files hang off this.
    pub prefix: PathBuf,
    /// Base name of the stack set, unique within a directory for a given suffix.
    pub name: String,
    /// True iff the global marker file exists next to the template.
    pub is_global: bool,
    /// Account ids excluded from deployment, in blacklist file order.
    pub account_blacklist: Vec<String>,
    /// Region names or region regexes excluded from deployment, in file order.
    /// Stored unvalidated; the deployment layer decides literal vs regex.
    pub region_blacklist: Vec<String>,
}

impl StackSet {
    /// Build a StackSet from a template path.
    ///
    /// Reads the filesystem at call time: the global marker is an existence
    /// check, and the blacklist file is parsed line by line if present.
    /// Missing marker or blacklist files are not errors.
    pub fn from_path(path: &Path, suffixes: &Suffixes) -> Result<Self> {
        let prefix = strip_template_suffix(path, &suffixes.template);
        let name = prefix
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let is_global = sibling(&prefix, &suffixes.global).exists();

        let blacklist_path = sibling(&prefix, &suffixes.blacklist);
        let (account_blacklist, region_blacklist) = if blacklist_path.exists() {
            let content =
                fs::read_to_string(&blacklist_path).map_err(|e| SspadError::ReadFile {
                    path: blacklist_path.display().to_string(),
                    source: e,
                })?;
            parse_blacklist(&content)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Self {
            path: path.to_path_buf(),
            prefix,
            name,
            is_global,
            account_blacklist,
            region_blacklist,
        })
    }
}

/// Append a suffix to the prefix path (`dir/name` + `.global` -> `dir/name.global`).
fn sibling(prefix: &Path, suffix: &str) -> PathBuf {
    let mut os = prefix.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Strip the template suffix from a path, falling back to dropping the last
/// extension when the file name does not carry the suffix.
fn strip_template_suffix(path: &Path, template_suffix: &str) -> PathBuf {
    if let Some(stem) = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(template_suffix))
    {
        return path.with_file_name(stem);
    }
    path.with_extension("")
}

/// Classify blacklist lines into (accounts, regions).
///
/// Blank and `#`-comment lines are skipped. After trimming, an all-digit line
/// is an account id; anything else is a region name or region regex. There is
/// no rejection path: a typo'd account id with stray characters silently lands
/// in the region list.
fn parse_blacklist(content: &str) -> (Vec<String>, Vec<String>) {
    let mut accounts = Vec::new();
    let mut regions = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if IGNORED_LINE.is_match(line) {
            continue;
        }
        if ACCOUNT_ID.is_match(line) {
            accounts.push(line.to_string());
        } else {
            regions.push(line.to_string());
        }
    }

    (accounts, regions)
}

/// Scan a directory for stack set templates.
///
/// Non-recursive. Returns a lazy iterator over the matches; each call re-scans,
/// so results reflect the filesystem at call time. Zero matches is an empty
/// iterator, not an error. A missing or non-directory path is an error.
pub fn find_all(dir: &Path, suffixes: &Suffixes) -> Result<Discovery> {
    if !dir.exists() {
        return Err(SspadError::DirNotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(SspadError::NotADirectory(dir.display().to_string()));
    }

    debug!(dir = %dir.display(), suffix = %suffixes.template, "Searching for stack set templates");

    Ok(Discovery {
        dir: dir.to_path_buf(),
        walker: WalkDir::new(dir).min_depth(1).max_depth(1).into_iter(),
        suffixes: suffixes.clone(),
        found_global: 0,
        found_regional: 0,
        exhausted: false,
    })
}

/// Lazy, finite, non-restartable sequence of discovered stack sets.
///
/// Logs a global/regional tally once the directory is exhausted.
pub struct Discovery {
    dir: PathBuf,
    walker: walkdir::IntoIter,
    suffixes: Suffixes,
    found_global: usize,
    found_regional: usize,
    exhausted: bool,
}

impl Iterator for Discovery {
    type Item = Result<StackSet>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    return Some(Err(SspadError::ReadDir {
                        path: self.dir.display().to_string(),
                        source: e,
                    }));
                }
                None => {
                    if !self.exhausted {
                        self.exhausted = true;
                        debug!(
                            global = self.found_global,
                            regional = self.found_regional,
                            "Stack set discovery finished"
                        );
                    }
                    return None;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&self.suffixes.template));
            if !matches {
                continue;
            }

            let item = StackSet::from_path(entry.path(), &self.suffixes);
            if let Ok(ref stack_set) = item {
                if stack_set.is_global {
                    self.found_global += 1;
                } else {
                    self.found_regional += 1;
                }
            }
            return Some(item);
        }
    }
}
