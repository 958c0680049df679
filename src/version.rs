//! Memoized access to the version recorded in the drush.info file
//!
//! The info file is an ini-style `key=value` list with at least a
//! `drush_version` key in dotted `MAJOR.MINOR.PATCH` form. The file is
//! read at most once per process; major and minor segments are derived
//! from the memoized string on first use. A failed read or parse is
//! reported to the caller and NOT memoized, so a later call may retry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::VersionError;
use crate::infrastructure::FileSystem;

/// Key looked up in the info file.
const VERSION_KEY: &str = "drush_version";

/// Lazily-memoized version information for the running tool.
pub struct VersionInfo {
    info_path: PathBuf,
    fs: Arc<dyn FileSystem>,
    version: OnceCell<String>,
    major: OnceCell<String>,
    minor: OnceCell<String>,
}

impl VersionInfo {
    /// Create an accessor for the info file at `info_path`.
    ///
    /// Nothing is read until the first version query.
    pub fn new(info_path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            info_path: info_path.into(),
            fs,
            version: OnceCell::new(),
            major: OnceCell::new(),
            minor: OnceCell::new(),
        }
    }

    /// Full version string, e.g. `"9.3.1"`. Reads the info file on
    /// first call only.
    pub fn version(&self) -> Result<&str, VersionError> {
        self.version
            .get_or_try_init(|| self.read_info())
            .map(String::as_str)
    }

    /// First dot-separated segment of the version.
    pub fn major(&self) -> Result<&str, VersionError> {
        self.major
            .get_or_try_init(|| {
                let version = self.version()?;
                segment(version, 0).map(str::to_string)
            })
            .map(String::as_str)
    }

    /// Second dot-separated segment of the version.
    pub fn minor(&self) -> Result<&str, VersionError> {
        self.minor
            .get_or_try_init(|| {
                let version = self.version()?;
                segment(version, 1).map(str::to_string)
            })
            .map(String::as_str)
    }

    fn read_info(&self) -> Result<String, VersionError> {
        let content =
            self.fs
                .read_to_string(&self.info_path)
                .map_err(|source| VersionError::Io {
                    path: self.info_path.clone(),
                    source,
                })?;
        parse_info_value(&content, VERSION_KEY).ok_or_else(|| VersionError::MissingKey {
            path: self.info_path.clone(),
        })
    }
}

/// Extract `key` from ini-style content: `key = value` lines, `#`/`;`
/// comments and `[section]` headers skipped, surrounding quotes
/// stripped.
fn parse_info_value(content: &str, key: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') || line.starts_with('[')
        {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            if k.trim() == key {
                let v = v.trim().trim_matches('"').trim_matches('\'');
                return Some(v.to_string());
            }
        }
    }
    None
}

fn segment(version: &str, index: usize) -> Result<&str, VersionError> {
    version
        .split('.')
        .nth(index)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| VersionError::Malformed(version.to_string()))
}

/// Default info file location: `drush.info` next to the running binary.
pub fn default_info_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join("drush.info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_ini_content_when_parse_then_finds_key() {
        let content = "; generated\n[core]\ndrush_version = 9.3.1\nother=x\n";
        assert_eq!(
            parse_info_value(content, "drush_version"),
            Some("9.3.1".to_string())
        );
    }

    #[test]
    fn given_quoted_value_when_parse_then_strips_quotes() {
        let content = "drush_version=\"9.3.1\"\n";
        assert_eq!(
            parse_info_value(content, "drush_version"),
            Some("9.3.1".to_string())
        );
    }

    #[test]
    fn given_missing_key_when_parse_then_none() {
        assert_eq!(parse_info_value("foo=bar\n", "drush_version"), None);
    }

    #[test]
    fn given_single_segment_version_when_minor_segment_then_malformed() {
        let err = segment("9", 1).unwrap_err();
        assert!(matches!(err, VersionError::Malformed(v) if v == "9"));
    }
}
