//! Version accessor: memoization, derived segments, retry after failure

mod common;

use std::sync::Arc;

use common::CountingFileSystem;
use drush::{VersionError, VersionInfo};

const INFO_PATH: &str = "/opt/drush/drush.info";

fn info_with(content: &str) -> (Arc<CountingFileSystem>, VersionInfo) {
    let fs = Arc::new(CountingFileSystem::with_file(INFO_PATH, content));
    let info = VersionInfo::new(INFO_PATH, fs.clone());
    (fs, info)
}

#[test]
fn given_info_file_when_version_called_twice_then_read_only_once() {
    let (fs, info) = info_with("drush_version=9.3.1\n");

    assert_eq!(info.version().unwrap(), "9.3.1");
    assert_eq!(info.version().unwrap(), "9.3.1");

    assert_eq!(fs.read_count(), 1);
}

#[test]
fn given_version_9_3_1_when_major_minor_then_9_and_3() {
    let (fs, info) = info_with("drush_version=9.3.1\n");

    assert_eq!(info.major().unwrap(), "9");
    assert_eq!(info.minor().unwrap(), "3");
    // Segment derivation triggers exactly one underlying read
    assert_eq!(fs.read_count(), 1);
}

#[test]
fn given_major_called_first_when_version_then_consistent_with_segments() {
    let (_fs, info) = info_with("drush_version=12.5.3\n");

    // major() before version(): must trigger the read itself
    assert_eq!(info.major().unwrap(), "12");
    assert_eq!(info.version().unwrap(), "12.5.3");
}

#[test]
fn given_missing_file_when_version_then_error_and_retry_succeeds() {
    let fs = Arc::new(CountingFileSystem::new());
    let info = VersionInfo::new(INFO_PATH, fs.clone());

    // First read fails and must NOT be memoized
    assert!(matches!(info.version(), Err(VersionError::Io { .. })));

    // Info file appears later (e.g. installation completed)
    fs.add_file(INFO_PATH, "drush_version=9.3.1\n");
    assert_eq!(info.version().unwrap(), "9.3.1");
    assert_eq!(fs.read_count(), 2);
}

#[test]
fn given_info_without_version_key_when_version_then_missing_key_error() {
    let (_fs, info) = info_with("name=drush\n");

    assert!(matches!(info.version(), Err(VersionError::MissingKey { .. })));
}

#[test]
fn given_single_segment_version_when_minor_then_malformed_error() {
    let (_fs, info) = info_with("drush_version=9\n");

    assert_eq!(info.major().unwrap(), "9");
    assert!(matches!(info.minor(), Err(VersionError::Malformed(_))));
}

#[test]
fn given_commented_ini_when_version_then_comments_skipped() {
    let content = "; drush info\n# build metadata\n[core]\ndrush_version = \"9.3.1\"\n";
    let (_fs, info) = info_with(content);

    assert_eq!(info.version().unwrap(), "9.3.1");
}
