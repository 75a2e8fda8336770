//! Recording discovery by directory traversal

use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every file anywhere under `root` whose name ends with the
/// configured extension. Traversal order is whatever the walker yields;
/// callers must not rely on it. Unreadable directory entries are skipped.
pub fn discover_recordings(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&config.extension))
        })
        .map(|entry| entry.into_path())
        .collect();

    tracing::debug!(
        "discovered {} {} files under {}",
        files.len(),
        config.extension,
        root.display()
    );

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_discover_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("session1").join("night2");
        fs::create_dir_all(&nested).unwrap();

        touch(&dir.path().join("a.edf"));
        touch(&nested.join("b.edf"));
        touch(&dir.path().join("notes.txt"));

        let found = discover_recordings(dir.path(), &ScanConfig::default());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.extension().unwrap() == "edf"));
    }

    #[test]
    fn test_discover_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("lower.edf"));
        touch(&dir.path().join("UPPER.EDF"));

        let found = discover_recordings(dir.path(), &ScanConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "lower.edf");
    }

    #[test]
    fn test_discover_empty_root() {
        let dir = TempDir::new().unwrap();
        let found = discover_recordings(dir.path(), &ScanConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_custom_extension() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.bdf"));
        touch(&dir.path().join("b.edf"));

        let config = ScanConfig::with_extension(".bdf");
        let found = discover_recordings(dir.path(), &config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "a.bdf");
    }
}
