//! Content root traversal.

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files under the content root recursively.
///
/// The list is sorted so repeated runs over unchanged input emit
/// byte-identical output regardless of directory enumeration order.
pub fn collect_content_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_recursive_and_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("post/foo")).unwrap();
        fs::write(root.join("zebra.html"), "").unwrap();
        fs::write(root.join("post/foo/bar.md"), "").unwrap();
        fs::write(root.join("about.html"), "").unwrap();
        fs::write(root.join(".DS_Store"), "").unwrap();

        let files = collect_content_files(root);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(files.len(), 3);
        assert!(names.iter().all(|n| n != ".DS_Store"));
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_collect_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = collect_content_files(&temp.path().join("nope"));
        assert!(files.is_empty());
    }
}
