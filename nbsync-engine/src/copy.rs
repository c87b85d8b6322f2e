//! Recursive tree copy that skips hidden entries.

use std::path::Path;

use crate::error::{io_err, SyncError};

/// Copy the file tree rooted at `src` to `dst`, creating `dst` if needed.
///
/// Entries whose names start with a dot are skipped at every level, so
/// `.git`, `.ipynb_checkpoints` and the like never land in the destination.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), SyncError> {
    std::fs::create_dir_all(dst).map_err(|e| io_err(dst, e))?;

    for entry in std::fs::read_dir(src).map_err(|e| io_err(src, e))? {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let from = entry.path();
        let to = dst.join(&name);
        let file_type = entry.file_type().map_err(|e| io_err(&from, e))?;
        if file_type.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(|e| io_err(&from, e))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn copies_nested_tree_verbatim() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("src");
        let dst = root.path().join("dst");
        write(&src.join("a.png"), "a");
        write(&src.join("nested/deep/b.csv"), "b");

        copy_tree(&src, &dst).expect("copy");

        assert_eq!(fs::read_to_string(dst.join("a.png")).unwrap(), "a");
        assert_eq!(
            fs::read_to_string(dst.join("nested/deep/b.csv")).unwrap(),
            "b"
        );
    }

    #[test]
    fn skips_hidden_entries_at_every_level() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("src");
        let dst = root.path().join("dst");
        write(&src.join(".DS_Store"), "x");
        write(&src.join(".ipynb_checkpoints/post-checkpoint.ipynb"), "x");
        write(&src.join("nested/.hidden"), "x");
        write(&src.join("nested/visible.txt"), "ok");

        copy_tree(&src, &dst).expect("copy");

        assert!(!dst.join(".DS_Store").exists());
        assert!(!dst.join(".ipynb_checkpoints").exists());
        assert!(!dst.join("nested/.hidden").exists());
        assert!(dst.join("nested/visible.txt").exists());
    }

    #[test]
    fn creates_destination_when_source_is_empty() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("src");
        let dst = root.path().join("dst");
        fs::create_dir_all(&src).unwrap();

        copy_tree(&src, &dst).expect("copy");
        assert!(dst.is_dir());
        assert!(fs::read_dir(&dst).unwrap().next().is_none());
    }

    #[test]
    fn missing_source_reports_annotated_path() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("nope");
        let dst = root.path().join("dst");

        let err = copy_tree(&src, &dst).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
        assert!(err.to_string().contains("nope"));
    }
}
