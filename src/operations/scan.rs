// Workspace Scan
// Enumerates candidate files for package filtering

use anyhow::{Context, Result};
use std::path::Path;

/// Collect absolute paths of every file under `root`.
///
/// Directories whose name equals one of `skip_dirs` are pruned. Names are
/// compared exactly; there is no pattern matching. Unreadable entries are
/// logged and skipped.
pub fn collect_files(root: &Path, skip_dirs: &[&str]) -> Result<Vec<String>> {
    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read current directory")?
            .join(root)
    };

    if !root.is_dir() {
        anyhow::bail!("Workspace root is not a directory: {}", root.display());
    }

    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !skip_dirs.iter().any(|d| e.file_name() == *d)
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.path().to_string_lossy().into_owned());
        }
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "scanned workspace");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_prunes_skip_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("src").join("main.js"), "").unwrap();
        fs::write(root.join(".git").join("HEAD"), "").unwrap();
        fs::write(root.join("index.html"), "").unwrap();

        let files = collect_files(root, &[".git"]).unwrap();

        let expected: Vec<String> = vec![
            root.join("index.html").to_string_lossy().into_owned(),
            root.join("src").join("main.js").to_string_lossy().into_owned(),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(&dir.path().join("nope"), &[]).is_err());
    }
}
