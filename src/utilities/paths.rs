// Path Utilities
// Workspace-rooted path resolution and comparison

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Result of converting a path into its workspace-relative form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativePath {
    /// Root-relative path with forward slashes and a leading `/`
    Relative(String),
    /// The path is outside the root, or the root is unusable
    NotApplicable,
}

impl RelativePath {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            RelativePath::Relative(p) => Some(p),
            RelativePath::NotApplicable => None,
        }
    }
}

/// Normalize a path by resolving . and .. components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // `..` never climbs above the root
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Replace Windows separators so both styles compare equal
pub fn unify_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Resolve `path` against `root` unless it is already absolute
pub fn to_absolute(path: &str, root: &Path) -> PathBuf {
    let path = unify_separators(path);
    let candidate = Path::new(&path);
    if candidate.is_absolute() {
        normalize_path(candidate)
    } else {
        normalize_path(&root.join(candidate))
    }
}

/// String key used to compare two resolved paths for equality
pub fn comparison_key(path: &Path) -> String {
    unify_separators(&normalize_path(path).to_string_lossy())
}

/// Whether `path` needs a root to become absolute
pub fn needs_root(path: &str) -> bool {
    !Path::new(&unify_separators(path)).is_absolute()
}

/// Convert an absolute path into a workspace-relative one.
///
/// Only applies when `root` exists, is a directory and is a prefix of
/// `path`. Filesystem failures while checking the root are logged and
/// reported as [`RelativePath::NotApplicable`].
pub fn to_relative(path: &str, root: Option<&Path>) -> RelativePath {
    let Some(root) = root else {
        return RelativePath::NotApplicable;
    };

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return RelativePath::NotApplicable,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return RelativePath::NotApplicable;
        }
        Err(e) => {
            tracing::warn!(root = %root.display(), error = %e, "could not inspect workspace root");
            return RelativePath::NotApplicable;
        }
    }

    let path = PathBuf::from(unify_separators(path));
    if !is_inside(&path, root) {
        return RelativePath::NotApplicable;
    }

    match normalize_path(&path).strip_prefix(normalize_path(root)) {
        Ok(rest) => RelativePath::Relative(format!("/{}", comparison_key(rest))),
        Err(_) => RelativePath::NotApplicable,
    }
}

/// Check if a path is inside a directory
pub fn is_inside(path: &Path, directory: &Path) -> bool {
    let path = normalize_path(path);
    let directory = normalize_path(directory);

    path.starts_with(&directory)
}
