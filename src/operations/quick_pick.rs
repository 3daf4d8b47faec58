// Quick Pick Items
// Display entries for the file, package and target pickers

use std::path::Path;

use crate::core::{DeployPackage, DeployTarget};
use crate::utilities::paths::to_relative;
use crate::utilities::strings::{non_empty_trimmed, normalize_string};

/// One selectable entry in a picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickPickItem {
    pub label: String,
    pub description: String,
    pub detail: Option<String>,
}

/// Item for a single file: its name, described by the workspace-relative
/// path (or the absolute path when no relative form exists)
pub fn file_item(path: &str, root: Option<&Path>) -> QuickPickItem {
    let label = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let description = to_relative(path, root)
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string());

    QuickPickItem {
        label,
        description,
        detail: None,
    }
}

pub fn package_item(index: usize, package: &DeployPackage) -> QuickPickItem {
    QuickPickItem {
        label: non_empty_trimmed(package.name.as_deref())
            .unwrap_or_else(|| format!("Package #{}", index + 1)),
        description: non_empty_trimmed(package.description.as_deref()).unwrap_or_default(),
        detail: None,
    }
}

pub fn target_item(index: usize, target: &DeployTarget) -> QuickPickItem {
    let target_type = normalize_string(target.target_type.as_deref());

    QuickPickItem {
        label: non_empty_trimmed(target.name.as_deref())
            .unwrap_or_else(|| format!("Target #{}", index + 1)),
        description: non_empty_trimmed(target.description.as_deref()).unwrap_or_default(),
        detail: (!target_type.is_empty()).then(|| format!("({})", target_type)),
    }
}

pub fn file_items<S: AsRef<str>>(files: &[S], root: Option<&Path>) -> Vec<QuickPickItem> {
    files.iter().map(|f| file_item(f.as_ref(), root)).collect()
}

/// Items for enabled packages; numbering follows the configured position
pub fn package_items(packages: &[DeployPackage]) -> Vec<QuickPickItem> {
    packages
        .iter()
        .enumerate()
        .filter(|(_, p)| p.enabled)
        .map(|(i, p)| package_item(i, p))
        .collect()
}

pub fn target_items(targets: &[DeployTarget]) -> Vec<QuickPickItem> {
    targets
        .iter()
        .enumerate()
        .map(|(i, t)| target_item(i, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_item_uses_relative_description() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("web").join("index.html");
        let item = file_item(&file.to_string_lossy(), Some(dir.path()));

        assert_eq!(item.label, "index.html");
        assert_eq!(item.description, "/web/index.html");
    }

    #[test]
    fn test_file_item_falls_back_to_absolute() {
        let item = file_item("/elsewhere/a.txt", None);
        assert_eq!(item.label, "a.txt");
        assert_eq!(item.description, "/elsewhere/a.txt");
    }

    #[test]
    fn test_unnamed_entries_are_numbered() {
        let packages = vec![
            DeployPackage { name: Some("  Site ".into()), enabled: true, ..Default::default() },
            DeployPackage { enabled: false, ..Default::default() },
            DeployPackage { name: Some("".into()), enabled: true, ..Default::default() },
        ];
        let labels: Vec<_> = package_items(&packages).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Site", "Package #3"]);
    }

    #[test]
    fn test_target_item_detail() {
        let target = DeployTarget {
            name: None,
            target_type: Some(" SFTP ".into()),
            description: Some("Staging".into()),
        };
        let item = target_item(0, &target);
        assert_eq!(item.label, "Target #1");
        assert_eq!(item.description, "Staging");
        assert_eq!(item.detail.as_deref(), Some("(sftp)"));

        let bare = target_item(1, &DeployTarget::default());
        assert_eq!(bare.detail, None);
    }
}
