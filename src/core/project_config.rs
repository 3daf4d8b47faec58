// Deploy Configuration
// Workspace-level settings that define packages and deployment targets

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::operations::{ExcludeMode, PackageFilterSpec};
use crate::utilities::strings::{normalize_string, scalar_to_string};

/// Workspace deploy configuration
/// Loaded from deploy.yaml at the workspace root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Packages of files that can be deployed
    #[serde(default)]
    pub packages: Vec<DeployPackage>,

    /// Destinations packages can be deployed to
    #[serde(default)]
    pub targets: Vec<DeployTarget>,

    /// How exclude entries are matched; the compiled default applies when unset
    #[serde(default)]
    pub exclude_mode: Option<ExcludeMode>,
}

/// A package definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployPackage {
    /// Package name shown in the picker
    pub name: Option<String>,

    /// Human-readable description
    pub description: Option<String>,

    /// Include entries; empty means every file
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub files: Vec<Option<String>>,

    /// Exclude entries
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub exclude: Vec<Option<String>>,

    /// Whether this package is offered in the picker
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A deployment target definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployTarget {
    /// Target name shown in the picker
    pub name: Option<String>,

    /// Target type (e.g., "sftp", "local", "ftp")
    #[serde(rename = "type")]
    pub target_type: Option<String>,

    /// Human-readable description
    pub description: Option<String>,
}

fn default_true() -> bool { true }

impl Default for DeployPackage {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            files: Vec::new(),
            exclude: Vec::new(),
            enabled: true,
        }
    }
}

/// Accept a list of loosely-typed scalars, a single scalar, or nothing
fn deserialize_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => items.iter().map(scalar_to_string).collect(),
        Some(other) => vec![scalar_to_string(&other)],
    })
}

impl DeployPackage {
    /// Include/exclude lists as consumed by the file filter
    pub fn filter_spec(&self) -> PackageFilterSpec {
        PackageFilterSpec::new(self.files.clone(), self.exclude.clone())
    }
}

impl DeployConfig {
    /// Load deploy configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read deploy config: {}", path.display()))?;

        Self::from_yaml(&content)
    }

    /// Parse deploy configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).context("Failed to parse deploy config YAML")
    }

    /// Load deploy configuration from a workspace root
    pub fn load_from_workspace(workspace_root: &Path, config_name: &str) -> Result<Self> {
        let config_path = workspace_root.join(config_name);
        Self::load(&config_path)
    }

    /// Get an enabled package by name, ignoring case and padding
    pub fn get_package(&self, name: &str) -> Option<&DeployPackage> {
        let wanted = normalize_string(Some(name));
        self.enabled_packages()
            .find(|p| normalize_string(p.name.as_deref()) == wanted)
    }

    /// Get all enabled packages
    pub fn enabled_packages(&self) -> impl Iterator<Item = &DeployPackage> {
        self.packages.iter().filter(|p| p.enabled)
    }

    /// Save deploy configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize deploy config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write deploy config: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
packages:
  - name: Site
    description: Web site
    files:
      - /ws/index.html
      - ~
      - ""
      - 42
    exclude: /ws/secret.txt
  - name: Old
    enabled: false
targets:
  - name: staging
    type: SFTP
exclude_mode: candidate
"#;

    #[test]
    fn test_parse_tolerates_loose_entries() {
        let config = DeployConfig::from_yaml(SAMPLE).unwrap();
        let site = &config.packages[0];

        assert_eq!(
            site.files,
            vec![Some("/ws/index.html".to_string()), None, None, Some("42".to_string())],
        );
        assert_eq!(site.exclude, vec![Some("/ws/secret.txt".to_string())]);
        assert!(site.enabled);
        assert!(!config.packages[1].enabled);
        assert!(config.packages[1].files.is_empty());
        assert_eq!(config.targets[0].target_type.as_deref(), Some("SFTP"));
        assert_eq!(config.exclude_mode, Some(ExcludeMode::Candidate));
    }

    #[test]
    fn test_get_package_skips_disabled() {
        let config = DeployConfig::from_yaml(SAMPLE).unwrap();
        assert!(config.get_package("  site ").is_some());
        assert!(config.get_package("old").is_none());
        assert_eq!(config.enabled_packages().count(), 1);
    }

    #[test]
    fn test_exclude_mode_ignores_case() {
        let config = DeployConfig::from_yaml("exclude_mode: Candidate\n").unwrap();
        assert_eq!(config.exclude_mode, Some(ExcludeMode::Candidate));

        let config = DeployConfig::from_yaml("exclude_mode: ' COMPATIBLE '\n").unwrap();
        assert_eq!(config.exclude_mode, Some(ExcludeMode::Compatible));

        let err = DeployConfig::from_yaml("exclude_mode: glob\n").unwrap_err();
        assert!(format!("{:#}", err).contains("unknown exclude mode 'glob'"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = DeployConfig::from_yaml("   \n").unwrap();
        assert!(config.packages.is_empty());
        assert!(config.exclude_mode.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeployConfig::from_yaml(SAMPLE).unwrap();
        config.save(&dir.path().join("deploy.yaml")).unwrap();

        let loaded = DeployConfig::load_from_workspace(dir.path(), "deploy.yaml").unwrap();
        assert_eq!(loaded.packages.len(), 2);
        assert_eq!(loaded.packages[0].files, config.packages[0].files);
        assert_eq!(loaded.exclude_mode, Some(ExcludeMode::Candidate));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeployConfig::load_from_workspace(dir.path(), "deploy.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read deploy config"));
    }
}
