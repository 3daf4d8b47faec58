// Application State
// Ties the workspace root, deploy config, scanner and filter together

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{AppConfig, DeployConfig, DeployPackage, OutputLog};
use crate::operations::{collect_files, ExcludeMode, PackageFileFilter};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Deploy configuration (loaded from deploy.yaml)
    pub deploy_config: DeployConfig,

    /// Workspace root path
    pub workspace_root: PathBuf,

    /// Candidate files found under the workspace root
    pub files: Vec<String>,

    pub log: OutputLog,
}

impl App {
    /// Create a new application instance.
    ///
    /// Without an explicit root the workspace is detected from the
    /// environment and current directory.
    pub fn new(workspace_root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let config = AppConfig::default();

        let workspace_root = match workspace_root {
            Some(root) => root,
            None => Self::detect_workspace_root(&config.config_file)?,
        };
        let workspace_root = Self::absolute(&workspace_root)?;

        let config_path = config_path.unwrap_or_else(|| workspace_root.join(&config.config_file));
        let deploy_config = if config_path.exists() {
            DeployConfig::load(&config_path)?
        } else {
            tracing::info!(path = %config_path.display(), "no deploy config found, using empty config");
            DeployConfig::default()
        };

        let files = collect_files(&workspace_root, &config.skip_dirs())?;
        let log = OutputLog::stderr();

        Ok(Self {
            config,
            deploy_config,
            workspace_root,
            files,
            log,
        })
    }

    /// Detect the workspace root directory
    fn detect_workspace_root(config_file: &str) -> Result<PathBuf> {
        // First try environment variable
        if let Ok(path) = std::env::var("DEPLOY_WORKSPACE") {
            let path = PathBuf::from(path);
            if path.is_dir() {
                return Ok(path);
            }
        }

        let cwd = std::env::current_dir().context("Failed to read current directory")?;

        // Walk up looking for the deploy config
        let mut current = Some(cwd.as_path());
        while let Some(dir) = current {
            if dir.join(config_file).exists() {
                return Ok(dir.to_path_buf());
            }
            current = dir.parent();
        }

        Ok(cwd)
    }

    fn absolute(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(crate::utilities::normalize_path(&cwd.join(path)))
    }

    /// Exclude matching in effect: deploy.yaml wins over the compiled default
    pub fn exclude_mode(&self) -> ExcludeMode {
        self.deploy_config.exclude_mode.unwrap_or(self.config.exclude_mode)
    }

    pub fn filter(&self) -> PackageFileFilter {
        PackageFileFilter::new(self.exclude_mode())
    }

    pub fn package(&self, name: &str) -> Option<&DeployPackage> {
        self.deploy_config.get_package(name)
    }

    /// Files of the workspace that belong to the named package
    pub fn package_files(&self, name: &str) -> Result<Vec<String>> {
        self.package_files_with(name, self.filter())
    }

    pub fn package_files_with(&self, name: &str, filter: PackageFileFilter) -> Result<Vec<String>> {
        let package = self
            .package(name)
            .with_context(|| format!("Package not found or disabled: {}", name))?;

        let files = filter
            .filter_package(&self.files, package, Some(&self.workspace_root))
            .with_context(|| format!("Failed to filter files of package: {}", name))?;

        self.log.log(format!(
            "Package '{}': {} of {} file(s) selected",
            name.trim(),
            files.len(),
            self.files.len()
        ));

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web").join("index.html"), "").unwrap();
        fs::write(root.join("web").join("secret.txt"), "").unwrap();
        fs::write(root.join("notes.md"), "").unwrap();
        fs::write(
            root.join("deploy.yaml"),
            "packages:\n  - name: Web\n    files:\n      - web/index.html\n      - web\\secret.txt\n    exclude:\n      - web/secret.txt\n  - name: All\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_package_files() {
        let dir = workspace();
        let app = App::new(Some(dir.path().to_path_buf()), None).unwrap();

        let web = app.package_files("web").unwrap();
        assert_eq!(web, vec![dir.path().join("web").join("index.html").to_string_lossy().into_owned()]);

        let all = app.package_files("All").unwrap();
        assert_eq!(all, app.files);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_unknown_package_is_error() {
        let dir = workspace();
        let app = App::new(Some(dir.path().to_path_buf()), None).unwrap();
        assert!(app.package_files("missing").is_err());
    }

    #[test]
    fn test_missing_config_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Some(dir.path().to_path_buf()), None).unwrap();
        assert!(app.deploy_config.packages.is_empty());
        assert_eq!(app.exclude_mode(), app.config.exclude_mode);
        assert_eq!(app.log.app_name(), app.config.app_name);
    }
}
