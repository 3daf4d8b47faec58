// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use crate::operations::ExcludeMode;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for deploy-picker
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name shown in output log lines
    pub app_name: String,

    /// Deploy config file name, relative to the workspace root
    pub config_file: String,

    /// Exclude matching used when deploy.yaml does not choose one
    pub exclude_mode: ExcludeMode,

    /// Directory names pruned while scanning the workspace
    pub scan_skip_dirs: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let exclude_mode = compiled::EXCLUDE_MODE.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid compiled exclude mode, using default");
            ExcludeMode::default()
        });

        Self {
            app_name: compiled::APP_NAME.to_string(),
            config_file: compiled::CONFIG_FILE.to_string(),
            exclude_mode,
            scan_skip_dirs: compiled::SCAN_SKIP_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    pub fn skip_dirs(&self) -> Vec<&str> {
        self.scan_skip_dirs.iter().map(String::as_str).collect()
    }
}
