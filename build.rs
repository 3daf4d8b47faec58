// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Fall back to hardcoded defaults if config.yaml is missing
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const APP_NAME: &str = {app_name:?};
pub const CONFIG_FILE: &str = {config_file:?};
pub const TIMESTAMP_FORMAT: &str = {timestamp_format:?};

pub const EXCLUDE_MODE: &str = {exclude_mode:?};

pub const SCAN_SKIP_DIRS: &[&str] = &[
{skip_dirs}
];
"#,
        app_name = config.app_name,
        config_file = config.config_file,
        timestamp_format = config.timestamp_format,
        exclude_mode = config.exclude_mode,
        skip_dirs = config.scan_skip_dirs
            .iter()
            .map(|d| format!("    {:?},", d))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    app_name: String,
    config_file: String,
    timestamp_format: String,
    exclude_mode: String,
    scan_skip_dirs: Vec<String>,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            app_name: "vs-deploy".to_string(),
            config_file: "deploy.yaml".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            exclude_mode: "compatible".to_string(),
            scan_skip_dirs: vec![
                ".git".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_application = false;
    let mut in_defaults = false;
    let mut in_skip_dirs = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("application:") {
            in_application = true;
            in_defaults = false;
            in_skip_dirs = false;
            continue;
        } else if trimmed.starts_with("defaults:") {
            in_application = false;
            in_defaults = true;
            in_skip_dirs = false;
            continue;
        } else if trimmed.starts_with("scan_skip_dirs:") {
            in_application = false;
            in_defaults = false;
            in_skip_dirs = true;
            config.scan_skip_dirs.clear();
            continue;
        }

        if in_skip_dirs {
            if let Some(item) = trimmed.strip_prefix("- ") {
                config.scan_skip_dirs.push(unquote(item).to_string());
                continue;
            }
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                in_skip_dirs = false;
            }
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            let value = unquote(value).to_string();
            if in_application {
                match key {
                    "app_name" => config.app_name = value,
                    "config_file" => config.config_file = value,
                    "timestamp_format" => config.timestamp_format = value,
                    _ => {}
                }
            } else if in_defaults && key == "exclude_mode" {
                config.exclude_mode = value;
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Inline comments need a leading space
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
