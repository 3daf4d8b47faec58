// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod logger;
pub mod project_config;

pub use app::App;
pub use app_config::AppConfig;
pub use logger::OutputLog;
pub use project_config::{DeployConfig, DeployPackage, DeployTarget};
