// Deploy Picker Library
// Package file filtering and picker items for deployment targets

// Core infrastructure - configuration, application state and logging
pub mod core;

// Operations - filtering, workspace scanning and picker items
pub mod operations;

// Utilities - path and string helpers
pub mod utilities;

// Re-export commonly used items for convenience
pub use core::{App, AppConfig, DeployConfig, DeployPackage, DeployTarget, OutputLog};
pub use operations::{
    ExcludeMode, FilterError, PackageFileFilter, PackageFilterSpec, QuickPickItem, UnknownExcludeMode,
};
