// Operations module
// Package file filtering, workspace scanning and picker items

pub mod filter;
pub mod quick_pick;
pub mod scan;

pub use filter::{ExcludeMode, FilterError, PackageFileFilter, PackageFilterSpec, UnknownExcludeMode};
pub use quick_pick::QuickPickItem;
pub use scan::collect_files;
