// Utilities module
// Helper functions and tools

pub mod paths;
pub mod strings;

pub use paths::{comparison_key, normalize_path, to_absolute, to_relative, RelativePath};
pub use strings::{normalize_string, to_string_or, to_string_safe};
