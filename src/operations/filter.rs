// Package File Filter
// Decides which candidate files belong to a deploy package

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::core::DeployPackage;
use crate::utilities::paths::{comparison_key, needs_root, to_absolute};
use crate::utilities::strings::non_empty_trimmed;

/// Errors raised while filtering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("workspace root is required to resolve relative path '{path}'")]
    MissingRoot { path: String },

    #[error("workspace root '{root}' is not an absolute path")]
    RelativeRoot { root: String },
}

/// An exclude mode name that is neither `compatible` nor `candidate`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown exclude mode '{0}' (expected 'compatible' or 'candidate')")]
pub struct UnknownExcludeMode(pub String);

/// What an exclude entry is compared against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExcludeMode {
    /// Against the include entry the file matched
    #[default]
    Compatible,
    /// Against the file's own resolved path
    Candidate,
}

impl FromStr for ExcludeMode {
    type Err = UnknownExcludeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compatible" => Ok(Self::Compatible),
            "candidate" => Ok(Self::Candidate),
            other => Err(UnknownExcludeMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for ExcludeMode {
    type Error = UnknownExcludeMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Include and exclude entries of one package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilterSpec {
    pub includes: Vec<Option<String>>,
    pub excludes: Vec<Option<String>>,
}

impl PackageFilterSpec {
    pub fn new(includes: Vec<Option<String>>, excludes: Vec<Option<String>>) -> Self {
        Self { includes, excludes }
    }

    /// Build a spec from plain strings
    pub fn from_strs(includes: &[&str], excludes: &[&str]) -> Self {
        fn owned(entries: &[&str]) -> Vec<Option<String>> {
            entries.iter().map(|e| Some(e.to_string())).collect()
        }
        Self::new(owned(includes), owned(excludes))
    }
}

/// Filters candidate files against a package's include/exclude entries.
///
/// Entries are exact paths, not globs. Relative entries and candidates are
/// resolved against the workspace root before comparing; separators and
/// `.`/`..` segments are normalized so that equal paths compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageFileFilter {
    mode: ExcludeMode,
}

impl PackageFileFilter {
    pub fn new(mode: ExcludeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ExcludeMode {
        self.mode
    }

    /// Return the files of `all_files` that the package accepts, in their
    /// original order.
    ///
    /// With no usable include entries every file is returned unchanged and
    /// the excludes are ignored. Otherwise a file is kept when it equals the
    /// first matching include and no exclude matches.
    pub fn filter<S: AsRef<str>>(
        &self,
        all_files: &[S],
        spec: &PackageFilterSpec,
        root: Option<&Path>,
    ) -> Result<Vec<String>, FilterError> {
        let includes = normalize_entries(&spec.includes);
        let excludes = normalize_entries(&spec.excludes);

        if includes.is_empty() {
            return Ok(all_files.iter().map(|f| f.as_ref().to_string()).collect());
        }

        let includes = resolve_all(&includes, root)?;
        let excludes = resolve_all(&excludes, root)?;

        let mut kept = Vec::new();
        for file in all_files {
            let file = file.as_ref();
            if file.is_empty() {
                continue;
            }

            // Padding is part of the file name
            let key = resolve(file, root)?;

            let Some(matched) = includes.iter().find(|include| **include == key) else {
                continue;
            };

            let against = match self.mode {
                ExcludeMode::Compatible => matched,
                ExcludeMode::Candidate => &key,
            };
            if excludes.iter().any(|exclude| exclude == against) {
                continue;
            }

            kept.push(file.to_string());
        }

        tracing::debug!(
            candidates = all_files.len(),
            kept = kept.len(),
            includes = includes.len(),
            excludes = excludes.len(),
            mode = ?self.mode,
            "filtered package files"
        );

        Ok(kept)
    }

    /// Filter using the entries of a configured package
    pub fn filter_package<S: AsRef<str>>(
        &self,
        all_files: &[S],
        package: &DeployPackage,
        root: Option<&Path>,
    ) -> Result<Vec<String>, FilterError> {
        self.filter(all_files, &package.filter_spec(), root)
    }
}

fn normalize_entries(entries: &[Option<String>]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|e| non_empty_trimmed(e.as_deref()))
        .collect()
}

fn resolve_all(entries: &[String], root: Option<&Path>) -> Result<Vec<String>, FilterError> {
    entries.iter().map(|e| resolve(e, root)).collect()
}

/// Comparison key of `path`, failing when a root is needed but unusable
fn resolve(path: &str, root: Option<&Path>) -> Result<String, FilterError> {
    if !needs_root(path) {
        return Ok(comparison_key(&to_absolute(path, Path::new("/"))));
    }

    let root = root.ok_or_else(|| FilterError::MissingRoot { path: path.to_string() })?;
    if !root.is_absolute() {
        return Err(FilterError::RelativeRoot { root: root.display().to_string() });
    }

    Ok(comparison_key(&to_absolute(path, root)))
}
