//! Selection of eligible session files in an input directory

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Name-based eligibility predicate for session files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Substring identifying the sensor type, e.g. `OptoForce`.
    pub marker: String,
    /// Required file extension, with or without the leading dot.
    pub extension: String,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            marker: "OptoForce".to_owned(),
            extension: "npy".to_owned(),
        }
    }
}

impl FileFilter {
    /// Rejects an empty extension.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(AnalysisError::InvalidFileFilter {
                reason: "file extension must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_eligible(&self, file_name: &str) -> bool {
        let extension = self.extension.trim_start_matches('.');
        file_name.contains(&self.marker)
            && file_name
                .strip_suffix(extension)
                .is_some_and(|stem| stem.ends_with('.'))
    }
}

/// Lists the eligible regular files of `dir`.
///
/// Symbolic links are resolved; an entry whose metadata cannot be read fails
/// the whole discovery. Entries keep the order in which the filesystem
/// enumerates them unless `sort_by_name` is set.
pub fn discover(
    dir: &Path,
    filter: &FileFilter,
    sort_by_name: bool,
) -> Result<Vec<PathBuf>, AnalysisError> {
    filter.validate()?;
    let read_dir_error = |source| AnalysisError::ReadDirectory {
        path: dir.to_owned(),
        source,
    };

    let mut files = vec![];
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if !filter.is_eligible(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        let file_type = entry.file_type().map_err(read_dir_error)?;
        let is_file = if file_type.is_symlink() {
            fs::metadata(&path).map_err(read_dir_error)?.is_file()
        } else {
            file_type.is_file()
        };
        if is_file {
            files.push(path);
        }
    }

    if sort_by_name {
        files.sort();
    }
    Ok(files)
}
