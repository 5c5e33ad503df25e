//! Directory listing for clip discovery.
//!
//! Only the top level of the input directory is scanned. Every regular file
//! is returned, whatever its name; deciding which names are clips is the
//! parser's job, so the caller can account for every file it was given.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Checks that `input_dir` exists and is a directory.
pub fn validate_input_dir(input_dir: &Path) -> CoreResult<()> {
    if !input_dir.exists() {
        return Err(CoreError::InvalidInputDirectory(format!(
            "{} does not exist",
            input_dir.display()
        )));
    }
    if !input_dir.is_dir() {
        return Err(CoreError::InvalidInputDirectory(format!(
            "{} is not a directory",
            input_dir.display()
        )));
    }
    Ok(())
}

/// Lists the regular files in the top level of `input_dir`, sorted by file name.
///
/// Directories and other non-file entries are skipped without error. Entries
/// that cannot be read are logged and skipped.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the regular files, possibly empty
/// * `Err(CoreError::InvalidInputDirectory)` - If the directory is missing or unreadable
///
/// # Examples
///
/// ```rust,no_run
/// use bwc_core::discovery::list_regular_files;
/// use std::path::Path;
///
/// let files = list_regular_files(Path::new("/path/to/clips")).unwrap();
/// println!("Found {} files", files.len());
/// ```
pub fn list_regular_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    validate_input_dir(input_dir)?;

    let read_dir = std::fs::read_dir(input_dir).map_err(|e| {
        CoreError::InvalidInputDirectory(format!(
            "cannot read {}: {}",
            input_dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    let mut errors = Vec::new();

    for entry_result in read_dir {
        match entry_result {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() {
                    files.push(path);
                } else {
                    log::trace!("Skipping non-file entry {}", path.display());
                }
            }
            Err(e) => errors.push(format!("Failed to read directory entry: {e}")),
        }
    }

    if !errors.is_empty() {
        log::warn!(
            "Errors during file discovery in {}: {}",
            input_dir.display(),
            errors.join(", ")
        );
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("Found {} regular file(s) in {}", files.len(), input_dir.display());
    Ok(files)
}
