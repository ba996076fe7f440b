use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::constants::PACKAGE_KEYWORD;
use crate::error::{Error, Result};

/// Outcome of [`create_package_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCreation {
    Created,
    AlreadyExists,
}

/// Creates a directory and all missing ancestors. An existing directory is not an error.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::CreateDirectoryError {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Checks whether anything (regular file, directory, symlink, dangling or not) sits at `path`.
///
/// Symlinks are not followed. Only a `NotFound` answer counts as absent; any
/// other failure to inspect the path is treated as an existing entry.
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match std::fs::symlink_metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            log::debug!("Cannot inspect '{}', treating it as existing: {e}", path.display());
            true
        }
    }
}

/// Renders the single line written into every new file.
pub fn package_line(package: &str) -> String {
    format!("{PACKAGE_KEYWORD} {package}\n")
}

/// Creates `dest_path` exclusively and writes the package declaration into it.
///
/// An existing file is never truncated: if something appears at `dest_path`
/// the call reports [`FileCreation::AlreadyExists`] and leaves it alone.
pub fn create_package_file<P: AsRef<Path>>(
    dest_path: P,
    package: &str,
) -> Result<FileCreation> {
    let dest_path = dest_path.as_ref();
    let wrap =
        |source| Error::CreateFileError { path: dest_path.display().to_string(), source };

    let opened = OpenOptions::new().read(true).write(true).create_new(true).open(dest_path);
    let mut file = match opened {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(FileCreation::AlreadyExists);
        }
        Err(e) => return Err(wrap(e)),
    };

    file.write_all(package_line(package).as_bytes()).map_err(wrap)?;
    Ok(FileCreation::Created)
}
