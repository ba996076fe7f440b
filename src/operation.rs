use std::path::PathBuf;

use crate::constants::DRY_RUN_PREFIX;

/// A single filesystem action planned by the Toucher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchOperation {
    CreateDirectory { target: PathBuf },
    CreateFile { target: PathBuf, package: String },
    SkipExisting { target: PathBuf },
}

impl TouchOperation {
    /// Returns the path this operation acts on.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TouchOperation::CreateDirectory { target }
            | TouchOperation::CreateFile { target, .. }
            | TouchOperation::SkipExisting { target } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };

        match self {
            TouchOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            TouchOperation::CreateFile { target, package } => {
                format!(
                    "{}Creating '{}' in package '{}'",
                    prefix,
                    target.display(),
                    package
                )
            }
            TouchOperation::SkipExisting { target } => {
                format!("{}File exists, skipping '{}'", prefix, target.display())
            }
        }
    }
}
