/// Handles argument parsing and the CLI entry point.
pub mod cli;

/// Go-specific names and process-wide constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits deriving package names and test files from paths.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Descriptions of planned filesystem actions.
pub mod operation;

/// Where verbose progress messages go.
pub mod report;

/// Plans and applies directory and file creation.
pub mod touch;
