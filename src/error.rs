use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    /// The filesystem refused to create a directory or one of its ancestors.
    #[error("Error making '{path}': {source}")]
    CreateDirectoryError { path: String, source: std::io::Error },

    /// The filesystem refused to create a file or write its package line.
    #[error("Error creating '{path}': {source}")]
    CreateFileError { path: String, source: std::io::Error },
}

/// Convenience type alias for Results with gotouch's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
