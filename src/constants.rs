//! Constants used throughout the gotouch application

/// Extension of Go source files, without the leading dot
pub const SOURCE_EXTENSION: &str = "go";

/// Suffix marking a Go file as a test counterpart
pub const TEST_SUFFIX: &str = "_test";

/// Keyword opening the package declaration
pub const PACKAGE_KEYWORD: &str = "package";

/// Directory used when a path has no parent component
pub const CURRENT_DIR: &str = ".";

/// Prefix for messages emitted in dry-run mode
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
