use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::constants::{CURRENT_DIR, SOURCE_EXTENSION, TEST_SUFFIX};

/// Extension trait for Path with the lexical helpers gotouch needs to plan a run.
///
/// None of these methods touch the filesystem.
pub trait PathExt {
    /// Lexically normalizes the path: `.` components are dropped and `..`
    /// removes the component before it when there is one.
    ///
    /// Symlinks are not resolved. An empty result becomes `.`.
    ///
    /// # Examples
    /// ```
    /// use gotouch::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(Path::new("a/b/../foo.go").clean(), PathBuf::from("a/foo.go"));
    /// assert_eq!(Path::new("./a/./foo.go").clean(), PathBuf::from("a/foo.go"));
    /// assert_eq!(Path::new("../foo.go").clean(), PathBuf::from("../foo.go"));
    /// ```
    fn clean(&self) -> PathBuf;

    /// Returns the directory containing the cleaned path.
    ///
    /// A bare file name resolves to `.`, so the result is never empty.
    ///
    /// # Examples
    /// ```
    /// use gotouch::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(Path::new("pkg/widget.go").parent_dir(), PathBuf::from("pkg"));
    /// assert_eq!(Path::new("widget.go").parent_dir(), PathBuf::from("."));
    /// ```
    fn parent_dir(&self) -> PathBuf;

    /// Derives the Go package name from the last component of the parent directory.
    ///
    /// The name is not checked against Go identifier rules.
    ///
    /// # Examples
    /// ```
    /// use gotouch::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("a/b/foo.go").package_name(), "b");
    /// assert_eq!(Path::new("a/b/../foo.go").package_name(), "a");
    /// ```
    fn package_name(&self) -> String;

    /// Whether the extension is exactly the Go source extension.
    fn is_source_file(&self) -> bool;

    /// Whether the file name, extension stripped, already carries the test suffix.
    fn is_test_file(&self) -> bool;

    /// Derives the paired test file, e.g. `pkg/foo.go` -> `pkg/foo_test.go`.
    ///
    /// # Returns
    /// * `Some(PathBuf)` - For Go source files that are not tests themselves
    /// * `None` - For anything else
    ///
    /// # Examples
    /// ```
    /// use gotouch::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(Path::new("pkg/foo.go").test_file(), Some(PathBuf::from("pkg/foo_test.go")));
    /// assert_eq!(Path::new("pkg/foo_test.go").test_file(), None);
    /// assert_eq!(Path::new("pkg/README.md").test_file(), None);
    /// ```
    fn test_file(&self) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn clean(&self) -> PathBuf {
        let mut cleaned = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match cleaned.components().next_back() {
                    Some(Component::Normal(_)) => {
                        cleaned.pop();
                    }
                    // `..` at the root stays at the root.
                    Some(Component::RootDir) => {}
                    _ => cleaned.push(component),
                },
                _ => cleaned.push(component),
            }
        }

        if cleaned.as_os_str().is_empty() {
            PathBuf::from(CURRENT_DIR)
        } else {
            cleaned
        }
    }

    fn parent_dir(&self) -> PathBuf {
        let cleaned = self.clean();
        match cleaned.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            None if cleaned.has_root() => cleaned,
            _ => PathBuf::from(CURRENT_DIR),
        }
    }

    fn package_name(&self) -> String {
        self.parent_dir()
            .components()
            .next_back()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_else(|| CURRENT_DIR.to_string())
    }

    fn is_source_file(&self) -> bool {
        self.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    fn is_test_file(&self) -> bool {
        self.file_stem().is_some_and(|stem| stem.to_string_lossy().ends_with(TEST_SUFFIX))
    }

    fn test_file(&self) -> Option<PathBuf> {
        if !self.is_source_file() || self.is_test_file() {
            return None;
        }

        let mut name = OsString::from(self.file_stem()?);
        name.push(TEST_SUFFIX);
        name.push(".");
        name.push(SOURCE_EXTENSION);
        Some(self.with_file_name(name))
    }
}
