use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use gotouch::report::Reporter;
use walkdir::WalkDir;

/// Collects reported messages so tests can assert on them.
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Lists every entry under `root` relative to it, directories included.
pub fn tree(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints the entries found in only one of the two directories, and files whose content differs.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_tree = tree(actual);
    let expected_tree = tree(expected);

    println!("\n=== Directory Comparison ===");
    for entry in actual_tree.difference(&expected_tree) {
        println!("  + {:?}", entry);
    }
    for entry in expected_tree.difference(&actual_tree) {
        println!("  - {:?}", entry);
    }
    for entry in actual_tree.intersection(&expected_tree) {
        let (a, e) = (actual.join(entry), expected.join(entry));
        if a.is_file() && fs::read(&a).unwrap() != fs::read(&e).unwrap() {
            println!("  ~ {:?}", entry);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` holds exactly the files in `expected`, given as (relative path, content).
pub fn assert_tree(actual: &Path, expected: &[(&str, &str)]) {
    let expected_dir = tempfile::tempdir().unwrap();
    for (path, content) in expected {
        let target = expected_dir.path().join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, content).unwrap();
    }

    if dir_diff::is_different(actual, expected_dir.path()).unwrap() {
        print_dir_diff(actual, expected_dir.path());
        panic!("Directories differ. See above for details.");
    }
}
