use indexmap::IndexSet;
use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    ext::PathExt,
    ioutils::{create_dir_all, create_package_file, path_exists, FileCreation},
    operation::TouchOperation,
    report::Reporter,
};

/// Flags controlling a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchOptions {
    /// Do not derive `_test.go` counterparts.
    pub skip_testing: bool,
    /// Report what would happen without touching the filesystem.
    pub noop: bool,
    /// Report every directory and file considered.
    pub verbose: bool,
}

/// Directories and files to create, in request order and without duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TouchPlan {
    directories: IndexSet<PathBuf>,
    files: IndexSet<PathBuf>,
}

impl TouchPlan {
    /// Builds the plan for `paths`.
    ///
    /// Paths are cleaned lexically first (see [`PathExt::clean`]).
    /// Each path contributes its parent directory and itself; unless
    /// `skip_testing` is set, Go source files also contribute their test file.
    /// A path already enqueued, either requested or derived, is not added again.
    pub fn new<I, P>(paths: I, skip_testing: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut plan = Self::default();

        for path in paths {
            let path = path.as_ref().clean();

            plan.directories.insert(path.parent_dir());
            plan.enqueue_file(path.clone());

            if skip_testing {
                continue;
            }
            if let Some(test_file) = path.test_file() {
                plan.enqueue_file(test_file);
            }
        }

        plan
    }

    fn enqueue_file(&mut self, file: PathBuf) {
        if self.files.contains(&file) {
            log::debug!("'{}' is already planned", file.display());
            return;
        }
        self.files.insert(file);
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Creates directories and package-declared Go files for a batch of paths.
pub struct Toucher<'a> {
    options: TouchOptions,
    reporter: &'a dyn Reporter,
}

impl<'a> Toucher<'a> {
    pub fn new(options: TouchOptions, reporter: &'a dyn Reporter) -> Self {
        Self { options, reporter }
    }

    pub fn options(&self) -> &TouchOptions {
        &self.options
    }

    /// Plans and applies a run for `paths`.
    ///
    /// Stops at the first failure. Whatever was created before it stays on disk.
    pub fn touch<I, P>(&self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let plan = TouchPlan::new(paths, self.options.skip_testing);
        self.apply(&plan)
    }

    /// Creates every planned directory, then every planned file.
    pub fn apply(&self, plan: &TouchPlan) -> Result<()> {
        log::debug!(
            "Planned {} directories and {} files",
            plan.directories.len(),
            plan.files.len()
        );

        for dir in plan.directories() {
            self.mkdir(dir)?;
        }
        for file in plan.files() {
            self.mkfile(file)?;
        }
        Ok(())
    }

    fn mkdir(&self, dir: &Path) -> Result<()> {
        self.verbose_log(&TouchOperation::CreateDirectory { target: dir.to_path_buf() });

        if self.options.noop {
            return Ok(());
        }
        create_dir_all(dir)
    }

    fn mkfile(&self, file: &Path) -> Result<()> {
        let package = file.package_name();
        self.verbose_log(&TouchOperation::CreateFile {
            target: file.to_path_buf(),
            package: package.clone(),
        });

        let skip = TouchOperation::SkipExisting { target: file.to_path_buf() };
        if path_exists(file) {
            self.verbose_log(&skip);
            return Ok(());
        }

        if self.options.noop {
            return Ok(());
        }

        // Something may have appeared since the existence probe.
        if create_package_file(file, &package)? == FileCreation::AlreadyExists {
            self.verbose_log(&skip);
        }
        Ok(())
    }

    fn verbose_log(&self, operation: &TouchOperation) {
        if !self.options.verbose {
            return;
        }
        log::trace!("Reporting operation on {}", operation.target_path().display());
        self.reporter.report(&operation.get_message(self.options.noop));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl Reporter for Recorder {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn files_of(plan: &TouchPlan) -> Vec<PathBuf> {
        plan.files().map(Path::to_path_buf).collect()
    }

    fn dirs_of(plan: &TouchPlan) -> Vec<PathBuf> {
        plan.directories().map(Path::to_path_buf).collect()
    }

    #[test]
    fn plan_pairs_source_files_with_tests() {
        let plan = TouchPlan::new(["pkg/widget.go"], false);

        assert_eq!(dirs_of(&plan), vec![PathBuf::from("pkg")]);
        assert_eq!(
            files_of(&plan),
            vec![PathBuf::from("pkg/widget.go"), PathBuf::from("pkg/widget_test.go")]
        );
    }

    #[test]
    fn plan_skips_tests_when_asked() {
        let plan = TouchPlan::new(["pkg/widget.go"], true);
        assert_eq!(files_of(&plan), vec![PathBuf::from("pkg/widget.go")]);
    }

    #[test]
    fn plan_keeps_request_order() {
        let plan = TouchPlan::new(["b/two.go", "a/one.txt", "c/three.go"], false);

        assert_eq!(
            dirs_of(&plan),
            vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("c")]
        );
        assert_eq!(
            files_of(&plan),
            vec![
                PathBuf::from("b/two.go"),
                PathBuf::from("b/two_test.go"),
                PathBuf::from("a/one.txt"),
                PathBuf::from("c/three.go"),
                PathBuf::from("c/three_test.go"),
            ]
        );
    }

    #[test]
    fn plan_deduplicates_derived_and_requested_paths() {
        let requested = ["pkg/widget.go", "pkg/widget_test.go", "pkg/widget.go"];
        let plan = TouchPlan::new(requested, false);

        assert_eq!(dirs_of(&plan), vec![PathBuf::from("pkg")]);
        assert_eq!(
            files_of(&plan),
            vec![PathBuf::from("pkg/widget.go"), PathBuf::from("pkg/widget_test.go")]
        );
    }

    #[test]
    fn plan_cleans_requested_paths() {
        let plan = TouchPlan::new(["a/b/../foo.go", "./a/foo.go"], false);

        assert_eq!(dirs_of(&plan), vec![PathBuf::from("a")]);
        assert_eq!(
            files_of(&plan),
            vec![PathBuf::from("a/foo.go"), PathBuf::from("a/foo_test.go")]
        );
    }

    #[test]
    fn empty_plan() {
        let plan = TouchPlan::new(Vec::<PathBuf>::new(), false);
        assert!(plan.is_empty());
        assert_eq!(plan.directories().count(), 0);
    }

    #[test]
    fn touch_with_no_paths_succeeds() {
        let recorder = Recorder::default();
        let toucher = Toucher::new(TouchOptions { verbose: true, ..Default::default() }, &recorder);

        toucher.touch(Vec::<PathBuf>::new()).unwrap();

        assert!(recorder.messages.borrow().is_empty());
    }

    #[test]
    fn silent_unless_verbose() {
        let temp_dir = TempDir::new().unwrap();
        let recorder = Recorder::default();
        let toucher = Toucher::new(TouchOptions::default(), &recorder);

        toucher.touch([temp_dir.path().join("pkg/widget.go")]).unwrap();

        assert!(recorder.messages.borrow().is_empty());
        assert!(temp_dir.path().join("pkg/widget_test.go").is_file());
    }

    #[test]
    fn verbose_reports_every_step_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path().join("pkg");
        let recorder = Recorder::default();
        let options = TouchOptions { verbose: true, ..Default::default() };
        let toucher = Toucher::new(options, &recorder);

        toucher.touch([pkg.join("widget.go")]).unwrap();

        let messages = recorder.messages.borrow();
        assert_eq!(
            *messages,
            vec![
                format!("Creating directory '{}'", pkg.display()),
                format!("Creating '{}' in package 'pkg'", pkg.join("widget.go").display()),
                format!("Creating '{}' in package 'pkg'", pkg.join("widget_test.go").display()),
            ]
        );
    }

    #[test]
    fn verbose_reports_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "keep me").unwrap();
        let recorder = Recorder::default();
        let toucher = Toucher::new(TouchOptions { verbose: true, ..Default::default() }, &recorder);

        toucher.touch([&file]).unwrap();

        let messages = recorder.messages.borrow();
        assert_eq!(
            messages.last().unwrap(),
            &format!("File exists, skipping '{}'", file.display())
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");
    }

    #[test]
    fn noop_reports_with_prefix_and_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let recorder = Recorder::default();
        let options = TouchOptions { noop: true, verbose: true, ..Default::default() };
        let toucher = Toucher::new(options, &recorder);

        toucher.touch([temp_dir.path().join("pkg/widget.go")]).unwrap();

        let messages = recorder.messages.borrow();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.starts_with("[DRY RUN] ")));
        assert!(!temp_dir.path().join("pkg").exists());
    }

    #[test]
    fn options_are_exposed() {
        let recorder = Recorder::default();
        let options = TouchOptions { skip_testing: true, noop: false, verbose: true };
        let toucher = Toucher::new(options, &recorder);
        assert_eq!(toucher.options(), &options);
    }
}
