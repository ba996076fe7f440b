use crate::{
    cli::Args,
    error::Result,
    report::LogReporter,
    touch::{TouchOptions, Toucher},
};

impl From<&Args> for TouchOptions {
    fn from(args: &Args) -> Self {
        Self { skip_testing: args.skip_testing, noop: args.dry_run, verbose: args.verbose > 0 }
    }
}

/// Main CLI runner that turns parsed arguments into a touch run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Creates the requested files, their test files and parent directories
    pub fn run(self) -> Result<()> {
        let reporter = LogReporter;
        let options = TouchOptions::from(&self.args);
        log::debug!("Touching {} paths with {options:?}", self.args.files.len());

        Toucher::new(options, &reporter).touch(&self.args.files)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
