mod demo;
mod run;
mod steps;

use std::path::Path;

use clap::Subcommand;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run one access request through the pipeline
    Run(run::RunArgs),
    /// Run the built-in host and HR requests against a shared store and audit log
    Demo,
    /// List pipeline steps in execution order
    Steps,
}

impl Commands {
    pub(crate) fn execute(self, config: Option<&Path>) -> Result<()> {
        match self {
            Self::Run(args) => run::run(args, config),
            Self::Demo => demo::run(config),
            Self::Steps => {
                steps::run();
                Ok(())
            }
        }
    }
}
