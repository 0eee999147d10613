use std::path::Path;

use clap::Args;
use stepline_operations::{AccessRequest, StepConfig, standard_pipeline};

use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Identifier of the acting user, recorded in the audit log
    #[arg(long)]
    user_id: String,

    /// Role used to look up capabilities
    #[arg(long)]
    role: String,

    /// Identifier of the record the request targets
    #[arg(long)]
    target: String,

    #[arg(long)]
    username: String,

    #[arg(long)]
    password: String,
}

impl RunArgs {
    fn into_request(self) -> AccessRequest {
        AccessRequest::new(
            self.user_id,
            self.role,
            self.target,
            self.username,
            self.password,
        )
    }
}

pub(crate) fn run(args: RunArgs, config: Option<&Path>) -> Result<()> {
    let ctx = StepConfig::load_or_default(config)?.into_context();
    let pipeline = standard_pipeline();
    let formatter = PlainTextFormatter;

    let mut execution = pipeline.execute(&ctx, args.into_request());
    for passed in execution.by_ref() {
        println!("{}", formatter.format_outcome(passed));
    }

    println!();
    print!("{}", formatter.format_audit_log(&ctx.audit()));

    if execution.halted() {
        return Err(CliError::PipelineHalted {
            step: execution.current_step().unwrap_or_default().to_string(),
        });
    }
    Ok(())
}
