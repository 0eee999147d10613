use std::path::Path;

use stepline_operations::{AccessRequest, StepConfig, standard_pipeline};

use crate::error::Result;
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(config: Option<&Path>) -> Result<()> {
    let ctx = StepConfig::load_or_default(config)?.into_context();
    let pipeline = standard_pipeline();
    let formatter = PlainTextFormatter;

    let requests = [
        (
            "Host",
            AccessRequest::new("102", "host", "100", "host_user", "hostpass123"),
        ),
        (
            "HR",
            AccessRequest::new("103", "hr", "100", "hr_user", "hrpass123"),
        ),
    ];

    for (index, (label, request)) in requests.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Executing pipeline as {label}:");
        for passed in pipeline.execute(&ctx, request) {
            println!("{}", formatter.format_outcome(passed));
        }
        println!();
        print!("{}", formatter.format_audit_log(&ctx.audit()));
    }

    Ok(())
}
