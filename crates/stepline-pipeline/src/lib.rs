//! Linear step pipeline with short-circuit on failure.
//!
//! Steps are registered under a name and run in registration order against a
//! single evolving payload. Executing a pipeline yields a lazy iterator of
//! per-step outcomes: `true` for a step that passed its payload on, `false`
//! for the step that halted. Nothing after a halting step is ever invoked.

mod execution;
mod outcome;
mod pipeline;
mod report;
mod step;

pub use execution::Execution;
pub use outcome::StepOutcome;
pub use pipeline::Pipeline;
pub use report::{ExecutionReport, StepRecord, StepStatus};
pub use step::PipelineStep;
