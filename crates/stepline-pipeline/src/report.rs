use std::time::{Duration, Instant};

use crate::execution::Execution;

/// Status of a step in an execution report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepStatus {
    /// Step passed its payload on.
    Passed,
    /// Step halted the pipeline.
    Halted,
    /// Step never ran because an earlier step halted.
    Skipped,
}

/// Record of one step in a finished execution.
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// Name of the step.
    pub name: String,
    /// What happened to the step.
    pub status: StepStatus,
    /// Wall time spent in the step. Zero for skipped steps.
    pub elapsed: Duration,
}

/// Eagerly collected result of running a pipeline to its end.
///
/// Built by [`Pipeline::run_to_end`](crate::Pipeline::run_to_end).
#[derive(Debug)]
#[must_use]
pub struct ExecutionReport<P> {
    records: Vec<StepRecord>,
    payload: Option<P>,
}

impl<P> ExecutionReport<P> {
    pub(crate) fn from_execution<'a, Ctx>(
        mut execution: Execution<'a, P, Ctx>,
        names: impl Iterator<Item = &'a str>,
    ) -> Self {
        let mut records = Vec::new();

        for name in names {
            let started_at = Instant::now();
            let status = match execution.next() {
                Some(true) => StepStatus::Passed,
                Some(false) => StepStatus::Halted,
                None => StepStatus::Skipped,
            };
            let elapsed = if status == StepStatus::Skipped {
                Duration::ZERO
            } else {
                started_at.elapsed()
            };
            records.push(StepRecord {
                name: name.to_string(),
                status,
                elapsed,
            });
        }

        Self {
            records,
            payload: execution.into_payload(),
        }
    }

    /// Per-step records in registration order, including skipped steps.
    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// The outcome sequence the lazy execution would have produced.
    #[must_use]
    pub fn outcomes(&self) -> Vec<bool> {
        self.records
            .iter()
            .filter_map(|record| match record.status {
                StepStatus::Passed => Some(true),
                StepStatus::Halted => Some(false),
                StepStatus::Skipped => None,
            })
            .collect()
    }

    /// Name of the step that halted the pipeline, if any.
    #[must_use]
    pub fn halted_at(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.status == StepStatus::Halted)
            .map(|record| record.name.as_str())
    }

    /// Whether every step passed.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.records
            .iter()
            .all(|record| record.status == StepStatus::Passed)
    }

    /// Final payload, present only when no step halted.
    #[must_use]
    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    /// Get a summary of the execution for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for record in &self.records {
            let status = match record.status {
                StepStatus::Passed => "✓",
                StepStatus::Halted => "✗",
                StepStatus::Skipped => "-",
            };
            lines.push(format!("{status} {}", record.name));
        }
        lines.join("\n")
    }
}
