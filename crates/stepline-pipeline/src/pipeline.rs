use indexmap::IndexMap;
use tracing::debug;

use crate::execution::Execution;
use crate::outcome::StepOutcome;
use crate::report::ExecutionReport;
use crate::step::PipelineStep;

/// An ordered registry of named steps.
///
/// Registration order is the only thing that decides execution order.
/// Registering a step under a name that is already taken replaces the earlier
/// step in place: the new step runs at the position of the first
/// registration.
///
/// ```
/// use stepline_pipeline::{Pipeline, StepOutcome};
///
/// let pipeline = Pipeline::<i32>::new()
///     .with_step_fn("double", |_: &(), n: i32| StepOutcome::Continue(n * 2))
///     .with_step_fn("positive", |_: &(), n: i32| {
///         if n > 0 { StepOutcome::Continue(n) } else { StepOutcome::Halt }
///     });
///
/// let outcomes: Vec<bool> = pipeline.execute(&(), 4).collect();
/// assert_eq!(outcomes, vec![true, true]);
///
/// let outcomes: Vec<bool> = pipeline.execute(&(), -4).collect();
/// assert_eq!(outcomes, vec![true, false]);
/// ```
pub struct Pipeline<P, Ctx = ()> {
    steps: IndexMap<String, Box<dyn PipelineStep<P, Ctx>>>,
}

impl<P, Ctx> Default for Pipeline<P, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, Ctx> Pipeline<P, Ctx> {
    /// Create a pipeline with no steps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: IndexMap::new(),
        }
    }

    /// Register `step` under `name`.
    ///
    /// If `name` is already registered, the previous step is replaced and
    /// the replacement keeps the original position.
    pub fn register<S>(&mut self, name: impl Into<String>, step: S) -> &mut Self
    where
        S: PipelineStep<P, Ctx> + 'static,
    {
        let name = name.into();
        if self.steps.insert(name.clone(), Box::new(step)).is_some() {
            debug!(step = %name, "replaced previously registered step");
        } else {
            debug!(step = %name, position = self.steps.len(), "registered step");
        }
        self
    }

    /// Register a closure under `name`.
    ///
    /// Same as [`register`](Self::register), but pins the closure signature so
    /// callers do not have to annotate the context reference.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, step: F) -> &mut Self
    where
        F: Fn(&Ctx, P) -> StepOutcome<P> + 'static,
    {
        self.register(name, step)
    }

    /// Builder-style variant of [`register`](Self::register).
    #[must_use]
    pub fn with_step<S>(mut self, name: impl Into<String>, step: S) -> Self
    where
        S: PipelineStep<P, Ctx> + 'static,
    {
        self.register(name, step);
        self
    }

    /// Builder-style variant of [`register_fn`](Self::register_fn).
    #[must_use]
    pub fn with_step_fn<F>(mut self, name: impl Into<String>, step: F) -> Self
    where
        F: Fn(&Ctx, P) -> StepOutcome<P> + 'static,
    {
        self.register(name, step);
        self
    }

    /// Names of the registered steps, in execution order.
    pub fn step_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }

    /// Whether a step is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    /// Number of registered steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Start an execution with `initial` as the first step's payload.
    ///
    /// Nothing runs until the returned iterator is advanced. Each call to
    /// `next` runs exactly one step and yields whether it passed its payload
    /// on. The iterator ends after the first `false`, or after the last step.
    /// Dropping it early leaves the remaining steps unexecuted.
    pub fn execute<'a>(&'a self, ctx: &'a Ctx, initial: P) -> Execution<'a, P, Ctx> {
        Execution::new(self.steps.iter(), ctx, initial)
    }

    /// Run an execution to its end and collect a per-step report.
    ///
    /// Steps after a halting step are recorded as skipped.
    pub fn run_to_end(&self, ctx: &Ctx, initial: P) -> ExecutionReport<P> {
        ExecutionReport::from_execution(self.execute(ctx, initial), self.step_names())
    }
}

impl<P, Ctx> std::fmt::Debug for Pipeline<P, Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.keys().collect::<Vec<_>>())
            .finish()
    }
}
