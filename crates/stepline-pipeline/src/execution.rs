use std::iter::FusedIterator;

use indexmap::map::Iter;
use tracing::debug;

use crate::outcome::StepOutcome;
use crate::step::PipelineStep;

type Steps<'a, P, Ctx> = Iter<'a, String, Box<dyn PipelineStep<P, Ctx>>>;

/// A single pass over a pipeline's steps.
///
/// Produced by [`Pipeline::execute`](crate::Pipeline::execute). Every call to
/// [`next`](Iterator::next) runs exactly one step, so side effects happen at
/// the point the caller pulls the outcome. The iterator cannot be restarted;
/// execute the pipeline again for a fresh run.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Execution<'a, P, Ctx> {
    steps: Steps<'a, P, Ctx>,
    ctx: &'a Ctx,
    current: Option<P>,
    last_step: Option<&'a str>,
    halted: bool,
}

impl<'a, P, Ctx> Execution<'a, P, Ctx> {
    pub(crate) fn new(steps: Steps<'a, P, Ctx>, ctx: &'a Ctx, initial: P) -> Self {
        Self {
            steps,
            ctx,
            current: Some(initial),
            last_step: None,
            halted: false,
        }
    }

    /// Name of the most recently attempted step, if any step has run.
    #[must_use]
    pub fn current_step(&self) -> Option<&'a str> {
        self.last_step
    }

    /// Whether a step has halted this execution.
    #[must_use]
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Whether every step ran and none halted.
    #[must_use]
    pub fn completed(&self) -> bool {
        !self.halted && self.steps.len() == 0
    }

    /// Number of steps not yet attempted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.halted { 0 } else { self.steps.len() }
    }

    /// The payload produced by the last successful step.
    ///
    /// Before any step has run this is the initial payload. Returns `None`
    /// once a step has halted.
    #[must_use]
    pub fn into_payload(self) -> Option<P> {
        self.current
    }
}

impl<P, Ctx> Iterator for Execution<'_, P, Ctx> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let (name, step) = self.steps.next()?;
        let payload = self.current.take()?;
        self.last_step = Some(name.as_str());

        debug!(step = %name, "running step");
        match (**step).run(self.ctx, payload) {
            StepOutcome::Continue(next) => {
                debug!(step = %name, "step passed");
                self.current = Some(next);
                Some(true)
            }
            StepOutcome::Halt => {
                debug!(step = %name, "step halted pipeline");
                self.halted = true;
                Some(false)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<P, Ctx> FusedIterator for Execution<'_, P, Ctx> {}
