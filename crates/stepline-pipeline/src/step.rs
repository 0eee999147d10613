use crate::outcome::StepOutcome;

/// A named stage of a pipeline.
///
/// A step receives the payload produced by the previous step (or the
/// pipeline's initial payload) and either passes a payload on or halts.
/// Collaborators a step needs, such as stores or logs, live in the shared
/// context rather than in the payload.
///
/// Any `Fn(&Ctx, P) -> StepOutcome<P>` closure is a step.
///
/// # Type Parameters
///
/// - `P`: Payload threaded through the pipeline
/// - `Ctx`: Shared context handed to every step of one execution
pub trait PipelineStep<P, Ctx> {
    /// Run the step against the current payload.
    fn run(&self, ctx: &Ctx, payload: P) -> StepOutcome<P>;
}

impl<P, Ctx, F> PipelineStep<P, Ctx> for F
where
    F: Fn(&Ctx, P) -> StepOutcome<P>,
{
    fn run(&self, ctx: &Ctx, payload: P) -> StepOutcome<P> {
        self(ctx, payload)
    }
}
