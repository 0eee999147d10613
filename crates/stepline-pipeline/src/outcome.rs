/// Result of running a single step.
///
/// A step either hands a (possibly transformed) payload to the next step, or
/// halts the pipeline. The engine does not care why a step halted; steps log
/// or audit their own reasons before returning [`StepOutcome::Halt`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StepOutcome<P> {
    /// The step succeeded and the payload continues down the pipeline.
    Continue(P),
    /// The step failed; no further steps run.
    Halt,
}

impl<P> StepOutcome<P> {
    /// Returns `true` if the step passed its payload on.
    #[must_use]
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` if the step halted the pipeline.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }

    /// Converts into the carried payload, discarding the halt marker.
    #[must_use]
    pub fn into_payload(self) -> Option<P> {
        match self {
            Self::Continue(payload) => Some(payload),
            Self::Halt => None,
        }
    }
}

impl<P> From<Option<P>> for StepOutcome<P> {
    fn from(value: Option<P>) -> Self {
        value.map_or(Self::Halt, Self::Continue)
    }
}
