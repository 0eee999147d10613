use stepline_pipeline::{PipelineStep, StepOutcome};
use tracing::warn;

use crate::context::AccessContext;
use crate::request::AccessRequest;

/// Rejects requests whose credentials are too short.
pub struct ValidateCredentials;

impl PipelineStep<AccessRequest, AccessContext> for ValidateCredentials {
    fn run(&self, ctx: &AccessContext, request: AccessRequest) -> StepOutcome<AccessRequest> {
        if !ctx.rules().accepts(&request.username, &request.password) {
            warn!(user = %request.user_id, "validation failed for username or password");
            return StepOutcome::Halt;
        }

        ctx.record_action(&request.user_id, "Validation successful");
        StepOutcome::Continue(request)
    }
}
