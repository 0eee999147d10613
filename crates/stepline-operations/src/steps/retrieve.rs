use stepline_access::Capability;
use stepline_pipeline::{PipelineStep, StepOutcome};
use tracing::{info, warn};

use crate::context::AccessContext;
use crate::request::AccessRequest;

/// Looks up the target record for roles allowed to view records.
///
/// A missing record is reported but does not halt the pipeline; only a role
/// without the view capability does.
pub struct RetrieveRecord;

impl PipelineStep<AccessRequest, AccessContext> for RetrieveRecord {
    fn run(&self, ctx: &AccessContext, request: AccessRequest) -> StepOutcome<AccessRequest> {
        if !ctx.policy().is_granted(&request.role, Capability::View) {
            warn!(
                user = %request.user_id,
                role = %request.role,
                "access denied: you do not have permission to view data"
            );
            return StepOutcome::Halt;
        }

        let found = ctx
            .store()
            .get(&request.target_id)
            .map(ToString::to_string);

        match found {
            Some(record) => {
                ctx.record_action(
                    &request.user_id,
                    format!("Viewed record for user {}", request.target_id),
                );
                info!(target_id = %request.target_id, %record, "data for user");
            }
            None => {
                info!(target_id = %request.target_id, "no record found");
            }
        }

        StepOutcome::Continue(request)
    }
}
