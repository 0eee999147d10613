use stepline_access::Capability;
use stepline_pipeline::{PipelineStep, StepOutcome};
use tracing::{info, warn};

use crate::context::AccessContext;
use crate::request::AccessRequest;

/// Deletes non-essential fields from the target record.
///
/// Requires the delete capability. The record keeps only the context's
/// essential fields. A missing record is reported and the pipeline continues.
pub struct PruneRecord;

impl PipelineStep<AccessRequest, AccessContext> for PruneRecord {
    fn run(&self, ctx: &AccessContext, request: AccessRequest) -> StepOutcome<AccessRequest> {
        if !ctx.policy().is_granted(&request.role, Capability::Delete) {
            warn!(
                user = %request.user_id,
                role = %request.role,
                "access denied: you do not have permission to delete data"
            );
            return StepOutcome::Halt;
        }

        let previous = ctx
            .store_mut()
            .retain_only(&request.target_id, ctx.essential_fields());

        if previous.is_some() {
            ctx.record_action(
                &request.user_id,
                format!("Deleted non-essential data for user {}", request.target_id),
            );
            info!(target_id = %request.target_id, "non-essential data deleted");
        } else {
            info!(target_id = %request.target_id, "no record found to delete");
        }

        StepOutcome::Continue(request)
    }
}
