//! Steps of the access request pipeline.
//!
//! Each step reads the request, consults the policy and store in the
//! [`AccessContext`], and records what it did in the audit log. A step that
//! refuses the request logs the reason and halts the pipeline.

mod prune;
mod retrieve;
mod validate;

pub use prune::PruneRecord;
pub use retrieve::RetrieveRecord;
pub use validate::ValidateCredentials;

use stepline_pipeline::Pipeline;

use crate::context::AccessContext;
use crate::request::AccessRequest;

pub const VALIDATION_STEP: &str = "validation";
pub const GET_DATA_STEP: &str = "get_data";
pub const DELETE_DATA_STEP: &str = "delete_data";

/// The validation, retrieval and deletion steps, in that order.
#[must_use]
pub fn standard_pipeline() -> Pipeline<AccessRequest, AccessContext> {
    Pipeline::<AccessRequest, AccessContext>::new()
        .with_step(VALIDATION_STEP, ValidateCredentials)
        .with_step(GET_DATA_STEP, RetrieveRecord)
        .with_step(DELETE_DATA_STEP, PruneRecord)
}
