pub mod audit;
pub mod policy;
pub mod store;

pub use audit::{AUDIT_TIMESTAMP_FORMAT, AuditEntry, AuditLog};
pub use policy::{AccessPolicy, Capability, RoleCapabilities};
pub use store::{Record, RecordStore};
