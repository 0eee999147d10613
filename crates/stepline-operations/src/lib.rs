mod config;
mod context;
mod error;
mod request;
pub mod steps;

pub use config::{DEFAULT_ESSENTIAL_FIELDS, StepConfig};
pub use context::{AccessContext, ValidationRules};
pub use error::{ConfigError, Result};
pub use request::AccessRequest;
pub use steps::standard_pipeline;
