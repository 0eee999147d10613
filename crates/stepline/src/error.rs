use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] stepline_operations::ConfigError),

    #[error("pipeline halted at step '{step}'")]
    PipelineHalted { step: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
