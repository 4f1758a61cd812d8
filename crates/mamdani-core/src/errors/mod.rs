//! Error handling for the engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod definition_error;
pub mod error_code;
pub mod inference_error;

pub use config_error::ConfigError;
pub use definition_error::DefinitionError;
pub use error_code::MamdaniErrorCode;
pub use inference_error::InferenceError;

/// Any error the engine can produce. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum MamdaniError {
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MamdaniErrorCode for MamdaniError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Definition(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type MamdaniResult<T> = Result<T, MamdaniError>;
