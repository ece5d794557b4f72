// src/infra/errors.rs — Error types for cutchain

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CutChainError {
    // Optimizer errors (fatal, never retried)
    #[error("Optimizer failed in {pass} ({command}): {message}")]
    Optimizer {
        pass: String,
        command: String,
        message: String,
    },

    #[error("Optimizer program '{program}' not found. Set [optimizer].program in the config.")]
    OptimizerNotFound { program: String },

    #[error("Template error in optimizer argument '{template}': {message}")]
    Template { template: String, message: String },

    // Cut files
    #[error("Cannot read cut file {path}: {message}")]
    Archive { path: String, message: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutChainError {
    /// Errors that end the whole run. Everything else is downgraded by the
    /// finalizer to a printed diagnostic.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CutChainError::Optimizer { .. }
                | CutChainError::OptimizerNotFound { .. }
                | CutChainError::Template { .. }
                | CutChainError::Config(_)
        )
    }
}
