//! Unified error hierarchy for PhysioSim
//!
//! Structured error types for everything around the numeric core. The
//! simulator itself is a total function and has no error cases; errors
//! come from the optimizer, the validating callers and the I/O layers.

use thiserror::Error;

use crate::export::ExportError;
use crate::optimizer::OptimizerError;
use crate::validation::ValidationError;

/// Top-level error type for all PhysioSim operations
#[derive(Debug, Error)]
pub enum PhysioSimError {
    /// Input range validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Grid search errors
    #[error("Optimization error: {0}")]
    Optimization(#[from] OptimizerError),

    /// Trajectory/report export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PhysioSim operations
pub type Result<T> = std::result::Result<T, PhysioSimError>;

impl PhysioSimError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PhysioSimError::Validation(_) => ErrorSeverity::Warning,
            PhysioSimError::Export(_) => ErrorSeverity::Error,
            PhysioSimError::Io(_) => ErrorSeverity::Error,
            PhysioSimError::Configuration(_) => ErrorSeverity::Error,
            // An empty grid means the application is misconfigured
            PhysioSimError::Optimization(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PhysioSimError::Validation(err) => {
                format!("Invalid input: {}", err)
            }
            PhysioSimError::Optimization(OptimizerError::EmptySearchSpace(_)) => {
                "The regimen search grid is empty. Check the optimizer configuration.".to_string()
            }
            PhysioSimError::Configuration(reason) => {
                format!("Configuration problem: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
