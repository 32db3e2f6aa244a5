//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric field must not be zero
    Zero { field: &'static str },

    /// Request body is not the expected JSON document
    InvalidBody { reason: String },

    /// Query string could not be decoded
    InvalidQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero { field } => write!(f, "{} debe ser distinto de cero", field),
            Self::InvalidBody { reason } => write!(f, "Cuerpo JSON inválido: {}", reason),
            Self::InvalidQuery { reason } => write!(f, "Parámetros de consulta inválidos: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
