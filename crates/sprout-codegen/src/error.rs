//! Error types for code generation.

use sprout_core::{PrimitiveKind, ResolveError, ValidateError};
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The component uses a primitive the backend does not define.
    #[error("Primitive '{kind}' of node '{node}' is not supported by {backend}")]
    UnsupportedPrimitive {
        kind: PrimitiveKind,
        backend: String,
        node: String,
    },

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Inconsistent backend profile.
    #[error("Invalid backend profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// The node or variable the error is about, when there is one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnsupportedPrimitive { node, .. } => Some(node),
            Self::Validate(ValidateError::MalformedTree { node, .. }) => Some(node),
            Self::Validate(ValidateError::TypeMismatch { subject, .. })
            | Self::Validate(ValidateError::UnresolvedReference { subject, .. })
            | Self::Resolve(ResolveError::UnknownToken { subject, .. }) => Some(subject),
            Self::Resolve(ResolveError::Invalid(inner)) => match inner {
                ValidateError::MalformedTree { node, .. } => Some(node),
                ValidateError::TypeMismatch { subject, .. }
                | ValidateError::UnresolvedReference { subject, .. } => Some(subject),
            },
            _ => None,
        }
    }
}
