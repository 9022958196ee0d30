//! Error types for Sprout.

use crate::tokens::TokenCategory;
use thiserror::Error;

/// Top-level error type for Sprout.
#[derive(Debug, Error)]
pub enum SproutError {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Structural and type errors found while validating a component.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidateError {
    #[error("Type mismatch in {subject}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Variable, parameter, or node the value belongs to.
        subject: String,
        expected: String,
        found: String,
    },

    #[error("Unresolved reference '{reference}' in {subject}")]
    UnresolvedReference { reference: String, subject: String },

    #[error("Malformed tree at '{node}': {reason}")]
    MalformedTree { node: String, reason: String },
}

impl ValidateError {
    pub fn type_mismatch(
        subject: impl ToString,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::TypeMismatch {
            subject: subject.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unresolved(reference: impl ToString, subject: impl ToString) -> Self {
        Self::UnresolvedReference {
            reference: reference.to_string(),
            subject: subject.to_string(),
        }
    }

    pub fn malformed(node: impl ToString, reason: impl Into<String>) -> Self {
        Self::MalformedTree {
            node: node.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors during token and value resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("Unknown {category} token '{name}' used by {subject}")]
    UnknownToken {
        name: String,
        category: TokenCategory,
        subject: String,
    },

    #[error(transparent)]
    Invalid(#[from] ValidateError),
}

impl ResolveError {
    pub fn unknown_token(name: impl Into<String>, category: TokenCategory, subject: impl ToString) -> Self {
        Self::UnknownToken {
            name: name.into(),
            category,
            subject: subject.to_string(),
        }
    }
}
