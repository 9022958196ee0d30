//! Validation and resolution for Sprout components.
//!
//! This crate provides:
//! - Structural and reference validation of a component
//! - Sequential evaluation of the logic IR under an environment
//! - The token catalog adapter (token expressions per access strategy)
//! - Style resolution (text-style spread, static and dynamic layering)

mod eval;
mod references;
mod style;
mod tokens;

pub use eval::{Evaluator, Resolution};
pub use references::{entry_name, validate};
pub use style::StyleResolver;
pub use tokens::{check_tokens, lookup, resolve_value, TokenExpr};

use indexmap::IndexMap;
use sprout_core::{Component, Environment, ResolveError, StyleMap, TokenCatalog};

/// Validate a component, check its tokens and resolve every node's style.
pub fn resolve(
    component: &Component,
    catalog: &TokenCatalog,
    env: &Environment,
) -> Result<IndexMap<String, StyleMap>, ResolveError> {
    validate(component)?;
    check_tokens(component, catalog)?;
    StyleResolver::new(component, catalog).resolve_all(env)
}
