//! Core types for the Sprout component generator.
//!
//! This crate provides the backend-agnostic IR used across all other sprout crates:
//! - Value types (colors, literals, declared types)
//! - Design tokens and the token catalog
//! - Logic IR (parameters, variables, guarded assignments)
//! - Render tree model and style keys
//! - Error types

pub mod component;
pub mod errors;
pub mod logic;
pub mod style;
pub mod tokens;
pub mod tree;
pub mod types;

pub use component::*;
pub use errors::*;
pub use logic::*;
pub use style::*;
pub use tokens::*;
pub use tree::*;
pub use types::*;
