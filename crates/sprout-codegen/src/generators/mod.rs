//! Code generators for the supported UI backends.

#[cfg(feature = "react-native")]
mod react_native;
#[cfg(feature = "sketch")]
mod sketch;

mod templates;
mod tokens;
mod writer;

pub use templates::{TemplateEngine, COMPONENT_TEMPLATE, TOKEN_MODULE_TEMPLATE};
pub use writer::Emitter;

use crate::error::Result;
use sprout_core::{Component, TokenCatalog};

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Backend name, as it appears in errors and outputs.
    fn backend_name(&self) -> &str;

    /// Validate and generate one component.
    fn generate_component(
        &self,
        component: &Component,
        catalog: &TokenCatalog,
    ) -> Result<Vec<GeneratedFile>>;

    /// Generate the token modules components import.
    fn generate_tokens(&self, catalog: &TokenCatalog) -> Result<Vec<GeneratedFile>>;
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root.
    pub path: String,
    pub content: String,
}
