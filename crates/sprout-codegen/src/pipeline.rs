//! Pipeline driver.
//!
//! A run validates each component once, then emits it for every
//! configured backend. The catalog is an `Arc` snapshot shared read-only by
//! all workers; one (component, backend) pair is the unit of parallel work.

use crate::error::Result;
use crate::generators::{Emitter, GeneratedFile};
use crate::profile::BackendProfile;
use rayon::prelude::*;
use sprout_core::{Component, TokenCatalog};
use sprout_resolver::validate;
use std::sync::Arc;

/// Output of one backend for one component.
#[derive(Debug)]
pub struct BackendOutput {
    pub backend: String,
    pub result: Result<Vec<GeneratedFile>>,
}

impl BackendOutput {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every backend's output for one component, or the validation error that
/// stopped all of them.
#[derive(Debug)]
pub struct ComponentOutput {
    pub component: String,
    pub result: Result<Vec<BackendOutput>>,
}

/// Generates components for a fixed set of backends.
pub struct Pipeline {
    catalog: Arc<TokenCatalog>,
    emitters: Vec<Emitter>,
}

impl Pipeline {
    pub fn new(catalog: impl Into<Arc<TokenCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            emitters: Vec::new(),
        }
    }

    /// Add a backend. Fails if the profile is inconsistent or its template
    /// does not parse.
    pub fn with_backend(mut self, profile: BackendProfile) -> Result<Self> {
        self.emitters.push(Emitter::new(profile)?);
        Ok(self)
    }

    /// Add every backend enabled by cargo features.
    pub fn with_default_backends(self) -> Result<Self> {
        #[allow(unused_mut)]
        let mut pipeline = self;
        #[cfg(feature = "react-native")]
        {
            pipeline = pipeline.with_backend(BackendProfile::react_native())?;
        }
        #[cfg(feature = "sketch")]
        {
            pipeline = pipeline.with_backend(BackendProfile::sketch())?;
        }
        Ok(pipeline)
    }

    pub fn catalog(&self) -> &Arc<TokenCatalog> {
        &self.catalog
    }

    /// Names of the configured backends, in configuration order.
    pub fn backends(&self) -> impl Iterator<Item = &str> {
        self.emitters.iter().map(|emitter| emitter.profile().name.as_str())
    }

    /// Validate `component` once and emit it for every backend.
    ///
    /// Backend failures are reported per backend and never affect the
    /// others.
    #[tracing::instrument(level = "debug", skip_all, fields(component = component.name()))]
    pub fn generate(&self, component: &Component) -> Result<Vec<BackendOutput>> {
        let catalog = Arc::clone(&self.catalog);
        self.generate_with(component, &catalog)
    }

    /// Generate many components in parallel. Outputs follow input order.
    #[tracing::instrument(level = "debug", skip_all, fields(components = components.len()))]
    pub fn generate_all(&self, components: &[Component]) -> Vec<ComponentOutput> {
        let catalog = Arc::clone(&self.catalog);
        let outputs: Vec<ComponentOutput> = components
            .par_iter()
            .map(|component| ComponentOutput {
                component: component.name().to_string(),
                result: self.generate_with(component, &catalog),
            })
            .collect();
        tracing::debug!(components = outputs.len(), "generation complete");
        outputs
    }

    /// Token modules for every backend.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate_tokens(&self) -> Vec<BackendOutput> {
        self.emitters
            .par_iter()
            .map(|emitter| {
                let result = emitter.emit_tokens(&self.catalog);
                report(emitter, &result);
                BackendOutput {
                    backend: emitter.profile().name.clone(),
                    result,
                }
            })
            .collect()
    }

    fn generate_with(&self, component: &Component, catalog: &TokenCatalog) -> Result<Vec<BackendOutput>> {
        if let Err(err) = validate(component) {
            tracing::warn!(component = component.name(), error = %err, "component rejected");
            return Err(err.into());
        }
        tracing::debug!(component = component.name(), "validation complete");

        let outputs = self
            .emitters
            .par_iter()
            .map(|emitter| {
                let result = emitter.emit(component, catalog);
                report(emitter, &result);
                BackendOutput {
                    backend: emitter.profile().name.clone(),
                    result,
                }
            })
            .collect();
        Ok(outputs)
    }
}

fn report(emitter: &Emitter, result: &Result<Vec<GeneratedFile>>) {
    match result {
        Ok(files) => tracing::debug!(backend = %emitter.profile().name, files = files.len(), "emission complete"),
        Err(err) => tracing::warn!(backend = %emitter.profile().name, error = %err, "backend failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use sprout_core::{Logic, RenderNode, ValidateError};

    fn pipeline() -> Pipeline {
        Pipeline::new(TokenCatalog::new()).with_default_backends().unwrap()
    }

    #[test]
    fn test_backends_in_order() {
        let pipeline = pipeline();
        let backends: Vec<&str> = pipeline.backends().collect();
        assert_eq!(backends, ["react-native", "sketch"]);
    }

    #[test]
    fn test_one_output_per_backend() {
        let component = Component::new("Empty", Logic::new(), RenderNode::view("View"));
        let outputs = pipeline().generate(&component).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(outputs.iter().all(BackendOutput::is_ok));
    }

    #[test]
    fn test_invalid_component_stops_every_backend() {
        let root = RenderNode::view("View").with_child(RenderNode::view("View"));
        let component = Component::new("Broken", Logic::new(), root);
        let err = pipeline().generate(&component).unwrap_err();
        assert!(matches!(err, CodegenError::Validate(ValidateError::MalformedTree { .. })));
    }

    #[test]
    fn test_generate_all_keeps_input_order() {
        let components: Vec<Component> = (0..8)
            .map(|i| Component::new(format!("Card{i}"), Logic::new(), RenderNode::view("View")))
            .collect();
        let names: Vec<String> = pipeline()
            .generate_all(&components)
            .into_iter()
            .map(|output| output.component)
            .collect();
        let expected: Vec<String> = (0..8).map(|i| format!("Card{i}")).collect();
        assert_eq!(names, expected);
    }
}
