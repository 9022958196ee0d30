//! Style resolution.
//!
//! A node's concrete style is built in three layers, each overwriting the
//! previous one key by key:
//! 1. the properties of its text style (dynamic binding, else static),
//! 2. its static properties,
//! 3. its dynamically bound properties.
//!
//! Color tokens are replaced by their colors. The `textStyle` key itself
//! never appears in a resolved style.

use crate::eval::{Evaluator, Resolution};
use crate::tokens::resolve_value;
use indexmap::IndexMap;
use sprout_core::{
    Component, Environment, RenderNode, ResolveError, StyleKey, StyleMap, TextContent,
    TokenCatalog, TokenCategory, ValidateError, Value, VariableId,
};

/// Resolves the concrete style of render nodes.
pub struct StyleResolver<'a> {
    component: &'a Component,
    catalog: &'a TokenCatalog,
}

impl<'a> StyleResolver<'a> {
    pub fn new(component: &'a Component, catalog: &'a TokenCatalog) -> Self {
        Self { component, catalog }
    }

    /// Resolve the style of the node `id` under `env`.
    pub fn resolve(&self, id: &str, env: &Environment) -> Result<StyleMap, ResolveError> {
        let node = self.node(id)?;
        let resolution = Evaluator::new(self.component, self.catalog).evaluate(env)?;
        self.resolve_with(node, &resolution)
    }

    /// Resolve every node's style, in pre-order.
    pub fn resolve_all(&self, env: &Environment) -> Result<IndexMap<String, StyleMap>, ResolveError> {
        let resolution = Evaluator::new(self.component, self.catalog).evaluate(env)?;
        self.component
            .tree()
            .iter()
            .map(|node| Ok::<_, ResolveError>((node.id.clone(), self.resolve_with(node, &resolution)?)))
            .collect()
    }

    /// Resolve one node against precomputed variable values.
    pub fn resolve_with(
        &self,
        node: &RenderNode,
        resolution: &Resolution,
    ) -> Result<StyleMap, ResolveError> {
        let mut style = StyleMap::new();

        let text_style = match node.bindings.get(&StyleKey::TextStyle) {
            Some(id) => Some(bound(resolution, id, node)?),
            None => node.style.get(StyleKey::TextStyle),
        };
        if let Some(value) = text_style {
            self.spread(&mut style, value, node)?;
        }

        for (key, value) in node.style.iter() {
            if *key != StyleKey::TextStyle {
                let subject = format!("{}.{}", node.id, key);
                style.insert(*key, resolve_value(self.catalog, value, subject)?);
            }
        }

        for (key, id) in &node.bindings {
            if *key != StyleKey::TextStyle {
                let value = bound(resolution, id, node)?;
                style.insert(*key, resolve_value(self.catalog, value, id)?);
            }
        }
        Ok(style)
    }

    /// Concrete text of a node, if it has any.
    pub fn resolve_text(
        &self,
        node: &RenderNode,
        resolution: &Resolution,
    ) -> Result<Option<String>, ResolveError> {
        match &node.text {
            None => Ok(None),
            Some(TextContent::Static(text)) => Ok(Some(text.clone())),
            Some(TextContent::Bound(id)) => Ok(bound(resolution, id, node)?
                .as_str()
                .map(str::to_string)),
        }
    }

    fn spread(&self, style: &mut StyleMap, value: &Value, node: &RenderNode) -> Result<(), ResolveError> {
        let token = value
            .as_token()
            .filter(|token| token.category == TokenCategory::TextStyle)
            .ok_or_else(|| {
                ValidateError::type_mismatch(
                    format!("{}.textStyle", node.id),
                    "text style token",
                    value.type_name(),
                )
            })?;
        let properties = self.catalog.text_style(&token.name).ok_or_else(|| {
            ResolveError::unknown_token(&token.name, token.category, format!("{}.textStyle", node.id))
        })?;
        for (key, value) in properties.iter() {
            let subject = format!("{}.{}", token.name, key);
            style.insert(*key, resolve_value(self.catalog, value, subject)?);
        }
        Ok(())
    }

    fn node(&self, id: &str) -> Result<&'a RenderNode, ResolveError> {
        self.component
            .tree()
            .find(id)
            .ok_or_else(|| ValidateError::unresolved(id, self.component.name()).into())
    }
}

fn bound<'r>(
    resolution: &'r Resolution,
    id: &VariableId,
    node: &RenderNode,
) -> Result<&'r Value, ResolveError> {
    resolution
        .get(id)
        .ok_or_else(|| ValidateError::unresolved(id, &node.id).into())
}
