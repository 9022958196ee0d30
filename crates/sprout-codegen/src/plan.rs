//! Backend-agnostic style plans.
//!
//! A plan fixes, for one node, what goes into its styles-table entry and
//! which overrides follow it in the emitted `[entry, { ...overrides }]`
//! array. Writers only choose the syntax. [`StylePlan::evaluate`] replays a
//! plan the way the emitted code would run, which lets tests compare it
//! with the style resolver.

use indexmap::IndexMap;
use sprout_core::{
    Component, RenderNode, ResolveError, StyleKey, StyleMap, TokenCatalog, TokenCategory,
    ValidateError, Value, VariableId,
};
pub use sprout_resolver::entry_name;
use sprout_resolver::{resolve_value, Resolution};

/// Where a planned value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    Static(Value),
    Variable(VariableId),
}

/// One member of a style object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// `...textStyles.headline` or `...Text$textStyle`
    Spread(StyleSource),
    /// `key: value`
    Property { key: StyleKey, source: StyleSource },
}

/// Planned style of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePlan {
    pub node: String,
    /// Key of the node's styles-table entry.
    pub entry: String,
    /// Static members of the table entry. None of them is dynamically bound.
    pub table: Vec<StyleEntry>,
    /// Members of the inline override object, applied after the entry.
    pub overrides: Vec<StyleEntry>,
}

impl StylePlan {
    pub fn new(node: &RenderNode, catalog: &TokenCatalog) -> Self {
        let dynamic_text_style = node.bindings.get(&StyleKey::TextStyle);
        let mut table = Vec::new();
        let mut overrides = Vec::new();

        if dynamic_text_style.is_none() {
            if let Some(value) = node.style.get(StyleKey::TextStyle) {
                table.push(StyleEntry::Spread(StyleSource::Static(value.clone())));
            }
        }
        for (key, value) in node.style.iter() {
            if *key == StyleKey::TextStyle || node.bindings.contains_key(key) {
                continue;
            }
            table.push(StyleEntry::Property {
                key: *key,
                source: StyleSource::Static(value.clone()),
            });
        }

        if let Some(id) = dynamic_text_style {
            overrides.push(StyleEntry::Spread(StyleSource::Variable(id.clone())));
            // The spread runs after the entry, so local keys it could shadow
            // are asserted again.
            let shadowed = catalog.text_style_keys();
            for (key, value) in node.style.iter() {
                if shadowed.contains(key) && !node.bindings.contains_key(key) {
                    overrides.push(StyleEntry::Property {
                        key: *key,
                        source: StyleSource::Static(value.clone()),
                    });
                }
            }
        }
        for (key, id) in &node.bindings {
            if *key != StyleKey::TextStyle {
                overrides.push(StyleEntry::Property {
                    key: *key,
                    source: StyleSource::Variable(id.clone()),
                });
            }
        }

        Self {
            node: node.id.clone(),
            entry: entry_name(&node.id),
            table,
            overrides,
        }
    }

    /// The style the emitted code produces for `resolution`.
    pub fn evaluate(
        &self,
        resolution: &Resolution,
        catalog: &TokenCatalog,
    ) -> Result<StyleMap, ResolveError> {
        let mut style = StyleMap::new();
        for entry in self.table.iter().chain(&self.overrides) {
            match entry {
                StyleEntry::Spread(source) => {
                    let value = self.value(source, resolution)?;
                    let token = value
                        .as_token()
                        .filter(|t| t.category == TokenCategory::TextStyle)
                        .ok_or_else(|| {
                            ValidateError::type_mismatch(
                                format!("{}.textStyle", self.node),
                                "text style token",
                                value.type_name(),
                            )
                        })?;
                    let properties = catalog.text_style(&token.name).ok_or_else(|| {
                        ResolveError::unknown_token(&token.name, token.category, &self.node)
                    })?;
                    for (key, value) in properties.iter() {
                        style.insert(*key, resolve_value(catalog, value, &token.name)?);
                    }
                }
                StyleEntry::Property { key, source } => {
                    let value = self.value(source, resolution)?;
                    let subject = format!("{}.{}", self.node, key);
                    style.insert(*key, resolve_value(catalog, value, subject)?);
                }
            }
        }
        Ok(style)
    }

    fn value<'v>(
        &'v self,
        source: &'v StyleSource,
        resolution: &'v Resolution,
    ) -> Result<&'v Value, ResolveError> {
        match source {
            StyleSource::Static(value) => Ok(value),
            StyleSource::Variable(id) => resolution
                .get(id)
                .ok_or_else(|| ValidateError::unresolved(id, &self.node).into()),
        }
    }
}

/// Plans for every node in pre-order, keyed by node id.
///
/// Fails with `MalformedTree` when two nodes map to the same table entry.
pub fn plan_component(
    component: &Component,
    catalog: &TokenCatalog,
) -> Result<IndexMap<String, StylePlan>, ValidateError> {
    let mut plans: IndexMap<String, StylePlan> = IndexMap::new();
    let mut entries: IndexMap<String, String> = IndexMap::new();
    for node in component.tree() {
        let plan = StylePlan::new(node, catalog);
        if let Some(other) = entries.insert(plan.entry.clone(), node.id.clone()) {
            return Err(ValidateError::malformed(
                &node.id,
                format!("style entry '{}' is also used by '{other}'", plan.entry),
            ));
        }
        plans.insert(node.id.clone(), plan);
    }
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::{Color, Logic, TokenReference};

    fn catalog() -> TokenCatalog {
        TokenCatalog::new()
            .with_color("red500", Color::rgb(0xF4, 0x43, 0x36))
            .with_text_style(
                "headline",
                StyleMap::new().with(StyleKey::FontSize, 24).with(StyleKey::Color, Color::BLACK),
            )
    }

    #[test]
    fn test_bound_keys_leave_the_table() {
        let node = RenderNode::view("Inner")
            .with_style(StyleKey::BackgroundColor, Color::rgb(0xD8, 0xD8, 0xD8))
            .with_style(StyleKey::Width, 60)
            .bind(StyleKey::Width);
        let plan = StylePlan::new(&node, &catalog());

        assert_eq!(plan.entry, "inner");
        assert_eq!(plan.table.len(), 1);
        assert_eq!(
            plan.overrides,
            vec![StyleEntry::Property {
                key: StyleKey::Width,
                source: StyleSource::Variable(VariableId::new("Inner", "width")),
            }]
        );
    }

    #[test]
    fn test_static_text_style_spreads_first() {
        let node = RenderNode::text("Title")
            .with_style(StyleKey::Color, TokenReference::color("red500"))
            .with_style(StyleKey::TextStyle, TokenReference::text_style("headline"));
        let plan = StylePlan::new(&node, &catalog());
        assert!(matches!(plan.table[0], StyleEntry::Spread(StyleSource::Static(_))));
        assert!(plan.overrides.is_empty());
    }

    #[test]
    fn test_dynamic_text_style_reasserts_shadowed_keys() {
        let node = RenderNode::text("Text")
            .with_style(StyleKey::Color, TokenReference::color("red500"))
            .with_style(StyleKey::Width, 10)
            .bind(StyleKey::TextStyle);
        let plan = StylePlan::new(&node, &catalog());

        assert_eq!(plan.table.len(), 2);
        assert_eq!(plan.overrides.len(), 2);
        assert_eq!(
            plan.overrides[1],
            StyleEntry::Property {
                key: StyleKey::Color,
                source: StyleSource::Static(Value::Token(TokenReference::color("red500"))),
            }
        );
    }

    #[test]
    fn test_entry_collision_is_malformed() {
        let root = RenderNode::view("Outer").with_child(RenderNode::view("outer"));
        let component = Component::new("Test", Logic::new(), root);
        let err = plan_component(&component, &catalog()).unwrap_err();
        assert!(matches!(err, ValidateError::MalformedTree { ref node, .. } if node == "outer"));
    }

    #[test]
    fn test_entry_names() {
        assert_eq!(entry_name("InnerText"), "innerText");
        assert_eq!(entry_name("View1"), "view1");
        assert_eq!(entry_name("View"), "view");
    }
}
