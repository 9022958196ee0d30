//! Render tree model.

use crate::logic::VariableId;
use crate::style::{StyleKey, StyleMap};
use crate::types::Value;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Primitive element kinds shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrimitiveKind {
    Box,
    Text,
    /// A box that reports hover/press state and accepts event handlers.
    InteractiveBox,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Box => write!(f, "box"),
            PrimitiveKind::Text => write!(f, "text"),
            PrimitiveKind::InteractiveBox => write!(f, "interactive_box"),
        }
    }
}

/// Runtime-provided interaction states of an interactive box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionState {
    Hovered,
    Pressed,
}

impl InteractionState {
    pub const ALL: [InteractionState; 2] = [InteractionState::Hovered, InteractionState::Pressed];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Hovered => "hovered",
            InteractionState::Pressed => "pressed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// The implicit variable carrying this state on `node`.
    pub fn variable(&self, node: &str) -> VariableId {
        VariableId::new(node, self.as_str())
    }
}

/// Events a node can bind to a handler parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    Press,
}

impl EventKind {
    /// The handler attribute name (`onPress`).
    pub fn attribute(&self) -> &'static str {
        match self {
            EventKind::Press => "onPress",
        }
    }
}

/// Text content of a text node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextContent {
    Static(String),
    Bound(VariableId),
}

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderNode {
    pub id: String,
    pub kind: PrimitiveKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleMap,
    /// Dynamic style bindings; a bound key always wins over the static one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bindings: IndexMap<StyleKey, VariableId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<TextContent>,
    /// Event bindings to handler parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: IndexMap<EventKind, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(id: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            id: id.into(),
            kind,
            style: StyleMap::new(),
            bindings: IndexMap::new(),
            text: None,
            events: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn view(id: impl Into<String>) -> Self {
        Self::new(id, PrimitiveKind::Box)
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, PrimitiveKind::Text)
    }

    pub fn interactive(id: impl Into<String>) -> Self {
        Self::new(id, PrimitiveKind::InteractiveBox)
    }

    /// Add a static style property (shorthands fan out).
    pub fn with_style(mut self, key: StyleKey, value: impl Into<Value>) -> Self {
        self.style.insert(key, value.into());
        self
    }

    /// Bind a style key to a variable of this node named after the key.
    ///
    /// A shorthand binds all four edges to their edge variables
    /// (`Inner.marginTop`, ...), matching [`crate::Logic::expand_shorthands`].
    pub fn bind(mut self, key: StyleKey) -> Self {
        match key.edges() {
            Some(edges) => {
                for edge in edges {
                    self.bindings
                        .insert(edge, VariableId::new(self.id.clone(), edge.as_str()));
                }
            }
            None => {
                self.bindings
                    .insert(key, VariableId::new(self.id.clone(), key.as_str()));
            }
        }
        self
    }

    /// Bind a style key to an arbitrary variable.
    pub fn bind_to(mut self, key: StyleKey, variable: VariableId) -> Self {
        match key.edges() {
            Some(edges) => {
                for edge in edges {
                    self.bindings.insert(edge, variable.sibling(edge.as_str()));
                }
            }
            None => {
                self.bindings.insert(key, variable);
            }
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(TextContent::Static(text.into()));
        self
    }

    pub fn bind_text(mut self, variable: VariableId) -> Self {
        self.text = Some(TextContent::Bound(variable));
        self
    }

    pub fn on(mut self, event: EventKind, handler: impl Into<String>) -> Self {
        self.events.insert(event, handler.into());
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Variables read directly by this node's bindings and text.
    pub fn dependencies(&self) -> IndexSet<VariableId> {
        let mut deps: IndexSet<VariableId> = self.bindings.values().cloned().collect();
        if let Some(TextContent::Bound(id)) = &self.text {
            deps.insert(id.clone());
        }
        deps
    }

    /// Implicit interaction-state variables this node owns.
    pub fn interaction_variables(&self) -> Vec<VariableId> {
        if self.kind == PrimitiveKind::InteractiveBox {
            InteractionState::ALL
                .iter()
                .map(|state| state.variable(&self.id))
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Expand shorthand keys that arrived through deserialization.
    pub fn normalized(mut self) -> Self {
        self.style = self.style.normalized();
        if self.bindings.keys().any(StyleKey::is_shorthand) {
            let raw = std::mem::take(&mut self.bindings);
            for (key, variable) in raw {
                self = self.bind_to(key, variable);
            }
        }
        self.children = self.children.into_iter().map(RenderNode::normalized).collect();
        self
    }
}

/// A rooted render tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RenderTree {
    root: RenderNode,
}

impl RenderTree {
    pub fn new(root: RenderNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RenderNode {
        &self.root
    }

    /// Pre-order traversal. Each call starts a fresh walk.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![&self.root],
        }
    }

    pub fn find(&self, id: &str) -> Option<&RenderNode> {
        self.iter().find(|node| node.id == id)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn into_root(self) -> RenderNode {
        self.root
    }
}

impl<'a> IntoIterator for &'a RenderTree {
    type Item = &'a RenderNode;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy pre-order iterator over a render tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> RenderTree {
        RenderTree::new(
            RenderNode::view("View")
                .with_child(
                    RenderNode::view("View1")
                        .with_child(RenderNode::view("View4"))
                        .with_child(RenderNode::view("View5")),
                )
                .with_child(RenderNode::text("Label").with_text("Hi")),
        )
    }

    #[test]
    fn test_pre_order() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["View", "View1", "View4", "View5", "Label"]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let tree = sample_tree();
        let first: Vec<_> = tree.iter().map(|n| n.id.clone()).collect();
        let second: Vec<_> = tree.iter().map(|n| n.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_bind_margin_fans_out() {
        let node = RenderNode::view("Inner").bind(StyleKey::Margin);
        let keys: Vec<StyleKey> = node.bindings.keys().copied().collect();
        assert_eq!(
            keys,
            [StyleKey::MarginTop, StyleKey::MarginRight, StyleKey::MarginBottom, StyleKey::MarginLeft]
        );
        assert_eq!(node.bindings[&StyleKey::MarginLeft], VariableId::new("Inner", "marginLeft"));
    }

    #[test]
    fn test_dependencies() {
        let node = RenderNode::text("InnerText")
            .bind(StyleKey::Color)
            .bind_text(VariableId::new("InnerText", "text"));
        let deps = node.dependencies();
        assert_eq!(deps.len(), 2);
        assert!(deps.contains(&VariableId::new("InnerText", "color")));
    }

    #[test]
    fn test_interaction_variables() {
        assert_eq!(
            RenderNode::interactive("Outer").interaction_variables(),
            vec![VariableId::new("Outer", "hovered"), VariableId::new("Outer", "pressed")]
        );
        assert!(RenderNode::view("Outer").interaction_variables().is_empty());
    }
}
