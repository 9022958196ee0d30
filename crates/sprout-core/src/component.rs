//! Components and evaluation environments.

use crate::logic::{Logic, VariableId};
use crate::tree::{InteractionState, RenderNode, RenderTree};
use crate::types::Value;
use indexmap::{IndexMap, IndexSet};

/// A component description: logic plus render tree.
///
/// Construction lowers shorthand styles and bindings, so every later
/// phase only sees independent edge keys.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawComponent", into = "RawComponent"))]
pub struct Component {
    name: String,
    logic: Logic,
    tree: RenderTree,
}

impl Component {
    pub fn new(name: impl Into<String>, logic: Logic, root: RenderNode) -> Self {
        Self {
            name: name.into(),
            logic: logic.expand_shorthands(),
            tree: RenderTree::new(root.normalized()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logic(&self) -> &Logic {
        &self.logic
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Every variable a node depends on, directly or through the logic.
    pub fn dependency_closure(&self, node: &RenderNode) -> IndexSet<VariableId> {
        let graph = self.logic.dependency_graph();
        let mut seen = IndexSet::new();
        let mut pending: Vec<VariableId> = node.dependencies().into_iter().collect();
        while let Some(id) = pending.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(deps) = graph.get(&id) {
                pending.extend(deps.iter().filter(|d| !seen.contains(*d)).cloned());
            }
        }
        seen
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawComponent {
    name: String,
    #[serde(default)]
    logic: Logic,
    root: RenderNode,
}

#[cfg(feature = "serde")]
impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        Component::new(raw.name, raw.logic, raw.root)
    }
}

#[cfg(feature = "serde")]
impl From<Component> for RawComponent {
    fn from(component: Component) -> Self {
        RawComponent {
            name: component.name,
            logic: component.logic,
            root: component.tree.into_root(),
        }
    }
}

/// Concrete inputs for one evaluation: parameter values and the set of
/// active interaction states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    params: IndexMap<String, Value>,
    states: IndexSet<VariableId>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_state(mut self, node: &str, state: InteractionState) -> Self {
        self.states.insert(state.variable(node));
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    pub fn params(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.params.iter()
    }

    pub fn is_active(&self, state: &VariableId) -> bool {
        self.states.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Expr, Parameter, Statement, Variable};
    use crate::style::StyleKey;
    use crate::types::ValueType;

    #[test]
    fn test_new_lowers_margin_shorthand() {
        let logic = Logic::new()
            .with_parameter(Parameter::new("margin", ValueType::Number))
            .with_variable(Variable::new(VariableId::new("Inner", "margin"), ValueType::Number, 0))
            .with_statement(Statement::assign(VariableId::new("Inner", "margin"), Expr::param("margin")));
        let root = RenderNode::view("Outer")
            .with_style(StyleKey::Padding, 4)
            .with_child(RenderNode::view("Inner").bind(StyleKey::Margin));

        let component = Component::new("BoxModelConditional", logic, root);

        assert_eq!(component.logic().variables.len(), 4);
        assert_eq!(component.tree().root().style.len(), 4);
        let inner = component.tree().find("Inner").unwrap();
        assert_eq!(inner.bindings.len(), 4);
        for (key, var) in &inner.bindings {
            assert!(component.logic().variable(var).is_some(), "{key} is unbound");
        }
    }

    #[test]
    fn test_dependency_closure_follows_guards() {
        let logic = Logic::new()
            .with_variable(Variable::new(VariableId::new("Label", "text"), ValueType::String, ""))
            .with_statement(Statement::when(
                crate::logic::Condition::var("Button", "pressed"),
                vec![Statement::assign(VariableId::new("Label", "text"), "Pressed")],
            ));
        let root = RenderNode::interactive("Button")
            .with_child(RenderNode::text("Label").bind_text(VariableId::new("Label", "text")));
        let component = Component::new("Button", logic, root);

        let label = component.tree().find("Label").unwrap();
        let closure = component.dependency_closure(label);
        assert!(closure.contains(&VariableId::new("Label", "text")));
        assert!(closure.contains(&VariableId::new("Button", "pressed")));
    }

    #[test]
    fn test_environment_states() {
        let env = Environment::new()
            .with_param("enabled", true)
            .with_state("Inner", InteractionState::Hovered);
        assert_eq!(env.param("enabled"), Some(&Value::Bool(true)));
        assert!(env.is_active(&VariableId::new("Inner", "hovered")));
        assert!(!env.is_active(&VariableId::new("Inner", "pressed")));
    }
}
