//! Structural and reference validation.
//!
//! Runs before any resolution or emission. Checks that the tree is a
//! single rooted tree with unique identifiers, that every reference in the
//! logic and the bindings names something declared, that values fit their
//! declared types, and that variable dependencies are acyclic. Every name
//! that ends up in emitted code must be a plain identifier.

use convert_case::{Case, Casing};
use indexmap::{IndexMap, IndexSet};
use sprout_core::{
    CompareOp, Component, Condition, Expr, Parameter, PrimitiveKind, RenderNode, Statement,
    TextContent, TokenCategory, ValidateError, Value, ValueType, Variable, VariableId,
};

/// Validate a component. The first problem found is returned.
pub fn validate(component: &Component) -> Result<(), ValidateError> {
    let validator = ReferenceValidator::new(component)?;
    validator.check_parameters()?;
    validator.check_variables()?;
    validator.check_body(&component.logic().body)?;
    for node in component.tree().iter() {
        validator.check_node(node)?;
    }
    validator.check_acyclic()?;
    Ok(())
}

struct ReferenceValidator<'a> {
    component: &'a Component,
    parameters: IndexMap<&'a str, &'a Parameter>,
    variables: IndexMap<&'a VariableId, &'a Variable>,
    /// Implicit hover/press variables of interactive nodes.
    interaction: IndexSet<VariableId>,
    /// Scratch slots of event handlers (`Inner.onPress`).
    handlers: IndexSet<VariableId>,
    nodes: IndexSet<&'a str>,
}

impl<'a> ReferenceValidator<'a> {
    fn new(component: &'a Component) -> Result<Self, ValidateError> {
        let mut nodes = IndexSet::new();
        let mut entries: IndexMap<String, &str> = IndexMap::new();
        let mut interaction = IndexSet::new();
        let mut handlers = IndexSet::new();
        for node in component.tree().iter() {
            if !is_identifier(&node.id) {
                return Err(ValidateError::malformed(
                    &node.id,
                    "node identifiers must be plain identifiers",
                ));
            }
            if !nodes.insert(node.id.as_str()) {
                return Err(ValidateError::malformed(&node.id, "duplicate node identifier"));
            }
            if let Some(other) = entries.insert(entry_name(&node.id), &node.id) {
                return Err(ValidateError::malformed(
                    &node.id,
                    format!("style entry '{}' is also used by '{other}'", entry_name(&node.id)),
                ));
            }
            interaction.extend(node.interaction_variables());
            handlers.extend(
                node.events
                    .keys()
                    .map(|event| VariableId::new(&node.id, event.attribute())),
            );
        }

        let mut parameters = IndexMap::new();
        for parameter in &component.logic().parameters {
            if !is_identifier(&parameter.name) {
                return Err(ValidateError::malformed(
                    component.name(),
                    format!("parameter '{}' is not a plain identifier", parameter.name),
                ));
            }
            if parameters.insert(parameter.name.as_str(), parameter).is_some() {
                return Err(ValidateError::malformed(
                    component.name(),
                    format!("parameter '{}' is declared twice", parameter.name),
                ));
            }
        }

        let mut variables = IndexMap::new();
        for variable in &component.logic().variables {
            if !is_identifier(&variable.id.property) {
                return Err(ValidateError::malformed(
                    &variable.id,
                    format!("property '{}' is not a plain identifier", variable.id.property),
                ));
            }
            if interaction.contains(&variable.id) {
                return Err(ValidateError::malformed(
                    &variable.id,
                    "variable shadows an interaction state",
                ));
            }
            if handlers.contains(&variable.id) {
                return Err(ValidateError::malformed(
                    &variable.id,
                    "variable shadows an event handler",
                ));
            }
            if variables.insert(&variable.id, variable).is_some() {
                return Err(ValidateError::malformed(&variable.id, "variable is declared twice"));
            }
        }

        Ok(Self {
            component,
            parameters,
            variables,
            interaction,
            handlers,
            nodes,
        })
    }

    fn check_parameters(&self) -> Result<(), ValidateError> {
        for parameter in self.parameters.values() {
            if let Some(default) = &parameter.default {
                if !default.conforms_to(&parameter.ty) {
                    return Err(ValidateError::type_mismatch(
                        format!("parameter '{}'", parameter.name),
                        &parameter.ty,
                        default.type_name(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Defaults run in declaration order, so a default may only read
    /// interaction states and variables declared before it.
    fn check_variables(&self) -> Result<(), ValidateError> {
        for (index, variable) in self.variables.values().enumerate() {
            if !self.nodes.contains(variable.id.node.as_str()) {
                return Err(ValidateError::unresolved(&variable.id.node, &variable.id));
            }
            self.check_expr(&variable.default, &variable.ty, &variable.id)?;
            for read in variable.default.variables() {
                let seeded = self.interaction.contains(read)
                    || self.variables.get_index_of(read).is_some_and(|i| i < index);
                if !seeded {
                    return Err(ValidateError::malformed(
                        &variable.id,
                        format!("default reads '{read}' before it is assigned"),
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_body(&self, body: &[Statement]) -> Result<(), ValidateError> {
        for statement in body {
            match statement {
                Statement::Assign { target, .. } if self.interaction.contains(target) => {
                    return Err(ValidateError::malformed(
                        &target.node,
                        format!("interaction state '{target}' cannot be assigned"),
                    ));
                }
                Statement::Assign { target, value } => {
                    let variable = self
                        .variables
                        .get(target)
                        .ok_or_else(|| ValidateError::unresolved(target, "assignment target"))?;
                    self.check_expr(value, &variable.ty, target)?;
                }
                Statement::If {
                    condition,
                    then,
                    otherwise,
                } => {
                    self.check_condition(condition)?;
                    self.check_body(then)?;
                    self.check_body(otherwise)?;
                }
            }
        }
        Ok(())
    }

    fn check_node(&self, node: &RenderNode) -> Result<(), ValidateError> {
        for (key, value) in node.style.iter() {
            if !value.conforms_to(&key.value_type()) {
                return Err(ValidateError::type_mismatch(
                    format!("{}.{}", node.id, key),
                    key.value_type(),
                    value.type_name(),
                ));
            }
        }

        for (key, id) in &node.bindings {
            let ty = self.type_of_variable(id, &format!("binding {}.{}", node.id, key))?;
            if !assignable(&ty, &key.value_type()) {
                return Err(ValidateError::type_mismatch(
                    format!("binding {}.{}", node.id, key),
                    key.value_type(),
                    ty,
                ));
            }
        }

        match (&node.text, node.kind) {
            (Some(TextContent::Bound(id)), PrimitiveKind::Text) => {
                let ty = self.type_of_variable(id, &format!("text of {}", node.id))?;
                if ty != ValueType::String {
                    return Err(ValidateError::type_mismatch(
                        format!("text of {}", node.id),
                        ValueType::String,
                        ty,
                    ));
                }
            }
            (Some(_), kind) if kind != PrimitiveKind::Text => {
                return Err(ValidateError::malformed(&node.id, format!("a {kind} cannot hold text")));
            }
            _ => {}
        }

        for (event, handler) in &node.events {
            if node.kind != PrimitiveKind::InteractiveBox {
                return Err(ValidateError::malformed(
                    &node.id,
                    format!("{} requires an interactive box", event.attribute()),
                ));
            }
            let parameter = self
                .parameters
                .get(handler.as_str())
                .ok_or_else(|| ValidateError::unresolved(handler, format!("{}.{}", node.id, event.attribute())))?;
            if parameter.ty != ValueType::Handler {
                return Err(ValidateError::type_mismatch(
                    format!("{}.{}", node.id, event.attribute()),
                    ValueType::Handler,
                    &parameter.ty,
                ));
            }
        }
        Ok(())
    }

    fn check_condition(&self, condition: &Condition) -> Result<(), ValidateError> {
        match condition {
            Condition::Test(expr) => self.check_expr(expr, &ValueType::Bool, "condition"),
            Condition::Not(inner) => self.check_condition(inner),
            Condition::All(parts) | Condition::Any(parts) => {
                parts.iter().try_for_each(|part| self.check_condition(part))
            }
            Condition::Compare { left, op, right } => {
                let lhs = self.type_of(left, "comparison")?;
                let rhs = self.type_of(right, "comparison")?;
                if !comparable(&lhs, &rhs) {
                    return Err(ValidateError::type_mismatch("comparison", lhs, rhs));
                }
                if op.is_ordering() && lhs != ValueType::Number {
                    return Err(ValidateError::type_mismatch(
                        format!("{op:?} comparison"),
                        ValueType::Number,
                        lhs,
                    ));
                }
                if matches!(op, CompareOp::Eq | CompareOp::Ne)
                    && matches!(lhs, ValueType::Handler | ValueType::TextStyle)
                {
                    return Err(ValidateError::type_mismatch("comparison", "comparable value", lhs));
                }
                Ok(())
            }
        }
    }

    fn check_expr(
        &self,
        expr: &Expr,
        expected: &ValueType,
        subject: impl ToString,
    ) -> Result<(), ValidateError> {
        match expr {
            Expr::Literal(_) | Expr::Token(_) if !self.literal_conforms(expr, expected) => {
                Err(ValidateError::type_mismatch(
                    subject,
                    expected,
                    literal_type_name(expr),
                ))
            }
            Expr::Literal(_) | Expr::Token(_) => Ok(()),
            Expr::Param(_) | Expr::Var(_) => {
                let subject = subject.to_string();
                let found = self.type_of(expr, &subject)?;
                if assignable(&found, expected) {
                    Ok(())
                } else {
                    Err(ValidateError::type_mismatch(subject, expected, found))
                }
            }
        }
    }

    fn literal_conforms(&self, expr: &Expr, expected: &ValueType) -> bool {
        match expr {
            Expr::Literal(value) => value.conforms_to(expected),
            Expr::Token(token) => Value::Token(token.clone()).conforms_to(expected),
            _ => false,
        }
    }

    fn type_of(&self, expr: &Expr, subject: &str) -> Result<ValueType, ValidateError> {
        match expr {
            Expr::Literal(value) => Ok(literal_type(value)),
            Expr::Token(token) => Ok(literal_type(&Value::Token(token.clone()))),
            Expr::Param(name) => self
                .parameters
                .get(name.as_str())
                .map(|p| p.ty.clone())
                .ok_or_else(|| ValidateError::unresolved(name, subject)),
            Expr::Var(id) => self.type_of_variable(id, subject),
        }
    }

    fn type_of_variable(&self, id: &VariableId, subject: &str) -> Result<ValueType, ValidateError> {
        if let Some(variable) = self.variables.get(id) {
            return Ok(variable.ty.clone());
        }
        if self.interaction.contains(id) {
            return Ok(ValueType::Bool);
        }
        Err(ValidateError::unresolved(id, subject))
    }

    fn check_acyclic(&self) -> Result<(), ValidateError> {
        let graph = self.component.logic().dependency_graph();
        let mut done: IndexSet<&VariableId> = IndexSet::new();
        let mut path: Vec<&VariableId> = Vec::new();

        fn visit<'g>(
            id: &'g VariableId,
            graph: &'g IndexMap<VariableId, Vec<VariableId>>,
            done: &mut IndexSet<&'g VariableId>,
            path: &mut Vec<&'g VariableId>,
        ) -> Result<(), ValidateError> {
            if done.contains(id) {
                return Ok(());
            }
            if let Some(start) = path.iter().position(|p| *p == id) {
                let cycle: Vec<String> = path[start..]
                    .iter()
                    .chain(std::iter::once(&id))
                    .map(|v| v.to_string())
                    .collect();
                return Err(ValidateError::malformed(
                    id,
                    format!("cyclic variable dependency: {}", cycle.join(" -> ")),
                ));
            }
            path.push(id);
            if let Some(deps) = graph.get(id) {
                for dep in deps {
                    visit(dep, graph, done, path)?;
                }
            }
            path.pop();
            done.insert(id);
            Ok(())
        }

        for id in graph.keys() {
            visit(id, &graph, &mut done, &mut path)?;
        }
        Ok(())
    }
}

fn literal_type(value: &Value) -> ValueType {
    match value {
        Value::Bool(_) => ValueType::Bool,
        Value::Number(_) => ValueType::Number,
        Value::String(_) => ValueType::String,
        Value::Color(_) => ValueType::Color,
        Value::Enum(_) => ValueType::Keyword,
        Value::Token(token) => match token.category {
            TokenCategory::Color => ValueType::Color,
            TokenCategory::TextStyle => ValueType::TextStyle,
        },
    }
}

fn literal_type_name(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => value.type_name(),
        Expr::Token(token) => Value::Token(token.clone()).type_name(),
        Expr::Param(name) => format!("parameter '{name}'"),
        Expr::Var(id) => format!("variable '{id}'"),
    }
}

/// Whether a value of type `from` may be stored in a slot of type `to`.
fn assignable(from: &ValueType, to: &ValueType) -> bool {
    from == to || (matches!(from, ValueType::Enum(_)) && *to == ValueType::Keyword)
}

fn comparable(a: &ValueType, b: &ValueType) -> bool {
    a == b || assignable(a, b) || assignable(b, a)
}

/// Styles-table key for a node id (`InnerText` -> `innerText`).
pub fn entry_name(id: &str) -> String {
    id.to_case(Case::Camel)
}

/// Node ids become parts of emitted identifiers (`Inner$backgroundColor`).
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
