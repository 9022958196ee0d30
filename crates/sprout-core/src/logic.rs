//! Logic IR: parameters, node-scoped variables, and guarded assignments.
//!
//! A component's logic is an ordered statement list read top to bottom.
//! Each variable starts at its unconditional default, and every assignment
//! whose guards hold overwrites the current value. The last satisfied
//! assignment in textual order wins.

use crate::style::StyleKey;
use crate::tokens::TokenReference;
use crate::types::{Color, Value, ValueType};
use indexmap::IndexMap;
use std::fmt;

/// A component parameter (a prop supplied by the host).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: ValueType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Identifier of a variable scoped to a render node, e.g. `Inner.backgroundColor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableId {
    pub node: String,
    pub property: String,
}

impl VariableId {
    pub fn new(node: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            property: property.into(),
        }
    }

    /// Parse the dotted form `Node.property`.
    pub fn parse(text: &str) -> Option<Self> {
        let (node, property) = text.split_once('.')?;
        if node.is_empty() || property.is_empty() {
            return None;
        }
        Some(Self::new(node, property))
    }

    /// The same node's variable for another property.
    pub fn sibling(&self, property: impl Into<String>) -> Self {
        Self::new(self.node.clone(), property)
    }

    /// The shorthand style key this variable targets, if any.
    pub fn shorthand(&self) -> Option<StyleKey> {
        StyleKey::from_name(&self.property).filter(StyleKey::is_shorthand)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node, self.property)
    }
}

/// A declared variable with its unconditional default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub id: VariableId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: ValueType,
    pub default: Expr,
}

impl Variable {
    pub fn new(id: VariableId, ty: ValueType, default: impl Into<Expr>) -> Self {
        Self {
            id,
            ty,
            default: default.into(),
        }
    }
}

/// The value side of an assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Expr {
    Literal(Value),
    Param(String),
    Var(VariableId),
    Token(TokenReference),
}

impl Expr {
    pub fn param(name: impl Into<String>) -> Self {
        Expr::Param(name.into())
    }

    pub fn var(node: impl Into<String>, property: impl Into<String>) -> Self {
        Expr::Var(VariableId::new(node, property))
    }

    /// Variables this expression reads.
    pub fn variables(&self) -> impl Iterator<Item = &VariableId> {
        match self {
            Expr::Var(id) => Some(id),
            _ => None,
        }
        .into_iter()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Token(token) => Expr::Token(token),
            other => Expr::Literal(other),
        }
    }
}

macro_rules! expr_from_literal {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Expr {
            fn from(value: $ty) -> Self {
                Expr::from(Value::from(value))
            }
        })*
    };
}

expr_from_literal!(bool, f64, i32, &str, Color, TokenReference);

/// Comparison operators available to conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn is_ordering(&self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }
}

/// A pure boolean expression over parameters and variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Condition {
    /// A boolean-typed expression.
    Test(Expr),
    Not(Box<Condition>),
    /// Conjunction; evaluated left to right with short-circuit.
    All(Vec<Condition>),
    /// Disjunction; evaluated left to right with short-circuit.
    Any(Vec<Condition>),
    Compare {
        left: Expr,
        op: CompareOp,
        right: Expr,
    },
}

impl Condition {
    /// Test a boolean parameter.
    pub fn param(name: impl Into<String>) -> Self {
        Condition::Test(Expr::param(name))
    }

    /// Test a boolean variable (often an interaction state such as `Inner.hovered`).
    pub fn var(node: impl Into<String>, property: impl Into<String>) -> Self {
        Condition::Test(Expr::var(node, property))
    }

    pub fn negate(self) -> Self {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }

    pub fn compare(left: impl Into<Expr>, op: CompareOp, right: impl Into<Expr>) -> Self {
        Condition::Compare {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    /// Conjunction of two guards, flattening nested conjunctions.
    pub fn and(self, other: Condition) -> Self {
        let mut parts = match self {
            Condition::All(parts) => parts,
            single => vec![single],
        };
        match other {
            Condition::All(more) => parts.extend(more),
            single => parts.push(single),
        }
        Condition::All(parts)
    }

    /// Every expression the condition reads, in reading order.
    pub fn exprs(&self) -> Vec<&Expr> {
        let mut out = Vec::new();
        self.collect_exprs(&mut out);
        out
    }

    fn collect_exprs<'a>(&'a self, out: &mut Vec<&'a Expr>) {
        match self {
            Condition::Test(expr) => out.push(expr),
            Condition::Not(inner) => inner.collect_exprs(out),
            Condition::All(parts) | Condition::Any(parts) => {
                for part in parts {
                    part.collect_exprs(out);
                }
            }
            Condition::Compare { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
        }
    }
}

/// One statement of the logic body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Statement {
    Assign {
        target: VariableId,
        value: Expr,
    },
    If {
        condition: Condition,
        then: Vec<Statement>,
        #[cfg_attr(feature = "serde", serde(default))]
        otherwise: Vec<Statement>,
    },
}

impl Statement {
    pub fn assign(target: VariableId, value: impl Into<Expr>) -> Self {
        Statement::Assign {
            target,
            value: value.into(),
        }
    }

    pub fn when(condition: Condition, then: Vec<Statement>) -> Self {
        Statement::If {
            condition,
            then,
            otherwise: Vec::new(),
        }
    }

    pub fn when_else(condition: Condition, then: Vec<Statement>, otherwise: Vec<Statement>) -> Self {
        Statement::If {
            condition,
            then,
            otherwise,
        }
    }
}

/// A guarded assignment in the per-variable view of the logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Conjunction of the enclosing guards; `None` for unconditional writes.
    pub condition: Option<Condition>,
    pub value: Expr,
}

/// Parameters, variables, and the ordered statement body of a component.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logic {
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<Parameter>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variables: Vec<Variable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: Vec<Statement>,
}

impl Logic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn variable(&self, id: &VariableId) -> Option<&Variable> {
        self.variables.iter().find(|v| &v.id == id)
    }

    /// The ordered assignments to `id`: its default first, then every write
    /// in textual order guarded by the conjunction of its enclosing blocks.
    pub fn assignments(&self, id: &VariableId) -> Vec<Assignment> {
        let mut out = Vec::new();
        if let Some(variable) = self.variable(id) {
            out.push(Assignment {
                condition: None,
                value: variable.default.clone(),
            });
        }
        collect_assignments(&self.body, id, None, &mut out);
        out
    }

    /// Direct dependencies of every variable: the variables read by its
    /// default, by its assigned values, and by the guards around them.
    pub fn dependency_graph(&self) -> IndexMap<VariableId, Vec<VariableId>> {
        let mut graph: IndexMap<VariableId, Vec<VariableId>> = self
            .variables
            .iter()
            .map(|v| (v.id.clone(), v.default.variables().cloned().collect()))
            .collect();
        collect_dependencies(&self.body, &mut Vec::new(), &mut graph);
        graph
    }

    /// Lower shorthand variables (`Inner.margin`) into their four edge
    /// variables, duplicating every write in place.
    pub fn expand_shorthands(self) -> Self {
        if !self.variables.iter().any(|v| v.id.shorthand().is_some()) {
            return self;
        }
        let mut variables = Vec::with_capacity(self.variables.len() + 3);
        for variable in self.variables {
            match variable.id.shorthand().and_then(|key| key.edges()) {
                Some(edges) => {
                    for edge in edges {
                        variables.push(Variable {
                            id: variable.id.sibling(edge.as_str()),
                            ty: variable.ty.clone(),
                            default: variable.default.clone(),
                        });
                    }
                }
                None => variables.push(variable),
            }
        }
        Self {
            parameters: self.parameters,
            variables,
            body: expand_statements(self.body),
        }
    }
}

fn collect_assignments(
    body: &[Statement],
    id: &VariableId,
    guard: Option<&Condition>,
    out: &mut Vec<Assignment>,
) {
    for statement in body {
        match statement {
            Statement::Assign { target, value } if target == id => out.push(Assignment {
                condition: guard.cloned(),
                value: value.clone(),
            }),
            Statement::Assign { .. } => {}
            Statement::If {
                condition,
                then,
                otherwise,
            } => {
                let positive = join_guard(guard, condition.clone());
                collect_assignments(then, id, Some(&positive), out);
                if !otherwise.is_empty() {
                    let negative = join_guard(guard, condition.clone().negate());
                    collect_assignments(otherwise, id, Some(&negative), out);
                }
            }
        }
    }
}

fn join_guard(outer: Option<&Condition>, inner: Condition) -> Condition {
    match outer {
        Some(outer) => outer.clone().and(inner),
        None => inner,
    }
}

fn collect_dependencies(
    body: &[Statement],
    guards: &mut Vec<VariableId>,
    graph: &mut IndexMap<VariableId, Vec<VariableId>>,
) {
    for statement in body {
        match statement {
            Statement::Assign { target, value } => {
                let deps = graph.entry(target.clone()).or_default();
                for dep in value.variables().chain(guards.iter()) {
                    if !deps.contains(dep) {
                        deps.push(dep.clone());
                    }
                }
            }
            Statement::If {
                condition,
                then,
                otherwise,
            } => {
                let mark = guards.len();
                for expr in condition.exprs() {
                    guards.extend(expr.variables().cloned());
                }
                collect_dependencies(then, guards, graph);
                collect_dependencies(otherwise, guards, graph);
                guards.truncate(mark);
            }
        }
    }
}

fn expand_statements(body: Vec<Statement>) -> Vec<Statement> {
    let mut out = Vec::with_capacity(body.len());
    for statement in body {
        match statement {
            Statement::Assign { target, value } => {
                match target.shorthand().and_then(|key| key.edges()) {
                    Some(edges) => {
                        for edge in edges {
                            out.push(Statement::Assign {
                                target: target.sibling(edge.as_str()),
                                value: value.clone(),
                            });
                        }
                    }
                    None => out.push(Statement::Assign { target, value }),
                }
            }
            Statement::If {
                condition,
                then,
                otherwise,
            } => out.push(Statement::If {
                condition,
                then: expand_statements(then),
                otherwise: expand_statements(otherwise),
            }),
        }
    }
    out
}
