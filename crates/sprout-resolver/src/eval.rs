//! Sequential evaluation of the logic IR.
//!
//! Evaluation mirrors the code the emitters write: every variable is seeded
//! with its default in declaration order, then the body runs top to bottom.
//! An assignment overwrites the current value, so the last satisfied write
//! in textual order wins. Comparisons see color tokens as their catalog
//! colors, the way the emitted code sees the token module's values.

use crate::tokens::resolve_value;
use indexmap::IndexMap;
use std::fmt;
use sprout_core::{
    CompareOp, Component, Condition, Environment, Expr, Logic, ResolveError, Statement,
    TokenCatalog, ValidateError, Value, ValueType, VariableId,
};

/// Concrete variable values for one environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    values: IndexMap<VariableId, Value>,
}

impl Resolution {
    pub fn get(&self, id: &VariableId) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableId, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evaluates a validated component's logic.
pub struct Evaluator<'a> {
    component: &'a Component,
    catalog: &'a TokenCatalog,
}

impl<'a> Evaluator<'a> {
    pub fn new(component: &'a Component, catalog: &'a TokenCatalog) -> Self {
        Self { component, catalog }
    }

    /// Values of every declared variable and interaction state under `env`.
    pub fn evaluate(&self, env: &Environment) -> Result<Resolution, ResolveError> {
        let logic = self.component.logic();
        let mut scope = Scope {
            catalog: self.catalog,
            params: bind_parameters(logic, env)?,
            values: IndexMap::new(),
        };

        for node in self.component.tree() {
            for id in node.interaction_variables() {
                let active = env.is_active(&id);
                scope.values.insert(id, Value::Bool(active));
            }
        }
        for variable in &logic.variables {
            let value = scope.eval(&variable.default, &variable.id)?;
            scope.values.insert(variable.id.clone(), value);
        }
        scope.run(&logic.body)?;

        Ok(Resolution {
            values: scope.values,
        })
    }

    /// Value of a single variable under `env`.
    pub fn resolve(&self, id: &VariableId, env: &Environment) -> Result<Value, ResolveError> {
        let mut resolution = self.evaluate(env)?;
        resolution
            .values
            .swap_remove(id)
            .ok_or_else(|| ValidateError::unresolved(id, self.component.name()).into())
    }
}

/// Parameter values: supplied, else the declared default, else the type's zero.
fn bind_parameters(logic: &Logic, env: &Environment) -> Result<IndexMap<String, Value>, ResolveError> {
    for (name, value) in env.params() {
        let parameter = logic
            .parameter(name)
            .ok_or_else(|| ValidateError::unresolved(name, "environment"))?;
        if !value.conforms_to(&parameter.ty) {
            return Err(ValidateError::type_mismatch(
                format!("parameter '{name}'"),
                &parameter.ty,
                value.type_name(),
            )
            .into());
        }
    }

    let mut params = IndexMap::new();
    for parameter in &logic.parameters {
        let value = env
            .param(&parameter.name)
            .cloned()
            .or_else(|| parameter.default.clone())
            .or_else(|| parameter.ty.zero());
        if let Some(value) = value {
            params.insert(parameter.name.clone(), value);
        }
    }
    Ok(params)
}

struct Scope<'a> {
    catalog: &'a TokenCatalog,
    params: IndexMap<String, Value>,
    values: IndexMap<VariableId, Value>,
}

impl Scope<'_> {
    fn run(&mut self, body: &[Statement]) -> Result<(), ResolveError> {
        for statement in body {
            match statement {
                Statement::Assign { target, value } => {
                    let value = self.eval(value, target)?;
                    self.values.insert(target.clone(), value);
                }
                Statement::If {
                    condition,
                    then,
                    otherwise,
                } => {
                    if self.test(condition)? {
                        self.run(then)?;
                    } else {
                        self.run(otherwise)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn eval(&self, expr: &Expr, subject: &dyn fmt::Display) -> Result<Value, ResolveError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Token(token) => Ok(Value::Token(token.clone())),
            Expr::Param(name) => self
                .params
                .get(name)
                .cloned()
                .ok_or_else(|| ValidateError::unresolved(name, subject).into()),
            Expr::Var(id) => self
                .values
                .get(id)
                .cloned()
                .ok_or_else(|| ValidateError::unresolved(id, subject).into()),
        }
    }

    fn test(&self, condition: &Condition) -> Result<bool, ResolveError> {
        let subject = &"condition";
        match condition {
            Condition::Test(expr) => {
                let value = self.eval(expr, subject)?;
                value.as_bool().ok_or_else(|| {
                    ValidateError::type_mismatch("condition", ValueType::Bool, value.type_name()).into()
                })
            }
            Condition::Not(inner) => Ok(!self.test(inner)?),
            Condition::All(parts) => {
                for part in parts {
                    if !self.test(part)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Any(parts) => {
                for part in parts {
                    if self.test(part)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::Compare { left, op, right } => {
                let left = resolve_value(self.catalog, &self.eval(left, subject)?, "comparison")?;
                let right = resolve_value(self.catalog, &self.eval(right, subject)?, "comparison")?;
                compare(&left, *op, &right)
            }
        }
    }
}

fn compare(left: &Value, op: CompareOp, right: &Value) -> Result<bool, ResolveError> {
    match op {
        CompareOp::Eq => Ok(same(left, right)),
        CompareOp::Ne => Ok(!same(left, right)),
        _ => {
            let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
                return Err(ValidateError::type_mismatch(
                    "comparison",
                    ValueType::Number,
                    format!("{} and {}", left.type_name(), right.type_name()),
                )
                .into());
            };
            Ok(match op {
                CompareOp::Lt => a < b,
                CompareOp::Le => a <= b,
                CompareOp::Gt => a > b,
                _ => a >= b,
            })
        }
    }
}

/// Enum cases compare by name with keyword literals.
fn same(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Enum(a), Value::String(b)) | (Value::String(a), Value::Enum(b)) => a == b,
        _ => left == right,
    }
}
