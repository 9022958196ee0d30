//! Token catalog adapter.
//!
//! Maps a token reference to the expression a backend uses to reach it,
//! and resolves color tokens to concrete values.

use sprout_core::{
    Component, Condition, Expr, ResolveError, Statement, TokenAccess, TokenCatalog, TokenCategory,
    TokenReference, Value,
};
use std::fmt;

/// Target-language expression that reads one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenExpr {
    /// `colors.blue500`
    Member { object: String, property: String },
    /// `colors["blue-500"]`, for names that are not identifiers.
    Index { object: String, key: String },
    /// `TextStyles.get("headline")`
    Call { callee: String, argument: String },
}

impl fmt::Display for TokenExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenExpr::Member { object, property } => write!(f, "{object}.{property}"),
            TokenExpr::Index { object, key } => write!(f, "{object}[{}]", quote(key)),
            TokenExpr::Call { callee, argument } => write!(f, "{callee}({})", quote(argument)),
        }
    }
}

/// Build the expression for `token` under `access`.
///
/// The same inputs always give the same expression.
pub fn lookup(
    catalog: &TokenCatalog,
    token: &TokenReference,
    access: &TokenAccess,
) -> Result<TokenExpr, ResolveError> {
    if !catalog.contains(token) {
        return Err(ResolveError::unknown_token(
            &token.name,
            token.category,
            access.binding(),
        ));
    }
    Ok(match access {
        TokenAccess::StaticImport { namespace } if is_member_name(&token.name) => TokenExpr::Member {
            object: namespace.clone(),
            property: token.name.clone(),
        },
        TokenAccess::StaticImport { namespace } => TokenExpr::Index {
            object: namespace.clone(),
            key: token.name.clone(),
        },
        TokenAccess::RuntimeCall { callee } => TokenExpr::Call {
            callee: callee.clone(),
            argument: token.name.clone(),
        },
    })
}

/// Replace a color token by its color. Other values pass through.
pub fn resolve_value(
    catalog: &TokenCatalog,
    value: &Value,
    subject: impl ToString,
) -> Result<Value, ResolveError> {
    match value {
        Value::Token(token) if token.category == TokenCategory::Color => catalog
            .color(&token.name)
            .map(Value::Color)
            .ok_or_else(|| ResolveError::unknown_token(&token.name, token.category, subject)),
        Value::Token(token) if !catalog.contains(token) => Err(ResolveError::unknown_token(
            &token.name,
            token.category,
            subject,
        )),
        other => Ok(other.clone()),
    }
}

/// Check that every token the component mentions exists in the catalog.
pub fn check_tokens(component: &Component, catalog: &TokenCatalog) -> Result<(), ResolveError> {
    let logic = component.logic();
    for parameter in &logic.parameters {
        if let Some(Value::Token(token)) = &parameter.default {
            require(catalog, token, format!("parameter '{}'", parameter.name))?;
        }
    }
    for variable in &logic.variables {
        check_expr(catalog, &variable.default, &variable.id.to_string())?;
    }
    check_body(catalog, &logic.body)?;

    for node in component.tree() {
        for (key, value) in node.style.iter() {
            if let Value::Token(token) = value {
                require(catalog, token, format!("{}.{}", node.id, key))?;
            }
        }
    }
    tracing::trace!(component = component.name(), "tokens checked");
    Ok(())
}

fn check_body(catalog: &TokenCatalog, body: &[Statement]) -> Result<(), ResolveError> {
    for statement in body {
        match statement {
            Statement::Assign { target, value } => check_expr(catalog, value, &target.to_string())?,
            Statement::If {
                condition,
                then,
                otherwise,
            } => {
                check_condition(catalog, condition)?;
                check_body(catalog, then)?;
                check_body(catalog, otherwise)?;
            }
        }
    }
    Ok(())
}

fn check_condition(catalog: &TokenCatalog, condition: &Condition) -> Result<(), ResolveError> {
    for expr in condition.exprs() {
        check_expr(catalog, expr, "condition")?;
    }
    Ok(())
}

fn check_expr(catalog: &TokenCatalog, expr: &Expr, subject: &str) -> Result<(), ResolveError> {
    match expr {
        Expr::Token(token) | Expr::Literal(Value::Token(token)) => require(catalog, token, subject),
        _ => Ok(()),
    }
}

fn require(
    catalog: &TokenCatalog,
    token: &TokenReference,
    subject: impl ToString,
) -> Result<(), ResolveError> {
    if catalog.contains(token) {
        Ok(())
    } else {
        Err(ResolveError::unknown_token(&token.name, token.category, subject))
    }
}

fn is_member_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
