//! Profile-driven component writer.
//!
//! Every backend is emitted by the same [`Emitter`]; the [`BackendProfile`]
//! supplies constructor names, the style table helper, the conditional
//! shape and token access. A generated component
//! 1. declares one scratch binding per variable, interaction state and
//!    event handler,
//! 2. assigns defaults, then handlers,
//! 3. runs the logic body in order,
//! 4. returns the node tree with `style={[ styles.entry, { ...overrides } ]}`.

use super::templates::{TemplateEngine, COMPONENT_TEMPLATE, TOKEN_MODULE_TEMPLATE};
use super::tokens::token_modules;
use super::{CodeGenerator, GeneratedFile};
use crate::error::{CodegenError, Result};
use crate::plan::{plan_component, StyleEntry, StylePlan, StyleSource};
use crate::profile::{BackendProfile, ConditionalSyntax};
use indexmap::IndexMap;
use serde_json::json;
use smallvec::SmallVec;
use sprout_core::{
    format_number, CompareOp, Component, Condition, Expr, RenderNode, Statement, TextContent,
    TokenAccess, TokenCatalog, TokenReference, ValidateError, Value, VariableId,
};
use sprout_resolver::{check_tokens, lookup, validate};

/// Lines longer than this are broken up.
pub(crate) const LINE_WIDTH: usize = 80;

const BODY_INDENT: usize = 4;
const JSX_INDENT: usize = 6;

pub(crate) const COMPONENT: &str = "component";
pub(crate) const TOKEN_MODULE: &str = "token_module";

// Operator precedence of emitted guards.
const OR: u8 = 1;
const AND: u8 = 2;
const COMPARE: u8 = 3;
const NOT: u8 = 4;
const ATOM: u8 = 5;

/// Emits components for one backend profile.
pub struct Emitter {
    profile: BackendProfile,
    engine: TemplateEngine<'static>,
}

impl Emitter {
    pub fn new(profile: BackendProfile) -> Result<Self> {
        profile.check()?;
        let mut engine = TemplateEngine::new();
        let template = profile
            .component_template
            .as_deref()
            .unwrap_or(COMPONENT_TEMPLATE);
        engine.register_template(COMPONENT, template)?;
        engine.register_template(TOKEN_MODULE, TOKEN_MODULE_TEMPLATE)?;
        Ok(Self { profile, engine })
    }

    pub fn profile(&self) -> &BackendProfile {
        &self.profile
    }

    /// Emit a component that already passed validation.
    pub fn emit(&self, component: &Component, catalog: &TokenCatalog) -> Result<Vec<GeneratedFile>> {
        for node in component.tree() {
            if self.profile.constructor(node.kind).is_none() {
                return Err(CodegenError::UnsupportedPrimitive {
                    kind: node.kind,
                    backend: self.profile.name.clone(),
                    node: node.id.clone(),
                });
            }
        }
        check_tokens(component, catalog)?;
        let plans = plan_component(component, catalog)?;

        let writer = Writer {
            profile: &self.profile,
            catalog,
            component,
            plans: &plans,
        };
        let data = json!({
            "name": component.name(),
            "framework_import": writer.framework_import(),
            "token_imports": writer.token_imports(),
            "body": writer.body()?,
            "jsx": writer.jsx()?,
            "styles": writer.styles()?,
        });
        let content = self.engine.render(COMPONENT, &data)?;
        tracing::trace!(
            backend = %self.profile.name,
            component = component.name(),
            bytes = content.len(),
            "component emitted"
        );

        Ok(vec![GeneratedFile {
            path: self.component_path(component.name()),
            content,
        }])
    }

    /// Emit the token modules the generated components import.
    pub fn emit_tokens(&self, catalog: &TokenCatalog) -> Result<Vec<GeneratedFile>> {
        token_modules(&self.profile, &self.engine, catalog)
    }

    fn component_path(&self, name: &str) -> String {
        let file = format!("{}.{}", name, self.profile.file_extension);
        match self.profile.component_dir.trim_matches('/') {
            "" => file,
            dir => format!("{dir}/{file}"),
        }
    }
}

impl CodeGenerator for Emitter {
    fn backend_name(&self) -> &str {
        &self.profile.name
    }

    fn generate_component(
        &self,
        component: &Component,
        catalog: &TokenCatalog,
    ) -> Result<Vec<GeneratedFile>> {
        validate(component)?;
        self.emit(component, catalog)
    }

    fn generate_tokens(&self, catalog: &TokenCatalog) -> Result<Vec<GeneratedFile>> {
        self.emit_tokens(catalog)
    }
}

struct Writer<'a> {
    profile: &'a BackendProfile,
    catalog: &'a TokenCatalog,
    component: &'a Component,
    plans: &'a IndexMap<String, StylePlan>,
}

impl<'a> Writer<'a> {
    fn framework_import(&self) -> String {
        let mut names: Vec<&str> = self
            .component
            .tree()
            .iter()
            .filter_map(|node| self.profile.constructor(node.kind))
            .collect();
        names.sort_unstable();
        names.dedup();
        names.push(self.profile.style_table_import());
        for (_, access) in self.profile.token_access.iter() {
            if let TokenAccess::RuntimeCall { .. } = access {
                if !names.contains(&access.binding()) {
                    names.push(access.binding());
                }
            }
        }

        let module = quote(&self.profile.framework_module);
        let line = format!("import {{ {} }} from {module}", names.join(", "));
        if line.len() <= LINE_WIDTH {
            line
        } else {
            format!("import {{ {} }} from\n  {module}", names.join(", "))
        }
    }

    fn token_imports(&self) -> String {
        let depth = self
            .profile
            .component_dir
            .split('/')
            .filter(|part| !part.is_empty())
            .count();
        let prefix = if depth == 0 {
            "./".to_string()
        } else {
            "../".repeat(depth)
        };

        let mut lines: Vec<String> = Vec::new();
        for (_, access) in self.profile.token_access.iter() {
            if let TokenAccess::StaticImport { namespace } = access {
                let line = format!("import {namespace} from {}", quote(&format!("{prefix}{namespace}")));
                if !lines.contains(&line) {
                    lines.push(line);
                }
            }
        }
        lines.join("\n")
    }

    fn body(&self) -> Result<String> {
        let logic = self.component.logic();
        let pad = pad(BODY_INDENT);
        let mut lines = vec![String::new()];

        for name in self.declarations() {
            lines.push(format!("{pad}{} {name}", self.profile.local_keyword));
        }
        for variable in &logic.variables {
            lines.push(format!(
                "{pad}{} = {}",
                scratch(&variable.id),
                self.expr(&variable.default)?
            ));
        }
        lines.push(String::new());

        for node in self.component.tree() {
            for (event, handler) in &node.events {
                lines.push(format!(
                    "{pad}{} = {}{handler}",
                    handler_scratch(node, event.attribute()),
                    self.profile.parameter_prefix
                ));
            }
        }
        self.statements(&logic.body, BODY_INDENT, &mut lines)?;
        Ok(lines.join("\n"))
    }

    /// Scratch bindings, sorted by name.
    fn declarations(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .component
            .logic()
            .variables
            .iter()
            .map(|v| scratch(&v.id))
            .collect();
        for node in self.component.tree() {
            names.extend(node.interaction_variables().iter().map(scratch));
            names.extend(
                node.events
                    .keys()
                    .map(|event| handler_scratch(node, event.attribute())),
            );
        }
        names.sort();
        names.dedup();
        names
    }

    fn statements(&self, body: &[Statement], indent: usize, out: &mut Vec<String>) -> Result<()> {
        for statement in body {
            match statement {
                Statement::Assign { target, value } => {
                    out.push(format!("{}{} = {}", pad(indent), scratch(target), self.expr(value)?));
                }
                Statement::If {
                    condition,
                    then,
                    otherwise,
                } => self.conditional(condition, then, otherwise, indent, out)?,
            }
        }
        Ok(())
    }

    fn conditional<'s>(
        &self,
        condition: &'s Condition,
        then: &'s [Statement],
        otherwise: &'s [Statement],
        indent: usize,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let pad = pad(indent);
        let mut opener = format!("{pad}if");
        let (mut condition, mut then, mut otherwise) = (condition.clone(), then, otherwise);
        loop {
            let (guard, body) = self.collapse(condition, then, otherwise);
            out.push(format!("{opener} ({}) {{", self.guard(&guard)?.0));
            self.statements(body, indent + 2, out)?;
            match otherwise {
                [] => {
                    out.push(format!("{pad}}}"));
                    return Ok(());
                }
                [Statement::If {
                    condition: next,
                    then: next_then,
                    otherwise: next_otherwise,
                }] => {
                    opener = format!("{pad}}} else if");
                    condition = next.clone();
                    then = next_then.as_slice();
                    otherwise = next_otherwise.as_slice();
                }
                rest => {
                    out.push(format!("{pad}}} else {{"));
                    self.statements(rest, indent + 2, out)?;
                    out.push(format!("{pad}}}"));
                    return Ok(());
                }
            }
        }
    }

    /// Fold guard-only nested blocks into one `&&` guard for `if_chain` profiles.
    fn collapse<'s>(
        &self,
        condition: Condition,
        then: &'s [Statement],
        otherwise: &[Statement],
    ) -> (Condition, &'s [Statement]) {
        if self.profile.conditional_syntax != ConditionalSyntax::IfChain || !otherwise.is_empty() {
            return (condition, then);
        }
        let (mut guard, mut body) = (condition, then);
        while let [Statement::If {
            condition: inner,
            then: inner_then,
            otherwise: inner_otherwise,
        }] = body
        {
            if !inner_otherwise.is_empty() {
                break;
            }
            guard = guard.and(inner.clone());
            body = inner_then.as_slice();
        }
        (guard, body)
    }

    /// A guard and its precedence.
    fn guard(&self, condition: &Condition) -> Result<(String, u8)> {
        Ok(match condition {
            Condition::Test(expr) => (self.expr(expr)?, ATOM),
            Condition::Not(inner) => (format!("!{}", self.operand(inner, NOT)?), NOT),
            Condition::All(parts) if parts.is_empty() => ("true".to_string(), ATOM),
            Condition::Any(parts) if parts.is_empty() => ("false".to_string(), ATOM),
            Condition::All(parts) => (self.join(parts, AND, " && ")?, AND),
            Condition::Any(parts) => (self.join(parts, OR, " || ")?, OR),
            Condition::Compare { left, op, right } => (
                format!("{} {} {}", self.expr(left)?, operator(*op), self.expr(right)?),
                COMPARE,
            ),
        })
    }

    fn join(&self, parts: &[Condition], precedence: u8, separator: &str) -> Result<String> {
        let parts = parts
            .iter()
            .map(|part| self.operand(part, precedence))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(separator))
    }

    fn operand(&self, condition: &Condition, min: u8) -> Result<String> {
        let (text, precedence) = self.guard(condition)?;
        Ok(if precedence < min {
            format!("({text})")
        } else {
            text
        })
    }

    fn expr(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Literal(value) => self.literal(value),
            Expr::Token(token) => self.token(token),
            Expr::Param(name) => Ok(format!("{}{name}", self.profile.parameter_prefix)),
            Expr::Var(id) => Ok(scratch(id)),
        }
    }

    fn literal(&self, value: &Value) -> Result<String> {
        match value {
            Value::Token(token) => self.token(token),
            other => Ok(scalar(other).unwrap_or_default()),
        }
    }

    fn token(&self, token: &TokenReference) -> Result<String> {
        let access = self.profile.token_access.get(token.category);
        Ok(lookup(self.catalog, token, access)?.to_string())
    }

    fn jsx(&self) -> Result<String> {
        let mut lines = Vec::new();
        self.node(self.component.tree().root(), JSX_INDENT, &mut lines)?;
        Ok(lines.join("\n"))
    }

    fn node(&self, node: &RenderNode, indent: usize, out: &mut Vec<String>) -> Result<()> {
        let ctor = self
            .profile
            .constructor(node.kind)
            .ok_or_else(|| CodegenError::UnsupportedPrimitive {
                kind: node.kind,
                backend: self.profile.name.clone(),
                node: node.id.clone(),
            })?;
        let plan = self
            .plans
            .get(&node.id)
            .ok_or_else(|| ValidateError::unresolved(&node.id, "styles table"))?;
        let pad = pad(indent);

        let (entry, overrides) = self.style_members(plan)?;
        let mut attributes: SmallVec<[String; 2]> = SmallVec::new();
        attributes.push(format!("style={{{}}}", inline_style(&entry, &overrides)));
        for event in node.events.keys() {
            let attribute = event.attribute();
            attributes.push(format!("{attribute}={{{}}}", handler_scratch(node, attribute)));
        }

        let content = match &node.text {
            Some(TextContent::Static(text)) => Some(format!("{{{}}}", quote(text))),
            Some(TextContent::Bound(id)) => Some(format!("{{{}}}", scratch(id))),
            None => None,
        };
        let open = content.is_some() || !node.children.is_empty();

        let single = format!(
            "{pad}<{ctor} {}{}",
            attributes.join(" "),
            if open { ">" } else { " />" }
        );
        if single.len() <= LINE_WIDTH {
            out.push(single);
        } else {
            out.push(format!("{pad}<{ctor}"));
            let inner = indent + 2;
            let style = format!("{}{}", self::pad(inner), attributes[0]);
            if style.len() <= LINE_WIDTH {
                out.push(style);
            } else {
                broken_style(&entry, &overrides, inner, out);
            }
            for attribute in &attributes[1..] {
                out.push(format!("{}{attribute}", self::pad(inner)));
            }
            out.push(format!("{pad}{}", if open { ">" } else { "/>" }));
        }

        if let Some(content) = content {
            out.push(format!("{}{content}", self::pad(indent + 2)));
        }
        for child in &node.children {
            self.node(child, indent + 2, out)?;
        }
        if open {
            out.push(format!("{pad}</{ctor}>"));
        }
        Ok(())
    }

    /// The table reference and the override members of a node's style.
    fn style_members(&self, plan: &StylePlan) -> Result<(String, Vec<String>)> {
        let entry = format!("{}.{}", self.profile.style_table.binding, plan.entry);
        let overrides = plan
            .overrides
            .iter()
            .map(|member| self.member(member))
            .collect::<Result<Vec<_>>>()?;
        Ok((entry, overrides))
    }

    fn member(&self, member: &StyleEntry) -> Result<String> {
        Ok(match member {
            StyleEntry::Spread(source) => format!("...{}", self.source(source)?),
            StyleEntry::Property { key, source } => format!("{key}: {}", self.source(source)?),
        })
    }

    fn source(&self, source: &StyleSource) -> Result<String> {
        match source {
            StyleSource::Static(value) => self.literal(value),
            StyleSource::Variable(id) => Ok(scratch(id)),
        }
    }

    fn styles(&self) -> Result<String> {
        let table = &self.profile.style_table;
        let head = format!(
            "{} {} = {}(",
            self.profile.local_keyword, table.binding, table.create_call
        );

        let mut entries = Vec::with_capacity(self.plans.len());
        for plan in self.plans.values() {
            let members = plan
                .table
                .iter()
                .map(|member| self.member(member))
                .collect::<Result<Vec<_>>>()?;
            entries.push((plan.entry.as_str(), members));
        }
        let inline: Vec<String> = entries
            .iter()
            .map(|(name, members)| inline_object(name, members))
            .collect();

        let single = format!("{head}{{ {} }})", inline.join(", "));
        if single.len() <= LINE_WIDTH {
            return Ok(single);
        }

        let mut lines = vec![format!("{head}{{")];
        let last = entries.len().saturating_sub(1);
        for (i, ((name, members), inline)) in entries.iter().zip(&inline).enumerate() {
            let comma = if i < last { "," } else { "" };
            if 2 + inline.len() + comma.len() <= LINE_WIDTH {
                lines.push(format!("  {inline}{comma}"));
            } else {
                lines.push(format!("  {name}: {{"));
                push_members(members, 4, &mut lines);
                lines.push(format!("  }}{comma}"));
            }
        }
        lines.push("})".to_string());
        Ok(lines.join("\n"))
    }
}

/// Scratch binding of a variable: `Inner.backgroundColor` -> `Inner$backgroundColor`.
pub(crate) fn scratch(id: &VariableId) -> String {
    format!("{}${}", id.node, id.property)
}

fn handler_scratch(node: &RenderNode, attribute: &str) -> String {
    format!("{}${attribute}", node.id)
}

fn operator(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "===",
        CompareOp::Ne => "!==",
        CompareOp::Lt => "<",
        CompareOp::Le => "<=",
        CompareOp::Gt => ">",
        CompareOp::Ge => ">=",
    }
}

/// Source text of a non-token value.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(*n)),
        Value::String(s) | Value::Enum(s) => Some(quote(s)),
        Value::Color(color) => Some(quote(&color.to_string())),
        Value::Token(_) => None,
    }
}

/// A double-quoted string literal.
pub(crate) fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

pub(crate) fn pad(indent: usize) -> String {
    " ".repeat(indent)
}

pub(crate) fn inline_object(name: &str, members: &[String]) -> String {
    if members.is_empty() {
        format!("{name}: {{}}")
    } else {
        format!("{name}: {{ {} }}", members.join(", "))
    }
}

pub(crate) fn push_members(members: &[String], indent: usize, out: &mut Vec<String>) {
    let last = members.len().saturating_sub(1);
    for (i, member) in members.iter().enumerate() {
        let comma = if i < last { "," } else { "" };
        out.push(format!("{}{member}{comma}", pad(indent)));
    }
}

fn inline_style(entry: &str, overrides: &[String]) -> String {
    if overrides.is_empty() {
        format!("[ {entry}, {{}} ]")
    } else {
        format!("[ {entry}, {{ {} }} ]", overrides.join(", "))
    }
}

fn broken_style(entry: &str, overrides: &[String], indent: usize, out: &mut Vec<String>) {
    let pad = pad(indent);
    out.push(format!("{pad}style={{["));
    out.push(format!("{pad}  {entry},"));
    if overrides.is_empty() {
        out.push(format!("{pad}  {{}}"));
    } else {
        out.push(format!("{pad}  {{"));
        push_members(overrides, indent + 4, out);
        out.push(format!("{pad}  }}"));
    }
    out.push(format!("{pad}]}}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::{
        Color, EventKind, Logic, Parameter, StyleKey, ValueType, Variable,
    };

    fn catalog() -> TokenCatalog {
        TokenCatalog::new()
            .with_color("red500", Color::rgb(0xF4, 0x43, 0x36))
            .with_color("grey50", Color::rgb(0xFA, 0xFA, 0xFA))
    }

    fn profile(syntax: ConditionalSyntax) -> BackendProfile {
        BackendProfile {
            name: "test".to_string(),
            file_extension: "js".to_string(),
            framework_module: "test-framework".to_string(),
            primitives: [
                (sprout_core::PrimitiveKind::Box, "View".to_string()),
                (sprout_core::PrimitiveKind::Text, "Text".to_string()),
            ]
            .into_iter()
            .collect(),
            style_table: crate::profile::StyleTableSyntax {
                create_call: "StyleSheet.create".to_string(),
                binding: "styles".to_string(),
            },
            conditional_syntax: syntax,
            token_access: crate::profile::TokenAccessConfig {
                color: TokenAccess::import("colors"),
                text_style: TokenAccess::call("TextStyles.get"),
            },
            local_keyword: "let".to_string(),
            parameter_prefix: "this.props.".to_string(),
            component_dir: "components".to_string(),
            component_template: None,
        }
    }

    fn nested() -> Component {
        let bg = VariableId::new("View", "backgroundColor");
        let logic = Logic::new()
            .with_parameter(Parameter::new("enabled", ValueType::Bool))
            .with_parameter(Parameter::new("selected", ValueType::Bool))
            .with_variable(Variable::new(bg.clone(), ValueType::Color, Color::TRANSPARENT))
            .with_statement(Statement::when(
                Condition::param("enabled"),
                vec![Statement::when(
                    Condition::param("selected"),
                    vec![Statement::assign(bg, sprout_core::TokenReference::color("red500"))],
                )],
            ));
        Component::new("Nested", logic, RenderNode::view("View").bind(StyleKey::BackgroundColor))
    }

    fn body_of(syntax: ConditionalSyntax, component: &Component) -> String {
        let profile = profile(syntax);
        let catalog = catalog();
        let plans = plan_component(component, &catalog).unwrap();
        let writer = Writer {
            profile: &profile,
            catalog: &catalog,
            component,
            plans: &plans,
        };
        writer.body().unwrap()
    }

    #[test]
    fn test_nested_if_is_verbatim() {
        let body = body_of(ConditionalSyntax::NestedIf, &nested());
        assert!(body.contains("    if (this.props.enabled) {\n      if (this.props.selected) {\n        View$backgroundColor = colors.red500\n      }\n    }"));
    }

    #[test]
    fn test_if_chain_collapses_guards() {
        let body = body_of(ConditionalSyntax::IfChain, &nested());
        assert!(body.contains("    if (this.props.enabled && this.props.selected) {\n      View$backgroundColor = colors.red500\n    }"));
    }

    #[test]
    fn test_else_if_chain() {
        let bg = VariableId::new("View", "backgroundColor");
        let logic = Logic::new()
            .with_parameter(Parameter::new("enabled", ValueType::Bool))
            .with_parameter(Parameter::new("size", ValueType::Number))
            .with_variable(Variable::new(bg.clone(), ValueType::Color, Color::TRANSPARENT))
            .with_statement(Statement::when_else(
                Condition::param("enabled"),
                vec![Statement::assign(bg.clone(), Color::WHITE)],
                vec![Statement::when_else(
                    Condition::compare(Expr::param("size"), CompareOp::Gt, 10),
                    vec![Statement::assign(bg.clone(), Color::BLACK)],
                    vec![Statement::assign(bg, sprout_core::TokenReference::color("grey50"))],
                )],
            ));
        let component = Component::new("Chain", logic, RenderNode::view("View").bind(StyleKey::BackgroundColor));
        let body = body_of(ConditionalSyntax::NestedIf, &component);
        let expected = [
            "    if (this.props.enabled) {",
            "      View$backgroundColor = \"#FFFFFF\"",
            "    } else if (this.props.size > 10) {",
            "      View$backgroundColor = \"#000000\"",
            "    } else {",
            "      View$backgroundColor = colors.grey50",
            "    }",
        ]
        .join("\n");
        assert!(body.ends_with(&expected), "{body}");
    }

    #[test]
    fn test_guard_precedence() {
        let profile = profile(ConditionalSyntax::NestedIf);
        let catalog = catalog();
        let component = nested();
        let plans = IndexMap::new();
        let writer = Writer {
            profile: &profile,
            catalog: &catalog,
            component: &component,
            plans: &plans,
        };
        let condition = Condition::All(vec![
            Condition::Any(vec![Condition::param("a"), Condition::param("b")]),
            Condition::compare(Expr::param("n"), CompareOp::Eq, 1).negate(),
        ]);
        assert_eq!(
            writer.guard(&condition).unwrap().0,
            "(this.props.a || this.props.b) && !(this.props.n === 1)"
        );
    }

    #[test]
    fn test_handlers_follow_defaults() {
        let logic = Logic::new().with_parameter(Parameter::new("onTap", ValueType::Handler));
        let root = RenderNode::new("Button", sprout_core::PrimitiveKind::InteractiveBox)
            .on(EventKind::Press, "onTap");
        let component = Component::new("Button", logic, root);
        let body = body_of(ConditionalSyntax::NestedIf, &component);
        assert_eq!(
            body,
            "\n    let Button$hovered\n    let Button$onPress\n    let Button$pressed\n\n    Button$onPress = this.props.onTap"
        );
    }

    #[test]
    fn test_unsupported_primitive() {
        let emitter = Emitter::new(profile(ConditionalSyntax::NestedIf)).unwrap();
        let component = Component::new("Button", Logic::new(), RenderNode::interactive("Button"));
        let err = emitter.emit(&component, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedPrimitive { ref node, ref backend, .. } if node == "Button" && backend == "test"
        ));
    }

    #[test]
    fn test_component_path() {
        let emitter = Emitter::new(profile(ConditionalSyntax::NestedIf)).unwrap();
        assert_eq!(emitter.component_path("If"), "components/If.js");
    }
}
