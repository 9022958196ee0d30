//! Backend profiles.
//!
//! A profile is plain data describing one target: its primitive
//! constructors, how the styles table is declared, which conditional
//! syntax it prefers and how it reaches design tokens. Every backend is
//! emitted by the same writer driven by its profile.

use crate::error::{CodegenError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sprout_core::{PrimitiveKind, TokenAccess, TokenCategory};
use std::path::Path;

/// Static configuration of one rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendProfile {
    pub name: String,
    pub file_extension: String,
    /// Module the primitives and the style table helper are imported from.
    pub framework_module: String,
    /// Constructor name per primitive kind. Kinds absent here are unsupported.
    pub primitives: IndexMap<PrimitiveKind, String>,
    pub style_table: StyleTableSyntax,
    #[serde(default)]
    pub conditional_syntax: ConditionalSyntax,
    pub token_access: TokenAccessConfig,
    #[serde(default = "default_local_keyword")]
    pub local_keyword: String,
    #[serde(default = "default_parameter_prefix")]
    pub parameter_prefix: String,
    /// Directory of generated component files, relative to the token modules.
    #[serde(default = "default_component_dir")]
    pub component_dir: String,
    /// Replacement for the built-in component file template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_template: Option<String>,
}

/// How the styles table is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTableSyntax {
    /// e.g. `StyleSheet.create`
    pub create_call: String,
    /// Name the table is bound to.
    #[serde(default = "default_table_binding")]
    pub binding: String,
}

/// Control-flow shape for conditional assignments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalSyntax {
    /// Blocks are emitted exactly as written.
    #[default]
    NestedIf,
    /// A block whose only statement is another guard-only block becomes one
    /// `&&` guard.
    IfChain,
}

/// Token access strategy per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAccessConfig {
    pub color: TokenAccess,
    pub text_style: TokenAccess,
}

impl TokenAccessConfig {
    pub fn get(&self, category: TokenCategory) -> &TokenAccess {
        match category {
            TokenCategory::Color => &self.color,
            TokenCategory::TextStyle => &self.text_style,
        }
    }

    /// Categories with their access, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &TokenAccess)> {
        [
            (TokenCategory::Color, &self.color),
            (TokenCategory::TextStyle, &self.text_style),
        ]
        .into_iter()
    }
}

fn default_local_keyword() -> String {
    "let".to_string()
}

fn default_parameter_prefix() -> String {
    "this.props.".to_string()
}

fn default_component_dir() -> String {
    "components".to_string()
}

fn default_table_binding() -> String {
    "styles".to_string()
}

impl BackendProfile {
    /// Load and check a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.check()?;
        Ok(profile)
    }

    /// Load and check a profile from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn constructor(&self, kind: PrimitiveKind) -> Option<&str> {
        self.primitives.get(&kind).map(String::as_str)
    }

    /// The identifier the style table helper is imported as (`StyleSheet`).
    pub fn style_table_import(&self) -> &str {
        self.style_table
            .create_call
            .split('.')
            .next()
            .unwrap_or(&self.style_table.create_call)
    }

    /// Check the profile for values the writer cannot use.
    pub fn check(&self) -> Result<()> {
        let invalid = |reason: &str| CodegenError::InvalidProfile {
            profile: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.file_extension.is_empty() {
            return Err(invalid("file extension is empty"));
        }
        if self.primitives.is_empty() {
            return Err(invalid("no primitives are defined"));
        }
        if self.primitives.values().any(|ctor| !is_identifier(ctor)) {
            return Err(invalid("primitive constructors must be identifiers"));
        }
        if !is_identifier(self.style_table_import()) || !is_identifier(&self.style_table.binding) {
            return Err(invalid("style table names must be identifiers"));
        }
        for (_, access) in self.token_access.iter() {
            if !is_identifier(access.binding()) {
                return Err(invalid("token access bindings must be identifiers"));
            }
        }
        Ok(())
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
