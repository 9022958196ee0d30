//! Design token types and the shared token catalog.

use crate::style::{StyleKey, StyleMap};
use crate::types::Color;
use indexmap::IndexMap;
use std::fmt;

/// Category of a design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenCategory {
    Color,
    TextStyle,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCategory::Color => write!(f, "color"),
            TokenCategory::TextStyle => write!(f, "text style"),
        }
    }
}

/// A symbolic reference to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenReference {
    pub name: String,
    pub category: TokenCategory,
}

impl TokenReference {
    pub fn color(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: TokenCategory::Color,
        }
    }

    pub fn text_style(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: TokenCategory::TextStyle,
        }
    }
}

impl fmt::Display for TokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.category, self.name)
    }
}

/// How generated code reaches the tokens of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TokenAccess {
    /// Members of a default-imported module: `colors.blue500`.
    StaticImport { namespace: String },
    /// A lookup call evaluated at runtime: `TextStyles.get("headline")`.
    RuntimeCall { callee: String },
}

impl TokenAccess {
    pub fn import(namespace: impl Into<String>) -> Self {
        Self::StaticImport {
            namespace: namespace.into(),
        }
    }

    pub fn call(callee: impl Into<String>) -> Self {
        Self::RuntimeCall {
            callee: callee.into(),
        }
    }

    /// The identifier the generated file must bring into scope.
    pub fn binding(&self) -> &str {
        match self {
            Self::StaticImport { namespace } => namespace,
            Self::RuntimeCall { callee } => callee.split('.').next().unwrap_or(callee),
        }
    }
}

/// A read-only snapshot of the shared design tokens.
///
/// Text styles are ordered maps of typography keys. Entries keep insertion
/// order so generated token modules are stable.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    colors: IndexMap<String, Color>,
    #[cfg_attr(feature = "serde", serde(default))]
    text_styles: IndexMap<String, StyleMap>,
}

impl TokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    pub fn with_text_style(mut self, name: impl Into<String>, style: StyleMap) -> Self {
        self.text_styles.insert(name.into(), style);
        self
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn text_style(&self, name: &str) -> Option<&StyleMap> {
        self.text_styles.get(name)
    }

    /// Check if a token exists.
    pub fn contains(&self, token: &TokenReference) -> bool {
        match token.category {
            TokenCategory::Color => self.colors.contains_key(&token.name),
            TokenCategory::TextStyle => self.text_styles.contains_key(&token.name),
        }
    }

    pub fn colors(&self) -> impl Iterator<Item = (&String, &Color)> {
        self.colors.iter()
    }

    pub fn text_styles(&self) -> impl Iterator<Item = (&String, &StyleMap)> {
        self.text_styles.iter()
    }

    /// Every key that at least one text style defines.
    ///
    /// A text-style spread can only overwrite these keys.
    pub fn text_style_keys(&self) -> Vec<StyleKey> {
        let mut keys: Vec<StyleKey> = Vec::new();
        for style in self.text_styles.values() {
            for key in style.keys() {
                if !keys.contains(key) {
                    keys.push(*key);
                }
            }
        }
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.text_styles.is_empty()
    }
}
