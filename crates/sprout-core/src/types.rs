//! Core value types for Sprout components.

use crate::tokens::{TokenCategory, TokenReference};
use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgba(r, g, b, alpha)` or the
    /// keyword `transparent`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        if let Some(args) = text.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            return Self::parse_rgba(args);
        }
        let hex = text.strip_prefix('#')?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Channels are 0-255, alpha is 0-1.
    fn parse_rgba(args: &str) -> Option<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let [r, g, b, alpha] = parts.as_slice() else {
            return None;
        };
        let alpha: f64 = alpha.parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        Some(Self::rgba(
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
            (alpha * 255.0).round() as u8,
        ))
    }

    pub fn is_transparent(&self) -> bool {
        *self == Self::TRANSPARENT
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            write!(f, "transparent")
        } else if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_number(f64::from(self.a) / 255.0)
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match (color.is_transparent(), color.a) {
            (true, _) => "transparent".to_string(),
            (false, 255) => color.to_string(),
            (false, a) => format!("#{:02X}{:02X}{:02X}{:02X}", color.r, color.g, color.b, a),
        }
    }
}

/// A literal value carried by the IR.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Color(Color),
    /// A case of an enumerated parameter or style keyword (`"stretch"`, `"row"`).
    Enum(String),
    Token(TokenReference),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenReference> {
        match self {
            Value::Token(t) => Some(t),
            _ => None,
        }
    }

    /// Whether this value can be stored in a slot of type `ty`.
    pub fn conforms_to(&self, ty: &ValueType) -> bool {
        match (self, ty) {
            (Value::Bool(_), ValueType::Bool)
            | (Value::Number(_), ValueType::Number)
            | (Value::String(_), ValueType::String)
            | (Value::Color(_), ValueType::Color) => true,
            (Value::Enum(case), ValueType::Enum(cases)) => cases.iter().any(|c| c == case),
            // Keywords for style slots with no declared case list.
            (Value::Enum(_), ValueType::Keyword) => true,
            (Value::Token(token), ValueType::Color) => token.category == TokenCategory::Color,
            (Value::Token(token), ValueType::TextStyle) => {
                token.category == TokenCategory::TextStyle
            }
            _ => false,
        }
    }

    /// Short type name used in diagnostics.
    pub fn type_name(&self) -> String {
        match self {
            Value::Bool(_) => "bool".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Color(_) => "color".to_string(),
            Value::Enum(case) => format!("enum case `{case}`"),
            Value::Token(token) => format!("{} token", token.category),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<TokenReference> for Value {
    fn from(t: TokenReference) -> Self {
        Value::Token(t)
    }
}

/// Declared type of a parameter, variable, or style slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueType {
    Bool,
    /// An enumeration with its allowed cases.
    Enum(Vec<String>),
    String,
    Number,
    Color,
    TextStyle,
    /// A callback supplied by the host (`onPress`).
    Handler,
    /// Open keyword set (layout values such as `alignSelf`).
    Keyword,
}

impl ValueType {
    /// The value a slot of this type takes when nothing else is known.
    pub fn zero(&self) -> Option<Value> {
        match self {
            ValueType::Bool => Some(Value::Bool(false)),
            ValueType::Number => Some(Value::Number(0.0)),
            ValueType::String => Some(Value::String(String::new())),
            ValueType::Color => Some(Value::Color(Color::TRANSPARENT)),
            ValueType::Enum(cases) => cases.first().cloned().map(Value::Enum),
            ValueType::TextStyle | ValueType::Handler | ValueType::Keyword => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Bool => write!(f, "bool"),
            ValueType::Enum(cases) => write!(f, "enum({})", cases.join(" | ")),
            ValueType::String => write!(f, "string"),
            ValueType::Number => write!(f, "number"),
            ValueType::Color => write!(f, "color"),
            ValueType::TextStyle => write!(f, "text_style"),
            ValueType::Handler => write!(f, "handler"),
            ValueType::Keyword => write!(f, "keyword"),
        }
    }
}

/// Format a number the way JavaScript prints it: integers without a
/// fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
