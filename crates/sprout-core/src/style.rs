//! Style keys and ordered style maps.

use crate::types::{Value, ValueType};
use indexmap::IndexMap;
use std::fmt;

/// A style property key.
///
/// Box-model edges are independent keys. `Padding` and `Margin` are
/// shorthands that fan out to their four edges and never appear in a
/// constructed [`StyleMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum StyleKey {
    // Layout
    AlignSelf,
    AlignItems,
    JustifyContent,
    FlexDirection,
    Flex,
    // Box model
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Width,
    Height,
    // Color and border
    BackgroundColor,
    BorderColor,
    BorderRadius,
    BorderWidth,
    // Typography
    TextStyle,
    Color,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,
}

impl StyleKey {
    /// The property name as written in emitted style objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlignSelf => "alignSelf",
            Self::AlignItems => "alignItems",
            Self::JustifyContent => "justifyContent",
            Self::FlexDirection => "flexDirection",
            Self::Flex => "flex",
            Self::Padding => "padding",
            Self::PaddingTop => "paddingTop",
            Self::PaddingRight => "paddingRight",
            Self::PaddingBottom => "paddingBottom",
            Self::PaddingLeft => "paddingLeft",
            Self::Margin => "margin",
            Self::MarginTop => "marginTop",
            Self::MarginRight => "marginRight",
            Self::MarginBottom => "marginBottom",
            Self::MarginLeft => "marginLeft",
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "backgroundColor",
            Self::BorderColor => "borderColor",
            Self::BorderRadius => "borderRadius",
            Self::BorderWidth => "borderWidth",
            Self::TextStyle => "textStyle",
            Self::Color => "color",
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::TextAlign => "textAlign",
        }
    }

    /// Look up a key by its emitted property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }

    /// The four edge keys of a shorthand, in top/right/bottom/left order.
    pub fn edges(&self) -> Option<[StyleKey; 4]> {
        match self {
            Self::Padding => Some([
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ]),
            Self::Margin => Some([
                Self::MarginTop,
                Self::MarginRight,
                Self::MarginBottom,
                Self::MarginLeft,
            ]),
            _ => None,
        }
    }

    pub fn is_shorthand(&self) -> bool {
        self.edges().is_some()
    }

    /// Type a value bound to this key must have.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::AlignSelf
            | Self::AlignItems
            | Self::JustifyContent
            | Self::FlexDirection
            | Self::TextAlign => ValueType::Keyword,
            Self::BackgroundColor | Self::BorderColor | Self::Color => ValueType::Color,
            Self::TextStyle => ValueType::TextStyle,
            Self::FontFamily | Self::FontWeight => ValueType::String,
            _ => ValueType::Number,
        }
    }

    pub const ALL: [StyleKey; 29] = [
        Self::AlignSelf,
        Self::AlignItems,
        Self::JustifyContent,
        Self::FlexDirection,
        Self::Flex,
        Self::Padding,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::Margin,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Width,
        Self::Height,
        Self::BackgroundColor,
        Self::BorderColor,
        Self::BorderRadius,
        Self::BorderWidth,
        Self::TextStyle,
        Self::Color,
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::TextAlign,
    ];
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered map of style keys to values with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap {
    entries: IndexMap<StyleKey, Value>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, fanning shorthands out to their edges.
    ///
    /// Re-inserting a key overwrites its value in place.
    pub fn insert(&mut self, key: StyleKey, value: Value) {
        match key.edges() {
            Some(edges) => {
                for edge in edges {
                    self.entries.insert(edge, value.clone());
                }
            }
            None => {
                self.entries.insert(key, value);
            }
        }
    }

    pub fn with(mut self, key: StyleKey, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    pub fn get(&self, key: StyleKey) -> Option<&Value> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn remove(&mut self, key: StyleKey) -> Option<Value> {
        self.entries.shift_remove(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` key by key; its values win.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in other.iter() {
            self.entries.insert(*key, value.clone());
        }
    }

    /// Expand any shorthand keys that slipped in through deserialization.
    pub fn normalized(self) -> Self {
        if !self.entries.keys().any(StyleKey::is_shorthand) {
            return self;
        }
        let mut out = StyleMap::new();
        for (key, value) in self.entries {
            out.insert(key, value);
        }
        out
    }
}

impl FromIterator<(StyleKey, Value)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleKey, Value)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_fans_out() {
        let map = StyleMap::new().with(StyleKey::Padding, 24);
        assert_eq!(map.len(), 4);
        for edge in StyleKey::Padding.edges().unwrap() {
            assert_eq!(map.get(edge), Some(&Value::from(24)));
        }
        assert!(!map.contains(StyleKey::Padding));
    }

    #[test]
    fn test_edge_overrides_shorthand() {
        let map = StyleMap::new()
            .with(StyleKey::Margin, 4)
            .with(StyleKey::MarginLeft, 12);
        assert_eq!(map.get(StyleKey::MarginTop), Some(&Value::from(4)));
        assert_eq!(map.get(StyleKey::MarginLeft), Some(&Value::from(12)));
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in StyleKey::ALL {
            assert_eq!(StyleKey::from_name(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_normalized_expands_shorthand() {
        let mut raw = StyleMap::new();
        raw.entries.insert(StyleKey::Margin, Value::from(8));
        let map = raw.normalized();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(StyleKey::MarginBottom), Some(&Value::from(8)));
    }
}
