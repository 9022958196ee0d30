//! Token modules (`colors.js`, `textStyles.js`).
//!
//! Only statically imported categories get a module; runtime-call access
//! is served by the framework.

use super::templates::TemplateEngine;
use super::writer::{inline_object, push_members, quote, scalar, LINE_WIDTH, TOKEN_MODULE};
use super::GeneratedFile;
use crate::error::Result;
use crate::profile::BackendProfile;
use serde_json::json;
use sprout_core::{TokenAccess, TokenCatalog, TokenCategory, ValidateError};
use sprout_resolver::resolve_value;

pub(crate) fn token_modules(
    profile: &BackendProfile,
    engine: &TemplateEngine<'_>,
    catalog: &TokenCatalog,
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    for (category, access) in profile.token_access.iter() {
        let TokenAccess::StaticImport { namespace } = access else {
            continue;
        };
        let members = match category {
            TokenCategory::Color => catalog
                .colors()
                .map(|(name, color)| Member::Value(format!("{}: {}", key(name), quote(&color.to_string()))))
                .collect(),
            TokenCategory::TextStyle => text_styles(catalog)?,
        };
        let content = engine.render(TOKEN_MODULE, &json!({ "object": object(&members) }))?;
        files.push(GeneratedFile {
            path: format!("{namespace}.{}", profile.file_extension),
            content,
        });
    }
    Ok(files)
}

/// One member of a token module's object literal.
#[derive(Debug, PartialEq)]
enum Member {
    Value(String),
    Object { key: String, properties: Vec<String> },
}

fn text_styles(catalog: &TokenCatalog) -> Result<Vec<Member>> {
    let mut members = Vec::new();
    for (name, style) in catalog.text_styles() {
        let mut properties = Vec::new();
        for (property, value) in style.iter() {
            let value = resolve_value(catalog, value, name)?;
            let text = scalar(&value).ok_or_else(|| {
                ValidateError::type_mismatch(format!("{name}.{property}"), property.value_type(), value.type_name())
            })?;
            properties.push(format!("{property}: {text}"));
        }
        members.push(Member::Object {
            key: key(name),
            properties,
        });
    }
    Ok(members)
}

fn object(members: &[Member]) -> String {
    if members.is_empty() {
        return "{}".to_string();
    }
    let mut lines = vec!["{".to_string()];
    for member in members {
        match member {
            Member::Value(text) => lines.push(format!("  {text},")),
            Member::Object { key, properties } => {
                let inline = inline_object(key, properties);
                if inline.len() + 3 <= LINE_WIDTH {
                    lines.push(format!("  {inline},"));
                } else {
                    lines.push(format!("  {key}: {{"));
                    push_members(properties, 4, &mut lines);
                    lines.push("  },".to_string());
                }
            }
        }
    }
    if let Some(last) = lines.last_mut() {
        last.pop();
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Object key for a token name; quoted unless it is an identifier.
fn key(name: &str) -> String {
    let mut chars = name.chars();
    let bare = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        quote(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::{Color, StyleKey, StyleMap, TokenReference};

    #[test]
    fn test_object_layout() {
        let members = vec![
            Member::Value("blue500: \"#2196F3\"".to_string()),
            Member::Value("\"brand-primary\": \"#000000\"".to_string()),
        ];
        assert_eq!(
            object(&members),
            "{\n  blue500: \"#2196F3\",\n  \"brand-primary\": \"#000000\"\n}"
        );
        assert_eq!(object(&[]), "{}");
    }

    #[test]
    fn test_text_styles_resolve_colors() {
        let catalog = TokenCatalog::new()
            .with_color("grey900", Color::rgb(0x21, 0x21, 0x21))
            .with_text_style(
                "headline",
                StyleMap::new()
                    .with(StyleKey::FontSize, 24)
                    .with(StyleKey::Color, TokenReference::color("grey900")),
            );
        let members = text_styles(&catalog).unwrap();
        assert_eq!(
            members,
            [Member::Object {
                key: "headline".to_string(),
                properties: vec!["fontSize: 24".to_string(), "color: \"#212121\"".to_string()],
            }]
        );
        assert_eq!(
            object(&members),
            "{\n  headline: { fontSize: 24, color: \"#212121\" }\n}"
        );
    }

    #[test]
    fn test_keys() {
        assert_eq!(key("blue500"), "blue500");
        assert_eq!(key("brand-primary"), "\"brand-primary\"");
        assert_eq!(key("1x"), "\"1x\"");
    }
}
