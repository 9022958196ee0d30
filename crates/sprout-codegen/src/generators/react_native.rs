//! React Native backend.

use crate::profile::{BackendProfile, ConditionalSyntax, StyleTableSyntax, TokenAccessConfig};
use sprout_core::{PrimitiveKind, TokenAccess};

impl BackendProfile {
    /// React Native: `View`, `Text` and `Pressable` from `react-native`,
    /// tokens from the `colors` and `textStyles` modules.
    pub fn react_native() -> Self {
        Self {
            name: "react-native".to_string(),
            file_extension: "js".to_string(),
            framework_module: "react-native".to_string(),
            primitives: [
                (PrimitiveKind::Box, "View"),
                (PrimitiveKind::Text, "Text"),
                (PrimitiveKind::InteractiveBox, "Pressable"),
            ]
            .into_iter()
            .map(|(kind, ctor)| (kind, ctor.to_string()))
            .collect(),
            style_table: StyleTableSyntax {
                create_call: "StyleSheet.create".to_string(),
                binding: "styles".to_string(),
            },
            conditional_syntax: ConditionalSyntax::IfChain,
            token_access: TokenAccessConfig {
                color: TokenAccess::import("colors"),
                text_style: TokenAccess::import("textStyles"),
            },
            local_keyword: "let".to_string(),
            parameter_prefix: "this.props.".to_string(),
            component_dir: "components".to_string(),
            component_template: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Emitter;
    use sprout_core::{Component, Logic, RenderNode, StyleKey, TokenCatalog, TokenReference};

    #[test]
    fn test_profile_is_valid() {
        let profile = BackendProfile::react_native();
        assert!(profile.check().is_ok());
        assert_eq!(profile.constructor(PrimitiveKind::InteractiveBox), Some("Pressable"));
    }

    #[test]
    fn test_text_styles_are_imported() {
        let catalog = TokenCatalog::new().with_text_style(
            "headline",
            sprout_core::StyleMap::new().with(StyleKey::FontSize, 24),
        );
        let root = RenderNode::text("Title")
            .with_style(StyleKey::TextStyle, TokenReference::text_style("headline"))
            .with_text("Hi");
        let component = Component::new("Title", Logic::new(), root);
        let files = Emitter::new(BackendProfile::react_native())
            .unwrap()
            .emit(&component, &catalog)
            .unwrap();

        let content = &files[0].content;
        assert!(content.contains("import { Text, StyleSheet } from \"react-native\"\n"));
        assert!(content.contains("import colors from \"../colors\"\nimport textStyles from \"../textStyles\"\n"));
        assert!(content.contains("let styles = StyleSheet.create({ title: { ...textStyles.headline } })"));
    }
}
