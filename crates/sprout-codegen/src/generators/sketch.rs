//! react-sketchapp backend.

use crate::profile::{BackendProfile, ConditionalSyntax, StyleTableSyntax, TokenAccessConfig};
use sprout_core::{PrimitiveKind, TokenAccess};

impl BackendProfile {
    /// react-sketchapp: interactive boxes render as plain `View`s and text
    /// styles are looked up through `TextStyles.get` at runtime.
    pub fn sketch() -> Self {
        Self {
            name: "sketch".to_string(),
            file_extension: "js".to_string(),
            framework_module: "@mathieudutour/react-sketchapp".to_string(),
            primitives: [
                (PrimitiveKind::Box, "View"),
                (PrimitiveKind::Text, "Text"),
                (PrimitiveKind::InteractiveBox, "View"),
            ]
            .into_iter()
            .map(|(kind, ctor)| (kind, ctor.to_string()))
            .collect(),
            style_table: StyleTableSyntax {
                create_call: "StyleSheet.create".to_string(),
                binding: "styles".to_string(),
            },
            conditional_syntax: ConditionalSyntax::NestedIf,
            token_access: TokenAccessConfig {
                color: TokenAccess::import("colors"),
                text_style: TokenAccess::call("TextStyles.get"),
            },
            local_keyword: "let".to_string(),
            parameter_prefix: "this.props.".to_string(),
            component_dir: "components".to_string(),
            component_template: None,
        }
    }
}
