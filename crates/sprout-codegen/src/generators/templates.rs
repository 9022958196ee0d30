//! Template engine for generated files.

use crate::error::{CodegenError, Result};
use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

/// Default layout of a component file.
pub const COMPONENT_TEMPLATE: &str = r#"import React from "react"
{{framework_import}}

{{token_imports}}

export default class {{pascal_case name}} extends React.Component {
  render() {
{{body}}
    return (
{{jsx}}
    );
  }
};

{{styles}}
"#;

/// Layout of a token module (`colors.js`, `textStyles.js`).
pub const TOKEN_MODULE_TEMPLATE: &str = "export default {{object}}\n";

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self::register_helpers(&mut handlebars);
        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper(
            "pascal_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&param.to_case(Case::Pascal))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "Hello, {{name}}!")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_source_is_not_escaped() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{code}}", &json!({"code": r#"<View style={[ styles.view, {} ]} />"#}))
            .unwrap();
        assert_eq!(result, r#"<View style={[ styles.view, {} ]} />"#);
    }

    #[test]
    fn test_pascal_case_helper() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{pascal_case name}}", &json!({"name": "pressable_root_view"}))
            .unwrap();
        assert_eq!(result, "PressableRootView");
    }

    #[test]
    fn test_invalid_template() {
        let mut engine = TemplateEngine::new();
        let err = engine.register_template("broken", "{{#if flag}}unclosed").unwrap_err();
        assert!(matches!(err, CodegenError::InvalidTemplate(_)));
    }
}
