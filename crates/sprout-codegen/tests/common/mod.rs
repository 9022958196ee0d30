//! Components shared by the integration tests.

#![allow(dead_code)]

use sprout_core::{
    Color, Component, Condition, EventKind, Expr, Logic, Parameter, RenderNode, Statement,
    StyleKey, TokenCatalog, TokenReference, Value, ValueType, Variable, VariableId,
};

pub const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

pub fn catalog() -> TokenCatalog {
    serde_json::from_str(CATALOG_JSON).expect("catalog fixture parses")
}

fn stretch() -> Value {
    Value::Enum("stretch".to_string())
}

fn color(name: &str) -> TokenReference {
    TokenReference::color(name)
}

pub fn if_component() -> Component {
    let bg = VariableId::new("View", "backgroundColor");
    let logic = Logic::new()
        .with_parameter(Parameter::new("enabled", ValueType::Bool))
        .with_variable(Variable::new(bg.clone(), ValueType::Color, Color::TRANSPARENT))
        .with_statement(Statement::when(
            Condition::param("enabled"),
            vec![Statement::assign(bg, color("red500"))],
        ));
    let root = RenderNode::view("View")
        .with_style(StyleKey::AlignSelf, stretch())
        .bind(StyleKey::BackgroundColor);
    Component::new("If", logic, root)
}

pub fn text_style_conditional() -> Component {
    let style = VariableId::new("Text", "textStyle");
    let logic = Logic::new()
        .with_parameter(Parameter::new("large", ValueType::Bool))
        .with_variable(Variable::new(
            style.clone(),
            ValueType::TextStyle,
            TokenReference::text_style("headline"),
        ))
        .with_statement(Statement::when(
            Condition::param("large"),
            vec![Statement::assign(style, TokenReference::text_style("display2"))],
        ));
    let root = RenderNode::view("View")
        .with_style(StyleKey::AlignSelf, stretch())
        .with_child(
            RenderNode::text("Text")
                .bind(StyleKey::TextStyle)
                .with_text("Text goes here"),
        );
    Component::new("TextStyleConditional", logic, root)
}

pub fn box_model_conditional() -> Component {
    let logic = Logic::new()
        .with_parameter(Parameter::new("margin", ValueType::Number))
        .with_parameter(Parameter::new("size", ValueType::Number))
        .with_variable(Variable::new(VariableId::new("Inner", "margin"), ValueType::Number, 0))
        .with_variable(Variable::new(VariableId::new("Inner", "height"), ValueType::Number, 0))
        .with_variable(Variable::new(VariableId::new("Inner", "width"), ValueType::Number, 0))
        .with_statement(Statement::assign(VariableId::new("Inner", "margin"), Expr::param("margin")))
        .with_statement(Statement::assign(VariableId::new("Inner", "height"), Expr::param("size")))
        .with_statement(Statement::assign(VariableId::new("Inner", "width"), Expr::param("size")));
    let root = RenderNode::view("Outer")
        .with_style(StyleKey::AlignSelf, stretch())
        .with_style(StyleKey::Padding, 4)
        .with_child(
            RenderNode::view("Inner")
                .with_style(StyleKey::BackgroundColor, Color::rgb(0xD8, 0xD8, 0xD8))
                .with_style(StyleKey::Width, 60)
                .with_style(StyleKey::Height, 60)
                .bind(StyleKey::Margin)
                .bind(StyleKey::Width)
                .bind(StyleKey::Height),
        );
    Component::new("BoxModelConditional", logic, root)
}

pub fn pressable_root_view() -> Component {
    let outer_bg = VariableId::new("Outer", "backgroundColor");
    let inner_bg = VariableId::new("Inner", "backgroundColor");
    let text = VariableId::new("InnerText", "text");
    let logic = Logic::new()
        .with_parameter(Parameter::new("onPressOuter", ValueType::Handler))
        .with_parameter(Parameter::new("onPressInner", ValueType::Handler))
        .with_variable(Variable::new(inner_bg.clone(), ValueType::Color, color("blue500")))
        .with_variable(Variable::new(text.clone(), ValueType::String, ""))
        .with_variable(Variable::new(outer_bg.clone(), ValueType::Color, color("grey50")))
        .with_statement(Statement::when(
            Condition::var("Outer", "hovered"),
            vec![Statement::assign(outer_bg.clone(), color("grey100"))],
        ))
        .with_statement(Statement::when(
            Condition::var("Outer", "pressed"),
            vec![Statement::assign(outer_bg, color("grey300"))],
        ))
        .with_statement(Statement::when(
            Condition::var("Inner", "hovered"),
            vec![
                Statement::assign(inner_bg.clone(), color("blue300")),
                Statement::assign(text.clone(), "Hovered"),
            ],
        ))
        .with_statement(Statement::when(
            Condition::var("Inner", "pressed"),
            vec![
                Statement::assign(inner_bg, color("blue800")),
                Statement::assign(text.clone(), "Pressed"),
            ],
        ))
        .with_statement(Statement::when(
            Condition::var("Inner", "hovered"),
            vec![Statement::when(
                Condition::var("Inner", "pressed"),
                vec![Statement::assign(text.clone(), "Hovered & Pressed")],
            )],
        ));
    let root = RenderNode::interactive("Outer")
        .with_style(StyleKey::AlignSelf, stretch())
        .with_style(StyleKey::BackgroundColor, color("grey50"))
        .with_style(StyleKey::Padding, 24)
        .bind(StyleKey::BackgroundColor)
        .on(EventKind::Press, "onPressOuter")
        .with_child(
            RenderNode::interactive("Inner")
                .with_style(StyleKey::BackgroundColor, color("blue500"))
                .with_style(StyleKey::Width, 100)
                .with_style(StyleKey::Height, 100)
                .bind(StyleKey::BackgroundColor)
                .on(EventKind::Press, "onPressInner")
                .with_child(
                    RenderNode::text("InnerText")
                        .with_style(StyleKey::TextStyle, TokenReference::text_style("headline"))
                        .bind_text(text),
                ),
        );
    Component::new("PressableRootView", logic, root)
}

pub fn fixed_parent_fit_child() -> Component {
    let root = RenderNode::view("View")
        .with_style(StyleKey::AlignSelf, stretch())
        .with_style(StyleKey::BackgroundColor, color("bluegrey100"))
        .with_style(StyleKey::Padding, 24)
        .with_style(StyleKey::Height, 600)
        .with_child(
            RenderNode::view("View1")
                .with_style(StyleKey::AlignSelf, stretch())
                .with_style(StyleKey::BackgroundColor, color("red50"))
                .with_style(StyleKey::FlexDirection, Value::Enum("row".to_string()))
                .with_style(StyleKey::Padding, 24)
                .with_child(
                    RenderNode::view("View4")
                        .with_style(StyleKey::BackgroundColor, color("red200"))
                        .with_style(StyleKey::Width, 60)
                        .with_style(StyleKey::Height, 100),
                )
                .with_child(
                    RenderNode::view("View5")
                        .with_style(StyleKey::BackgroundColor, color("deeporange200"))
                        .with_style(StyleKey::MarginLeft, 12)
                        .with_style(StyleKey::Width, 60)
                        .with_style(StyleKey::Height, 60),
                ),
        );
    Component::new("FixedParentFitChild", Logic::new(), root)
}

pub fn all() -> Vec<Component> {
    vec![
        if_component(),
        text_style_conditional(),
        box_model_conditional(),
        pressable_root_view(),
        fixed_parent_fit_child(),
    ]
}
