//! Emitted style plans agree with the style resolver on every backend.

mod common;

use proptest::prelude::*;
use sprout_codegen::plan_component;
use sprout_core::{
    Color, Component, Environment, InteractionState, PrimitiveKind, RenderNode, StyleKey, Value,
    ValueType,
};
use sprout_resolver::{Evaluator, StyleResolver};

#[derive(Debug, Clone)]
struct Inputs {
    flags: [bool; 2],
    numbers: [i32; 2],
    states: Vec<(bool, bool)>,
}

fn inputs() -> impl Strategy<Value = Inputs> {
    (
        any::<(bool, bool)>(),
        (-64i32..64, 0i32..400),
        prop::collection::vec(any::<(bool, bool)>(), 4),
    )
        .prop_map(|((a, b), (m, n), states)| Inputs {
            flags: [a, b],
            numbers: [m, n],
            states,
        })
}

/// An environment covering every declared parameter and interactive node.
fn environment(component: &Component, inputs: &Inputs) -> Environment {
    let mut env = Environment::new();
    let (mut flags, mut numbers) = (inputs.flags.iter(), inputs.numbers.iter());
    for parameter in &component.logic().parameters {
        let value = match parameter.ty {
            ValueType::Bool => flags.next().copied().map(Value::Bool),
            ValueType::Number => numbers.next().map(|n| Value::from(*n)),
            _ => None,
        };
        if let Some(value) = value {
            env = env.with_param(parameter.name.clone(), value);
        }
    }
    let interactive = component
        .tree()
        .iter()
        .filter(|node| node.kind == PrimitiveKind::InteractiveBox);
    for (node, (hovered, pressed)) in interactive.zip(&inputs.states) {
        if *hovered {
            env = env.with_state(&node.id, InteractionState::Hovered);
        }
        if *pressed {
            env = env.with_state(&node.id, InteractionState::Pressed);
        }
    }
    env
}

proptest! {
    #[test]
    fn plans_match_resolver(inputs in inputs()) {
        let catalog = common::catalog();
        for component in common::all() {
            let env = environment(&component, &inputs);
            let resolution = Evaluator::new(&component, &catalog).evaluate(&env).unwrap();
            let resolved = StyleResolver::new(&component, &catalog).resolve_all(&env).unwrap();

            // Plans are shared by every backend; only their syntax differs.
            let plans = plan_component(&component, &catalog).unwrap();
            for (id, plan) in &plans {
                let emitted = plan.evaluate(&resolution, &catalog).unwrap();
                prop_assert_eq!(&emitted, &resolved[id], "{} in {}", id, component.name());
            }
        }
    }

    #[test]
    fn uniform_margin_overrides(margin in -64i32..64, size in 0i32..400) {
        let catalog = common::catalog();
        let component = common::box_model_conditional();
        let env = Environment::new().with_param("margin", margin).with_param("size", size);
        let resolution = Evaluator::new(&component, &catalog).evaluate(&env).unwrap();
        let plans = plan_component(&component, &catalog).unwrap();
        let style = plans["Inner"].evaluate(&resolution, &catalog).unwrap();
        for edge in ["marginTop", "marginRight", "marginBottom", "marginLeft"] {
            let key = StyleKey::from_name(edge).unwrap();
            prop_assert_eq!(style.get(key), Some(&Value::from(margin)));
        }
        prop_assert_eq!(style.get(StyleKey::Width), Some(&Value::from(size)));
    }
}

#[test]
fn text_style_keeps_local_override() {
    let catalog = common::catalog();
    let base = common::text_style_conditional();
    // A local color that both text styles would otherwise set.
    let component = {
        let root = base.tree().root().clone();
        let mut text = root.children[0].clone();
        text.style.insert(StyleKey::Color, Value::Color(Color::WHITE));
        let root = RenderNode { children: vec![text], ..root };
        Component::new(base.name(), base.logic().clone(), root)
    };
    let resolution = Evaluator::new(&component, &catalog)
        .evaluate(&Environment::new().with_param("large", true))
        .unwrap();
    let plans = plan_component(&component, &catalog).unwrap();
    let style = plans["Text"].evaluate(&resolution, &catalog).unwrap();

    assert_eq!(style.get(StyleKey::Color), Some(&Value::Color(Color::WHITE)));
    assert_eq!(style.get(StyleKey::FontSize), Some(&Value::from(45)));
    assert_eq!(style.get(StyleKey::LineHeight), Some(&Value::from(48)));
}
