use formwork_render::{render_form, Control, ControlValue, RenderError, Renderer};
use formwork_rules::{NumberOperator, Rule, RuleSet, StringCondition};
use formwork_test_utils::{
    heading, image, init_tracing, mock_form, number_field_with_rules, paragraph,
    text_field_with_rules,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn mock_form_renders_with_initial_state() {
    init_tracing();
    let controls = render_form(&mock_form()).unwrap();

    let values: Vec<_> = controls.iter().map(|c| c.value().clone()).collect();
    assert_eq!(
        values,
        vec![
            ControlValue::Text(String::new()),
            ControlValue::Number(0.0),
            ControlValue::Text(String::new()),
            ControlValue::Text(String::new()),
            ControlValue::Choice(Some("Option 1".into())),
            ControlValue::Checked(false),
        ]
    );

    let labels: Vec<_> = controls.iter().filter_map(|c| c.control().label()).collect();
    assert_eq!(labels, vec!["Text", "Number", "Date", "Email", "Select", "Checkbox"]);
    assert!(controls.iter().all(|c| !c.has_errors()));
}

#[test]
fn date_without_required_renders_optional() {
    let controls = render_form(&mock_form()).unwrap();
    assert_eq!(
        controls[2].control(),
        &Control::Date {
            label: "Date".into(),
            required: false,
            placeholder: "Placeholder".into(),
        }
    );
}

#[test]
fn order_is_preserved() {
    let fields = vec![
        heading("h", "Title"),
        paragraph("p", "Body"),
        image("i", "https://images.unsplash.com/x/"),
    ];
    let ids: Vec<_> = render_form(&fields)
        .unwrap()
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    assert_eq!(ids, vec!["h", "p", "i"]);
}

#[test]
fn untrusted_image_never_loadable() {
    init_tracing();
    let controls = render_form(&[
        image("a", "http://example.com/x.png"),
        image("b", "https://images.unsplash.com.evil.test/"),
        image("c", ""),
    ])
    .unwrap();

    assert!(controls[0].control().is_notice());
    // Plain prefix check, as with the rule pair
    assert!(!controls[1].control().is_notice());
    assert!(controls[2].control().is_notice());
}

#[test]
fn bad_rule_stops_form_render() {
    let fields = vec![
        heading("h", "Title"),
        number_field_with_rules(
            "n",
            RuleSet::from(vec![Rule::string(StringCondition::Includes, "x", "m")]),
        ),
    ];
    assert!(matches!(
        Renderer::new().render_form(&fields),
        Err(RenderError::Rule(_))
    ));
}

#[test]
fn live_feedback_on_text() {
    let fields = vec![text_field_with_rules(
        "t",
        RuleSet::from(vec![Rule::string(
            StringCondition::StartsWith,
            "https://",
            "Must be https",
        )]),
    )];
    let mut controls = render_form(&fields).unwrap();
    let live = &mut controls[0];

    assert_eq!(live.failing_messages(), vec!["Must be https"]);
    live.input("https://a").unwrap();
    assert!(!live.has_errors());
    live.input("ftp://a").unwrap();
    assert!(live.has_errors());
}

proptest! {
    #[test]
    fn number_control_matches_native_comparison(value in -1000i64..1000, threshold in -1000i64..1000) {
        #[allow(clippy::cast_precision_loss)]
        let (v, t) = (value as f64, threshold as f64);
        let fields = vec![number_field_with_rules(
            "n",
            RuleSet::from(vec![Rule::number(NumberOperator::Lte, t, "too big")]),
        )];
        let mut controls = render_form(&fields).unwrap();
        controls[0].input(&value.to_string()).unwrap();

        prop_assert_eq!(controls[0].has_errors(), v > t);
    }
}
