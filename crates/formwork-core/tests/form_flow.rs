use formwork_core::prelude::*;
use formwork_core::{ControlValue, EditorPhase, ListError};
use formwork_test_utils::{init_tracing, mock_form, mock_form_json, paragraphs};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn submit_heading(form: &mut FormBuilder, text: &str) -> FieldId {
    form.editor_mut().select_type(FieldKind::Heading);
    form.editor_mut().set_text(text).unwrap();
    form.submit().unwrap()
}

#[test]
fn heading_submission_has_no_input_attributes() {
    init_tracing();
    let mut form = FormBuilder::new();
    let id = submit_heading(&mut form, "Hello");

    let json = serde_json::to_value(form.fields().get(0).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": id.as_str(), "type": "heading", "text": "Hello" })
    );
}

#[test]
fn untrusted_image_constructs_and_renders_notice() {
    init_tracing();
    let mut form = FormBuilder::new();
    form.editor_mut().select_type(FieldKind::Image);
    form.editor_mut().set_image_src("http://example.com/cat.png").unwrap();
    form.editor_mut().set_image_alt("cat").unwrap();
    assert!(!form.editor().failing_messages().is_empty());

    form.submit().unwrap();
    assert_eq!(form.fields().len(), 1);

    let controls = form.render().unwrap();
    match controls[0].control() {
        Control::ImageNotice { message, link } => {
            assert!(message.contains("images.unsplash.com"));
            assert_eq!(link, "https://unsplash.com/");
        }
        other => panic!("expected notice, got {other:?}"),
    }
}

#[test]
fn image_host_is_not_configurable() {
    let toml = r#"
        submit_policy = "unconditional"
        trusted_image_prefix = "https://cdn.test"
    "#;
    assert!(matches!(
        FormBuilderConfig::from_toml_str(toml),
        Err(FormError::Config(_))
    ));

    let mut form = FormBuilder::new();
    form.editor_mut().select_type(FieldKind::Image);
    form.editor_mut().set_image_src("http://evil.example/x.png").unwrap();
    form.submit().unwrap();

    let controls = form.render().unwrap();
    assert_eq!(
        controls[0].control(),
        &Control::ImageNotice {
            message: "Unsupported image. Image must be from images.unsplash.com".to_string(),
            link: "https://unsplash.com/".to_string(),
        }
    );
}

#[test]
fn editor_cycle_returns_to_empty() {
    let mut form = FormBuilder::new();
    assert_eq!(form.editor().phase(), EditorPhase::Empty);

    form.editor_mut().select_type(FieldKind::Select);
    assert_eq!(form.editor().phase(), EditorPhase::TypeSelected);
    form.editor_mut().set_option(1, "A").unwrap();
    let second = form.editor_mut().push_option().unwrap();
    form.editor_mut().set_option(second, "B").unwrap();
    form.editor_mut().push_option().unwrap();
    form.editor_mut().truncate_option().unwrap();
    assert_eq!(form.editor().phase(), EditorPhase::OptionsFilled);

    form.submit().unwrap();
    assert_eq!(form.editor().phase(), EditorPhase::Empty);

    let FieldDescriptor::Select(select) = form.fields().get(0).unwrap() else {
        panic!("expected select");
    };
    assert_eq!(select.options, vec!["A", "B"]);
}

#[test]
fn mock_form_loads_and_renders() {
    init_tracing();
    let store = InMemoryStore::with_fields(mock_form());
    let mut form = FormBuilder::new();
    form.load_from(&store).unwrap();

    assert_eq!(form.fields().len(), 6);
    let ids: Vec<_> = form.fields().ids().map(FieldId::as_str).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "7"]);

    let controls = form.render().unwrap();
    assert_eq!(
        controls[4].value(),
        &ControlValue::Choice(Some("Option 1".to_string()))
    );
}

#[test]
fn published_json_matches_source() {
    let store = InMemoryStore::with_fields(mock_form());
    let mut form = FormBuilder::new();
    form.load_from(&store).unwrap();

    let mut out = InMemoryStore::new();
    form.publish_to(&mut out);
    let back = serde_json::to_value(out.read()).unwrap();

    // Date has no `required` in the source; it is written back as false
    let mut expected = mock_form_json();
    expected[2]["required"] = serde_json::json!(false);
    assert_eq!(back, expected);
}

#[test]
fn duplicate_ids_rejected_on_load() {
    let mut fields = paragraphs(2);
    fields.push(fields[0].clone());
    let store = InMemoryStore::with_fields(fields);

    let mut form = FormBuilder::new();
    submit_heading(&mut form, "keep");
    assert!(matches!(
        form.load_from(&store),
        Err(FormError::List(ListError::DuplicateId(_)))
    ));
    assert_eq!(form.fields().len(), 1);
}

#[test]
fn capacity_limit() {
    let mut form = FormBuilder::with_config(FormBuilderConfig::new().with_max_fields(2));
    submit_heading(&mut form, "a");
    submit_heading(&mut form, "b");

    form.editor_mut().select_type(FieldKind::Heading);
    assert_eq!(form.submit(), Err(FormError::CapacityExceeded { max: 2 }));

    let first = form.fields().get(0).unwrap().id().clone();
    form.remove_by_id(&first);
    assert!(form.submit().is_ok());
}

#[test]
fn drag_to_delete_zone() {
    let mut form = FormBuilder::new();
    let a = submit_heading(&mut form, "a");
    let b = submit_heading(&mut form, "b");

    form.drag_start(0);
    assert!(form.drag().is_dragging());
    assert!(form.drop_on_delete_zone(&a).is_some());

    let ids: Vec<_> = form.fields().ids().cloned().collect();
    assert_eq!(ids, vec![b]);
}

proptest! {
    #[test]
    fn reorder_first_to_tail_keeps_rest(n in 2usize..20) {
        let mut form = FormBuilder::new();
        for field in paragraphs(n) {
            form.add_field(field).unwrap();
        }
        let before: Vec<_> = form.fields().ids().cloned().collect();

        prop_assert!(form.reorder(0, n - 1));

        let after: Vec<_> = form.fields().ids().cloned().collect();
        prop_assert_eq!(&after[..n - 1], &before[1..]);
        prop_assert_eq!(&after[n - 1], &before[0]);
    }

    #[test]
    fn removing_unknown_id_is_noop(n in 0usize..10) {
        let mut form = FormBuilder::new();
        for field in paragraphs(n) {
            form.add_field(field).unwrap();
        }
        let before = form.fields().clone();

        prop_assert!(form.remove_by_id(&FieldId::generate()).is_none());
        prop_assert_eq!(form.fields(), &before);
    }
}
