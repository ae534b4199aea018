//! End-to-end interaction tests for the select widget.

use std::sync::Arc;

use lattice_select::prelude::*;
use parking_lot::Mutex;
use serde_json::json;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_clone = log.clone();
    signal.connect(move |value: &T| log_clone.lock().push(value.clone()));
    log
}

#[test]
fn props_build_a_keyed_select() {
    setup();
    let props = SelectProps::from_json(
        r#"{
            "options": [{"id": 1, "name": "One"}, {"id": 2, "name": "Two"}],
            "key": "id",
            "defaultValue": {"name": "Two", "id": 2},
            "id": "count",
            "name": "count_field",
            "error": true
        }"#,
    )
    .unwrap();
    let select = Select::from_props(props).unwrap();

    let keys: Vec<String> = select.items().iter().map(|i| i.key().to_string()).collect();
    assert_eq!(keys, ["1", "2"]);
    assert_eq!(select.selected_index(), Some(1));
    assert_eq!(select.id(), Some("count"));
    assert_eq!(select.name(), Some("count_field"));
    assert_eq!(select.status(), InputStatus::Error);
    assert_eq!(select.control_appearance().border, ColorToken::Red500);
}

#[test]
fn props_with_malformed_key_fail() {
    setup();
    let props = SelectProps::from_json(r#"{"options": ["a", "b"], "key": "id"}"#).unwrap();
    let err = Select::from_props(props).unwrap_err();
    assert!(matches!(err, SelectError::Items(ref inner) if inner.is_selector_error()));
}

#[test]
fn map_options_select_by_mouse() {
    setup();
    let options = Options::from_value(json!({"fr": "French", "en": "English"})).unwrap();
    let mut select = Select::new(options).unwrap();
    let changes = record(&select.selection_changed);
    let visibility = record(&select.popup_visibility_changed);

    assert!(select.handle_click());
    select.set_highlighted_index(Some(1));
    assert!(select.handle_item_click(1).unwrap());

    assert_eq!(*changes.lock(), vec![json!("English")]);
    assert_eq!(*visibility.lock(), vec![true, false]);
    assert_eq!(select.selected_item().map(|i| i.key().to_string()), Some("en".into()));
    assert_eq!(select.item_appearance(1).unwrap().class_name, "select-en");
}

#[test]
fn keyboard_flow_with_function_keys() {
    setup();
    let options = Options::from_value(json!([
        {"code": "a", "label": "Alpha"},
        {"code": "b", "label": "Beta"},
        {"code": "g", "label": "Gamma"},
    ]))
    .unwrap();
    let mut select = Select::new(options)
        .unwrap()
        .with_key_selector(KeySelector::func(|entry| entry["code"].clone()))
        .unwrap()
        .with_label_fn(|item| {
            item.value()["label"]
                .as_str()
                .unwrap_or_default()
                .to_string()
        });
    let highlights = record(&select.highlighted_changed);

    select.handle_key(Key::from_name("ArrowUp"));
    select.handle_key(Key::from_name("ArrowUp"));
    select.handle_key(Key::from_name("ArrowUp"));
    select.handle_key(Key::from_name("Enter"));

    assert_eq!(*highlights.lock(), vec![Some(2), Some(1), None]);
    assert_eq!(select.selected_label().as_deref(), Some("Beta"));
    assert!(!select.is_popup_open());

    // Reopening starts on the selected item
    select.handle_key(Key::Enter);
    assert_eq!(select.highlighted_index(), Some(1));
    assert_eq!(
        select.item_appearance(1).unwrap().background,
        ColorToken::Black100
    );
    assert_eq!(
        select.item_appearance(0).unwrap().background,
        ColorToken::White
    );
}

#[test]
fn replacing_options_keeps_selection() {
    setup();
    let mut select = Select::new(["a", "b"]).unwrap().with_default_value("b");
    assert!(select.is_selected(1));

    select.set_options(["b", "c"]).unwrap();
    assert_eq!(select.selected_index(), Some(0));

    select.set_options(["x"]).unwrap();
    assert_eq!(select.selected_index(), None);
    assert_eq!(select.selected_entry(), Some(&json!("b")));
    assert_eq!(select.selected_label().as_deref(), Some("b"));
}

#[test]
fn disabled_control_appearance() {
    setup();
    let mut select = Select::new(["a"]).unwrap().with_disabled(true);
    let appearance = select.control_appearance();
    assert_eq!(appearance.tab_index, -1);
    assert_eq!(appearance.background, ColorToken::Black50);

    assert!(!select.handle_click());
    select.set_disabled(false);
    assert!(select.handle_click());
    assert!(select.is_popup_open());
}
