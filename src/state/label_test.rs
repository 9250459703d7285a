use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::ColorState;

#[test]
fn default_text_is_human() {
    let state = LabelState::default();
    assert_eq!(state.text(), "human");
}

#[test]
fn set_text_replaces_whole_value() {
    let mut state = LabelState::default();
    state.set_text("robot");
    assert_eq!(state.text(), "robot");
    state.set_text("");
    assert_eq!(state.text(), "");
}

#[test]
fn label_updates_do_not_touch_colors() {
    let colors = ColorState::default();
    let mut label = LabelState::default();
    label.set_text("duo");
    assert_eq!(colors.top_color(), "#ff00f7");
    assert_eq!(colors.bottom_color(), "#FF6600");
}

#[test]
fn set_text_notifies_subscribers() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut state = LabelState::default();
    let sink = Rc::clone(&seen);
    state.subscribe(move |settings: &LabelSettings| sink.borrow_mut().push(settings.text.clone()));

    state.set_text("one");
    state.set_text("two");

    assert_eq!(*seen.borrow(), vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn settings_serialize_text_key() {
    let json = serde_json::to_string(&LabelSettings::default()).unwrap();
    assert_eq!(json, r#"{"text":"human"}"#);
}
