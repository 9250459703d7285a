use leptos::prelude::Owner;

use super::*;

#[test]
fn provided_label_defaults_to_human() {
    Owner::new().with(|| {
        let handle = LabelHandle::provide();
        assert_eq!(handle.text(), "human");
        assert_eq!(use_label().text(), "human");
    });
}

#[test]
fn set_text_replaces_label() {
    Owner::new().with(|| {
        let handle = LabelHandle::new(RwSignal::new(LabelSettings::default()));
        handle.set_text("cyborg");
        assert_eq!(handle.text(), "cyborg");
    });
}
