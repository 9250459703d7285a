//! Text field bound to the label.

use leptos::prelude::*;

use crate::state::label::use_label;

#[component]
pub fn LabelInput() -> impl IntoView {
    let label = use_label();

    view! {
        <input
            class="label-input"
            type="text"
            placeholder="Label"
            prop:value=move || label.text()
            on:input=move |ev| label.set_text(event_target_value(&ev))
        />
    }
}
