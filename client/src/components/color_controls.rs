//! Pickers for the two gradient stops.

use leptos::prelude::*;

use crate::state::color::use_color;

#[component]
pub fn ColorControls() -> impl IntoView {
    let color = use_color();

    view! {
        <div class="color-controls">
            <label class="color-controls__field">
                "Top"
                <input
                    type="color"
                    prop:value=move || color.top_color()
                    on:input=move |ev| color.set_top_color(event_target_value(&ev))
                />
            </label>
            <label class="color-controls__field">
                "Bottom"
                <input
                    type="color"
                    prop:value=move || color.bottom_color()
                    on:input=move |ev| color.set_bottom_color(event_target_value(&ev))
                />
            </label>
        </div>
    }
}
