//! SVG / PNG download buttons.

use leptos::prelude::*;

use crate::state::label::use_label;
use crate::util::export::{export_png, export_svg, export_title};

#[component]
pub fn ExportBar() -> impl IntoView {
    let label = use_label();

    let on_svg = move |_| {
        let title = export_title(&label.text());
        export_svg(&title);
    };

    let on_png = move |_| {
        leptos::task::spawn_local(async move {
            export_png().await;
        });
    };

    view! {
        <div class="export-bar">
            <button class="btn export-bar__svg" on:click=on_svg>
                "Export SVG"
            </button>
            <button class="btn export-bar__png" on:click=on_png>
                "Export PNG"
            </button>
        </div>
    }
}
