//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    color_controls::ColorControls, export_bar::ExportBar, label_input::LabelInput, preview::Preview,
};
use crate::state::{color::ColorHandle, label::LabelHandle};

/// Provides the color and label state and lays out the editor.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    ColorHandle::provide();
    LabelHandle::provide();

    view! {
        <Title text="Duotone"/>
        <main class="editor">
            <section class="editor__controls">
                <LabelInput/>
                <ColorControls/>
                <ExportBar/>
            </section>
            <section class="editor__preview">
                <Preview/>
            </section>
        </main>
    }
}
