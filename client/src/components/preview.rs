//! The exported graphic: label text filled with a top-to-bottom gradient.
//!
//! The root `<svg>` carries `id="svg"` and explicit `width`/`height`, which
//! the exporter reads to locate the graphic and size the PNG canvas.

use duotone::export::markup::GRAPHIC_ELEMENT_ID;
use leptos::prelude::*;

use crate::state::color::use_color;
use crate::state::label::use_label;

pub const PREVIEW_WIDTH: u32 = 1200;
pub const PREVIEW_HEIGHT: u32 = 600;
const GRADIENT_ID: &str = "duotone-gradient";

#[component]
pub fn Preview() -> impl IntoView {
    let color = use_color();
    let label = use_label();

    view! {
        <svg
            id=GRAPHIC_ELEMENT_ID
            class="preview"
            xmlns="http://www.w3.org/2000/svg"
            width=PREVIEW_WIDTH.to_string()
            height=PREVIEW_HEIGHT.to_string()
            viewBox=format!("0 0 {PREVIEW_WIDTH} {PREVIEW_HEIGHT}")
        >
            <defs>
                <linearGradient id=GRADIENT_ID x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0" stop-color=move || color.top_color()></stop>
                    <stop offset="1" stop-color=move || color.bottom_color()></stop>
                </linearGradient>
            </defs>
            <text
                x="50%"
                y="50%"
                text-anchor="middle"
                dominant-baseline="central"
                font-family="sans-serif"
                font-size="240"
                font-weight="900"
                fill=format!("url(#{GRADIENT_ID})")
            >
                {move || label.text()}
            </text>
        </svg>
    }
}
