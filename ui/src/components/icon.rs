use dioxus::prelude::*;

use acenodes_common::content::Icon;

/// Pictogram placeholder; the stylesheet swaps the glyph for artwork.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    let name = icon.name();
    let glyph = icon.glyph();

    rsx! {
        span { class: "icon icon-{name} {class}", aria_hidden: "true", "{glyph}" }
    }
}
