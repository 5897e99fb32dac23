use dioxus::prelude::*;

use acenodes_common::content::Icon;

use super::app::Route;
use super::page_shell::PageHeader;

#[component]
pub fn NotFoundView(path: String) -> Element {
    tracing::warn!("no page for {path}");

    rsx! {
        div { class: "page page-narrow",
            PageHeader {
                icon: Icon::AlertTriangle,
                title: "Page Not Found",
                subtitle: "The page you are looking for does not exist or has been moved.",
            }
            p { class: "page-footnote muted", "Requested: {path}" }
            div { class: "button-row",
                Link { to: Route::Home {}, class: "btn btn-primary", "Return Home" }
            }
        }
    }
}
