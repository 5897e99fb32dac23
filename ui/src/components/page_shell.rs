use dioxus::prelude::*;

use acenodes_common::content::{last_updated_label, Icon};
use acenodes_common::routes::Page;

use super::app::Route;
use super::icon::IconGlyph;
use super::markdown::InlineMarkdown;

/// Centered icon, gradient title and lead paragraph at the top of a page.
#[component]
pub fn PageHeader(icon: Icon, title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-icon glow-effect",
                IconGlyph { icon: icon }
            }
            h1 { span { class: "gradient-text", "{title}" } }
            p { class: "lead", "{subtitle}" }
        }
    }
}

#[component]
pub fn ContentCard(
    title: Option<&'static str>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section { class: "card {class}",
            if let Some(title) = title {
                h2 { class: "card-title gradient-text", "{title}" }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Highlighted callout. `tone` selects the color scheme (`info`, `warning`,
/// `danger`).
#[component]
pub fn Notice(icon: Icon, source: &'static str, #[props(default = "info")] tone: &'static str) -> Element {
    rsx! {
        div { class: "notice notice-{tone}", role: "note",
            IconGlyph { icon: icon }
            p { InlineMarkdown { source: source } }
        }
    }
}

#[component]
pub fn BulletList(items: &'static [&'static str], #[props(default)] class: String) -> Element {
    rsx! {
        ul { class: "bullet-list {class}",
            for (i, item) in items.iter().enumerate() {
                li { key: "{i}",
                    span { class: "bullet" }
                    span { "{item}" }
                }
            }
        }
    }
}

#[component]
pub fn NumberedList(items: &'static [&'static str]) -> Element {
    rsx! {
        ol { class: "numbered-list",
            {items.iter().enumerate().map(|(i, item)| {
                let number = i + 1;
                rsx! {
                    li { key: "{i}",
                        span { class: "step-number", "{number}" }
                        span { "{item}" }
                    }
                }
            })}
        }
    }
}

/// Link that leaves the site in a new tab.
#[component]
pub fn ExternalButton(
    href: &'static str,
    label: String,
    #[props(default = "btn btn-primary")] class: &'static str,
    #[props(default)] arrow: bool,
) -> Element {
    rsx! {
        a { class: class, href: href, target: "_blank", rel: "noopener noreferrer",
            span { "{label}" }
            if arrow {
                IconGlyph { icon: Icon::ExternalLink }
            }
        }
    }
}

/// Shared frame of every policy document: breadcrumb, header, body, and the
/// "back to hub" footer with the revision date.
#[component]
pub fn PolicyPage(page: Page, icon: Icon, subtitle: &'static str, children: Element) -> Element {
    let updated = last_updated_label();
    let trail = page
        .breadcrumb()
        .map(|[hub, current]| (hub, hub.title(), current.title()));

    rsx! {
        div { class: "page page-narrow",
            if let Some((hub, hub_title, current_title)) = trail {
                nav { class: "breadcrumb",
                    Link { to: Route::from(hub), "{hub_title}" }
                    span { "/" }
                    span { class: "breadcrumb-current", "{current_title}" }
                }
            }

            PageHeader { icon: icon, title: page.title(), subtitle: subtitle }

            div { class: "stack", {children} }

            div { class: "policy-footer",
                Link { to: Route::Terms {}, class: "text-primary", "← Back to Terms & Policies" }
                span { class: "muted", "Last updated: {updated}" }
            }
        }
    }
}
