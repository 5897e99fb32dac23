use dioxus::prelude::*;

use acenodes_common::content::terms::{IMPORTANT_NOTICE, INTRO, POLICIES};
use acenodes_common::content::{last_updated_label, Icon};
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use super::app::Route;
use super::icon::IconGlyph;
use super::page_shell::{ExternalButton, PageHeader};

/// Hub page listing every policy document.
#[component]
pub fn TermsView() -> Element {
    let updated = last_updated_label();

    rsx! {
        div { class: "page page-wide",
            PageHeader { icon: Icon::FileText, title: Page::Terms.title(), subtitle: INTRO }

            div { class: "grid grid-3",
                {POLICIES.iter().map(|policy| {
                    let icon_class = policy.accent.class();
                    let title = policy.title();
                    rsx! {
                        div { key: "{title}", class: "card policy-card",
                            div { class: "policy-card-icon",
                                IconGlyph { icon: policy.icon, class: "{icon_class}" }
                            }
                            h2 { class: "card-title", "{title}" }
                            p { class: "muted", "{policy.description}" }
                            Link { to: Route::from(policy.page), class: "text-primary",
                                span { "Read Policy" }
                                IconGlyph { icon: Icon::ExternalLink }
                            }
                        }
                    }
                })}
            }

            section { class: "card cta-card notice-card",
                div { class: "notice-card-icon",
                    IconGlyph { icon: Icon::Shield }
                }
                div {
                    h2 { class: "gradient-text", "Important Notice" }
                    for (i, paragraph) in IMPORTANT_NOTICE.iter().enumerate() {
                        p { key: "{i}", class: "muted", "{paragraph}" }
                    }
                    div { class: "button-row",
                        ExternalButton { href: DASHBOARD_URL, label: "Access Dashboard", arrow: true }
                        Link { to: Route::Contact {}, class: "btn btn-outline", "Contact Support" }
                    }
                }
            }

            p { class: "page-footnote muted",
                "Policies last updated: {updated} • "
                Link { to: Route::Contact {}, class: "text-primary", "Contact us for questions" }
            }
        }
    }
}
