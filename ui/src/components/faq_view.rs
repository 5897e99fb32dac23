use dioxus::prelude::*;

use acenodes_common::content::Icon;
use acenodes_common::faq::{self, ExpandedItems, FaqId, FAQ_CATEGORIES};
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use super::app::Route;
use super::page_shell::{ExternalButton, PageHeader};

#[component]
pub fn FaqView() -> Element {
    let mut expanded = use_signal(|| ExpandedItems::for_catalog(FAQ_CATEGORIES));
    let total = use_hook(|| faq::entries(FAQ_CATEGORIES).count());
    let open_count = expanded.read().expanded_count();

    rsx! {
        div { class: "page page-narrow",
            PageHeader {
                icon: Icon::MessageCircle,
                title: Page::Faq.title(),
                subtitle: "Find answers to common questions about AceNodes hosting services, billing, support, and technical information.",
            }

            p { class: "page-footnote muted", aria_live: "polite",
                "{open_count} of {total} answers shown"
            }

            div { class: "stack",
                for (ci, category) in FAQ_CATEGORIES.iter().enumerate() {
                    section { key: "{ci}", class: "card",
                        h2 { class: "card-title gradient-text", "{category.title}" }
                        div { class: "card-body accordion",
                            {category.entries.iter().enumerate().map(|(qi, entry)| {
                                let id = FaqId::new(ci, qi);
                                let anchor = id.anchor();
                                let open = expanded.read().is_expanded(id);
                                rsx! {
                                    div { key: "{anchor}", id: "{anchor}", class: "accordion-section",
                                        button {
                                            class: "accordion-header",
                                            aria_expanded: "{open}",
                                            onclick: move |_| {
                                                expanded.write().toggle(id);
                                                tracing::debug!("FAQ {} toggled", id);
                                            },
                                            h3 { "{entry.question}" }
                                            span { class: "accordion-chevron",
                                                if open { "▾" } else { "▸" }
                                            }
                                        }
                                        if open {
                                            div { class: "accordion-body",
                                                p { "{entry.answer}" }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }

            section { class: "card cta-card",
                h2 { class: "gradient-text", "Still Have Questions?" }
                p { class: "muted",
                    "Our 24/7 support team is ready to help with any questions not covered in this FAQ. Get personalized assistance through your dashboard or contact us directly."
                }
                div { class: "button-row",
                    ExternalButton { href: DASHBOARD_URL, label: "Access Dashboard Support" }
                    Link { to: Route::Contact {}, class: "btn btn-outline", "Contact Information" }
                }
            }
        }
    }
}
