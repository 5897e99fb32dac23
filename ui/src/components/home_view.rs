use dioxus::prelude::*;

use acenodes_common::content::home::{
    FEATURES, HUB_LINKS, QUICK_LINKS, TAGLINE, TRUST_BADGE, VALUE_PROPOSITION,
};
use acenodes_common::content::{Icon, BRAND};

use super::app::Route;
use super::icon::IconGlyph;
use super::page_shell::ExternalButton;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "home",
            section { class: "hero section",
                h1 { class: "hero-title", span { class: "gradient-text", "{BRAND}" } }
                p { class: "hero-tagline", "{TAGLINE}" }
                p { class: "lead", "{VALUE_PROPOSITION}" }
                div { class: "button-row",
                    for link in QUICK_LINKS {
                        ExternalButton {
                            key: "{link.title}",
                            href: link.url,
                            label: link.title.to_string(),
                            class: link.variant.class(),
                            arrow: true,
                        }
                    }
                }
                div { class: "trust-badge",
                    IconGlyph { icon: Icon::CheckCircle, class: "text-green" }
                    span { "{TRUST_BADGE}" }
                }
            }

            section { class: "section section-tinted",
                div { class: "section-header",
                    h2 { span { class: "gradient-text", "Why Choose AceNodes?" } }
                    p { class: "lead", "Designed for gamers, built for performance, backed by professional support." }
                }
                div { class: "grid grid-4",
                    for feature in FEATURES {
                        div { key: "{feature.title}", class: "card feature-card",
                            div { class: "feature-icon",
                                IconGlyph { icon: feature.icon }
                            }
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.description}" }
                            div { class: "pill", "{feature.highlight}" }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "section-header",
                    h2 { span { class: "gradient-text", "Quick Access" } }
                    p { class: "lead", "Direct links to your AceNodes services and management tools." }
                }
                div { class: "grid grid-2",
                    {QUICK_LINKS.iter().map(|link| {
                        let access = link.access_label();
                        rsx! {
                            div { key: "{link.title}", class: "card quick-link-card",
                                div { class: "quick-link-header",
                                    div {
                                        h3 { "{link.title}" }
                                        p { class: "muted", "{link.description}" }
                                    }
                                    IconGlyph { icon: Icon::ExternalLink }
                                }
                                ExternalButton {
                                    href: link.url,
                                    label: access,
                                    class: link.variant.class(),
                                }
                            }
                        }
                    })}
                }
            }

            section { class: "section section-tinted",
                div { class: "section-header",
                    h2 { span { class: "gradient-text", "Need More Information?" } }
                    p { class: "lead",
                        "This information hub contains everything you need to know about AceNodes services, policies, and support resources."
                    }
                }
                div { class: "button-row",
                    for (label, page) in HUB_LINKS.iter().copied() {
                        Link { key: "{label}", to: Route::from(page), class: "btn btn-outline", "{label}" }
                    }
                }
            }
        }
    }
}
