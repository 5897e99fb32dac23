use dioxus::prelude::*;

use acenodes_common::content::contact::{
    FAQ_PROMPT, GUARANTEE, INTRO, LANGUAGE_NOTE, RESPONSE_TIERS, SUPPORT_CHANNELS,
};
use acenodes_common::content::Icon;
use acenodes_common::routes::Page;

use super::app::Route;
use super::icon::IconGlyph;
use super::page_shell::{ExternalButton, Notice, PageHeader};

#[component]
pub fn ContactView() -> Element {
    rsx! {
        div { class: "page page-narrow",
            PageHeader { icon: Icon::MessageCircle, title: Page::Contact.title(), subtitle: INTRO }

            Notice { icon: Icon::Shield, source: GUARANTEE }

            div { class: "grid grid-3",
                {SUPPORT_CHANNELS.iter().map(|channel| {
                    let card_class = if channel.recommended {
                        "card channel-card recommended"
                    } else {
                        "card channel-card"
                    };
                    rsx! {
                        div { key: "{channel.title}", class: card_class,
                            div { class: "channel-card-header",
                                div { class: "channel-icon",
                                    IconGlyph { icon: channel.icon }
                                }
                                if channel.recommended {
                                    span { class: "pill", "Recommended" }
                                }
                            }
                            h2 { class: "card-title", "{channel.title}" }
                            div { class: "text-green", "{channel.availability}" }
                            p { class: "muted", "{channel.description}" }
                            p { class: "muted small", "{channel.details}" }
                            ExternalButton {
                                href: channel.href,
                                label: channel.access_label(),
                                class: "btn btn-primary btn-block",
                                arrow: true,
                            }
                        }
                    }
                })}
            }

            section { class: "card",
                h2 { class: "card-title gradient-text centered", "Support Response Times" }
                p { class: "muted centered", "Our commitment to timely support based on issue priority" }
                div { class: "grid grid-3",
                    for tier in RESPONSE_TIERS.iter() {
                        div { key: "{tier.kind}", class: "response-tier",
                            IconGlyph { icon: tier.icon, class: tier.accent.class().to_string() }
                            h3 { "{tier.kind}" }
                            div { class: "text-primary", "{tier.time}" }
                            p { class: "muted small", "{tier.description}" }
                        }
                    }
                }
            }

            section { class: "card cta-card",
                h2 { class: "gradient-text", "Check Our FAQ First" }
                p { class: "muted", "{FAQ_PROMPT}" }
                Link { to: Route::Faq {}, class: "btn btn-outline", "Browse FAQ" }
            }

            p { class: "page-footnote muted", "{LANGUAGE_NOTE}" }
        }
    }
}
