use dioxus::prelude::*;

use acenodes_common::content::cookies::{
    BROWSER_GUIDES, CONSENT, COOKIE_TYPES, DISABLING_WARNING, MANAGING, QUESTIONS, SUBTITLE,
    THIRD_PARTY_INTRO, THIRD_PARTY_SERVICES, WHAT_ARE_COOKIES,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::page_shell::{BulletList, ContentCard, ExternalButton, Notice, PolicyPage};

#[component]
pub fn CookiesView() -> Element {
    rsx! {
        PolicyPage { page: Page::Cookies, icon: Icon::Cookie, subtitle: SUBTITLE,
            ContentCard { title: "What Are Cookies?",
                p { class: "muted", "{WHAT_ARE_COOKIES}" }
                Notice { icon: Icon::FileText, source: CONSENT }
            }

            ContentCard { title: "Types of Cookies We Use",
                div { class: "stack",
                    {COOKIE_TYPES.iter().map(|kind| {
                        let badge = if kind.required { "pill pill-green" } else { "pill pill-accent" };
                        let label = kind.requirement_label();
                        rsx! {
                            div { key: "{kind.name}", class: "panel",
                                div { class: "panel-header",
                                    h3 { "{kind.name}" }
                                    span { class: badge, "{label}" }
                                }
                                p { class: "muted", "{kind.description}" }
                                h4 { "Examples:" }
                                BulletList { items: kind.examples, class: "compact" }
                            }
                        }
                    })}
                }
            }

            ContentCard { title: "Managing Cookies",
                h3 { "Browser Settings" }
                p { class: "muted", "{MANAGING}" }
                div { class: "grid grid-2",
                    for guide in BROWSER_GUIDES.iter() {
                        div { key: "{guide.browser}", class: "panel",
                            h4 { "{guide.browser}" }
                            p { class: "muted small", "{guide.settings_path}" }
                        }
                    }
                }
                Notice { icon: Icon::Settings, source: DISABLING_WARNING, tone: "warning" }
            }

            ContentCard { title: "Third-Party Services",
                p { class: "muted", "{THIRD_PARTY_INTRO}" }
                BulletList { items: THIRD_PARTY_SERVICES }
            }

            ContentCard { class: "cta-card",
                h3 { class: "gradient-text", "Questions About Cookies?" }
                p { class: "muted", "{QUESTIONS}" }
                ExternalButton { href: DASHBOARD_URL, label: "Contact Support" }
            }
        }
    }
}
