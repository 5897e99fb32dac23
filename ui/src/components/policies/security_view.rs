use dioxus::prelude::*;

use acenodes_common::content::security::{
    AREAS, CUSTOMER_RESPONSIBILITIES, DISCLOSURE, OVERVIEW, SUBTITLE,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::icon::IconGlyph;
use crate::components::page_shell::{BulletList, ContentCard, ExternalButton, Notice, PolicyPage};

#[component]
pub fn SecurityView() -> Element {
    rsx! {
        PolicyPage { page: Page::Security, icon: Icon::Lock, subtitle: SUBTITLE,
            ContentCard { title: "Overview",
                p { class: "muted", "{OVERVIEW}" }
            }

            ContentCard { title: "Security Measures",
                div { class: "grid grid-2",
                    for area in AREAS.iter() {
                        div { key: "{area.title}", class: "panel",
                            div { class: "panel-header",
                                IconGlyph { icon: area.icon, class: "text-primary" }
                                h3 { "{area.title}" }
                            }
                            BulletList { items: area.measures, class: "compact" }
                        }
                    }
                }
            }

            ContentCard { title: "Customer Responsibilities",
                BulletList { items: CUSTOMER_RESPONSIBILITIES }
            }

            ContentCard { class: "cta-card",
                Notice { icon: Icon::Shield, source: DISCLOSURE }
                ExternalButton { href: DASHBOARD_URL, label: "Report a Vulnerability", arrow: true }
            }
        }
    }
}
