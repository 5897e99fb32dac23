use dioxus::prelude::*;

use acenodes_common::content::data_retention::{
    ACCESS_REQUESTS, BACKUP_HANDLING, DELETION_INTRO, DELETION_STEPS, EXTENDED_RETENTION_CASES,
    LEGAL_NOTICE, OVERVIEW, OVERVIEW_NOTICE, RETENTION_PERIODS, SUBTITLE,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::app::Route;
use crate::components::icon::IconGlyph;
use crate::components::page_shell::{
    BulletList, ContentCard, ExternalButton, Notice, NumberedList, PolicyPage,
};

#[component]
pub fn DataRetentionView() -> Element {
    rsx! {
        PolicyPage { page: Page::DataRetention, icon: Icon::Database, subtitle: SUBTITLE,
            ContentCard { title: "Overview",
                p { class: "muted", "{OVERVIEW}" }
                Notice { icon: Icon::Database, source: OVERVIEW_NOTICE }
            }

            ContentCard { title: "Data Retention Periods",
                div { class: "grid grid-2",
                    for item in RETENTION_PERIODS.iter() {
                        div { key: "{item.kind}", class: "panel",
                            div { class: "panel-header",
                                IconGlyph { icon: item.icon, class: "text-primary" }
                                h3 { "{item.kind}" }
                            }
                            div { class: "text-primary small", "{item.period}" }
                            p { class: "muted small", "{item.description}" }
                        }
                    }
                }
            }

            ContentCard { title: "Data Deletion Process",
                p { class: "muted", "{DELETION_INTRO}" }
                NumberedList { items: DELETION_STEPS }
            }

            ContentCard { title: "Backup Data Handling",
                for (heading, body) in BACKUP_HANDLING.iter().copied() {
                    div { key: "{heading}", class: "panel",
                        h3 { "{heading}" }
                        p { class: "muted", "{body}" }
                    }
                }
            }

            ContentCard { title: "Legal and Compliance Requirements",
                Notice { icon: Icon::Shield, source: LEGAL_NOTICE, tone: "warning" }
                h3 { "When Extended Retention May Apply:" }
                BulletList { items: EXTENDED_RETENTION_CASES }
            }

            ContentCard { class: "cta-card",
                h3 { class: "gradient-text", "Data Access and Deletion Requests" }
                p { class: "muted", "{ACCESS_REQUESTS}" }
                div { class: "button-row",
                    ExternalButton { href: DASHBOARD_URL, label: "Access Dashboard" }
                    Link { to: Route::Contact {}, class: "btn btn-outline", "Contact Support" }
                }
            }
        }
    }
}
