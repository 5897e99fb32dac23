use dioxus::prelude::*;

use acenodes_common::content::aup::{
    ENFORCEMENT_ACTIONS, ENFORCEMENT_INTRO, INVESTIGATION, PROHIBITED_ACTIVITIES,
    PROHIBITED_NOTICE, PURPOSE, REPORTING, SUBTITLE, UPDATES,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::app::Route;
use crate::components::page_shell::{
    BulletList, ContentCard, ExternalButton, Notice, NumberedList, PolicyPage,
};

#[component]
pub fn AupView() -> Element {
    rsx! {
        PolicyPage { page: Page::Aup, icon: Icon::Shield, subtitle: SUBTITLE,
            ContentCard { title: "Purpose",
                p { class: "muted", "{PURPOSE}" }
            }

            ContentCard { title: "Prohibited Activities",
                Notice { icon: Icon::AlertTriangle, source: PROHIBITED_NOTICE, tone: "danger" }
                BulletList { items: PROHIBITED_ACTIVITIES, class: "bullet-danger" }
            }

            ContentCard { title: "Enforcement",
                p { class: "muted", "{ENFORCEMENT_INTRO}" }
                NumberedList { items: ENFORCEMENT_ACTIONS }
                Notice { icon: Icon::FileText, source: INVESTIGATION }
            }

            ContentCard { title: "Reporting Violations",
                p { class: "muted", "{REPORTING}" }
                div { class: "button-row",
                    ExternalButton { href: DASHBOARD_URL, label: "Report Through Dashboard" }
                    Link { to: Route::Dmca {}, class: "btn btn-outline", "DMCA & Abuse Policy" }
                }
            }

            ContentCard { class: "cta-card",
                h3 { class: "gradient-text", "Policy Updates" }
                p { class: "muted", "{UPDATES}" }
            }
        }
    }
}
