use dioxus::prelude::*;

use acenodes_common::content::dmca::{
    ABUSE_REPORTS, COUNTER_NOTICE, FALSE_CLAIMS, HANDLING_STEPS, NOTICE_INTRO,
    NOTICE_REQUIREMENTS, OVERVIEW, REPEAT_INFRINGERS, SUBTITLE,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::app::Route;
use crate::components::page_shell::{
    BulletList, ContentCard, ExternalButton, Notice, NumberedList, PolicyPage,
};

#[component]
pub fn DmcaView() -> Element {
    rsx! {
        PolicyPage { page: Page::Dmca, icon: Icon::AlertTriangle, subtitle: SUBTITLE,
            ContentCard { title: "Overview",
                p { class: "muted", "{OVERVIEW}" }
            }

            ContentCard { title: "Filing a Copyright Notice",
                p { class: "muted", "{NOTICE_INTRO}" }
                BulletList { items: NOTICE_REQUIREMENTS }
            }

            ContentCard { title: "How We Handle Notices",
                NumberedList { items: HANDLING_STEPS }
                Notice { icon: Icon::AlertTriangle, source: REPEAT_INFRINGERS, tone: "warning" }
            }

            ContentCard { title: "Counter-Notices",
                p { class: "muted", "{COUNTER_NOTICE}" }
            }

            ContentCard { title: "Reporting Abuse",
                p { class: "muted", "{ABUSE_REPORTS}" }
                div { class: "button-row",
                    ExternalButton { href: DASHBOARD_URL, label: "Report Through Dashboard" }
                    Link { to: Route::Aup {}, class: "btn btn-outline", "Acceptable Use Policy" }
                }
            }

            ContentCard { class: "cta-card",
                h3 { class: "gradient-text", "False Claims" }
                p { class: "muted", "{FALSE_CLAIMS}" }
            }
        }
    }
}
