use dioxus::prelude::*;

use acenodes_common::content::contact::RESPONSE_TIERS;
use acenodes_common::content::sla::{
    monthly_downtime_label, uptime_label, CREDIT_ELIGIBILITY, MONITORING, OVERVIEW, SUBTITLE,
    UPTIME_BASIS_POINTS,
};
use acenodes_common::content::Icon;
use acenodes_common::nav::DASHBOARD_URL;
use acenodes_common::routes::Page;

use crate::components::app::Route;
use crate::components::icon::IconGlyph;
use crate::components::page_shell::{ContentCard, ExternalButton, Notice, PolicyPage};

#[component]
pub fn SlaView() -> Element {
    let uptime = uptime_label(UPTIME_BASIS_POINTS);
    let budget = monthly_downtime_label();

    rsx! {
        PolicyPage { page: Page::Sla, icon: Icon::FileCheck, subtitle: SUBTITLE,
            ContentCard { title: "Overview",
                p { class: "muted", "{OVERVIEW}" }
            }

            ContentCard { title: "Uptime Guarantee",
                div { class: "grid grid-2",
                    div { class: "panel",
                        div { class: "panel-header",
                            IconGlyph { icon: Icon::Server, class: "text-primary" }
                            h3 { "Network & Server Uptime" }
                        }
                        div { class: "text-primary", "{uptime}" }
                        p { class: "muted small", "Measured monthly across the hosting node running your game server." }
                    }
                    div { class: "panel",
                        div { class: "panel-header",
                            IconGlyph { icon: Icon::Shield, class: "text-primary" }
                            h3 { "Support Availability" }
                        }
                        div { class: "text-primary", "24/7" }
                        p { class: "muted small", "Support is staffed around the clock, every day of the year." }
                    }
                }
                p { class: "muted",
                    "A {uptime} monthly guarantee allows at most {budget} of unplanned downtime in a 30-day month."
                }
                p { class: "muted", "{MONITORING}" }
            }

            ContentCard { title: "Support Response Times",
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

            ContentCard { title: "Service Credits",
                Notice { icon: Icon::AlertCircle, source: CREDIT_ELIGIBILITY }
            }

            ContentCard { class: "cta-card",
                h3 { class: "gradient-text", "Questions About This SLA?" }
                p { class: "muted",
                    "Raise uptime concerns through the dashboard support system or reach us through the contact page."
                }
                div { class: "button-row",
                    ExternalButton { href: DASHBOARD_URL, label: "Access Dashboard" }
                    Link { to: Route::Contact {}, class: "btn btn-outline", "Contact Support" }
                }
            }
        }
    }
}
