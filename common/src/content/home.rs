use super::{Icon, Variant};
use crate::nav::{CONTROL_PANEL_URL, DASHBOARD_URL};
use crate::routes::Page;

pub const TAGLINE: &str = "Game Server Hosting";
pub const VALUE_PROPOSITION: &str = "Professional game server hosting with guaranteed uptime, 24/7 support, and enterprise-grade infrastructure built for performance.";
pub const TRUST_BADGE: &str = "Information Hub & Resources";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

/// A shortcut to one of the external management tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub variant: Variant,
}

impl QuickLink {
    pub fn access_label(&self) -> String {
        format!("Access {}", self.title)
    }
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Server,
        title: "UK-Based Hosting",
        description: "Premium hosting machines currently located in the UK, with expansion planned globally.",
        highlight: "Current Location: UK",
    },
    Feature {
        icon: Icon::Clock,
        title: "99.9% Uptime Guarantee",
        description: "Reliable infrastructure ensuring your game servers stay online when you need them most.",
        highlight: "99.9% SLA",
    },
    Feature {
        icon: Icon::Shield,
        title: "24/7 Availability",
        description: "Game servers and customer support available around the clock, every day of the year.",
        highlight: "24/7 Support",
    },
    Feature {
        icon: Icon::Zap,
        title: "Free Setup",
        description: "Free server setup and configuration for supported games - get started without hidden costs.",
        highlight: "Zero Setup Fees",
    },
];

pub static QUICK_LINKS: [QuickLink; 2] = [
    QuickLink {
        title: "Deploy Dashboard",
        description: "Manage your deployments and server configurations",
        url: DASHBOARD_URL,
        variant: Variant::Primary,
    },
    QuickLink {
        title: "Control Panel",
        description: "Access your server control panel and monitoring tools",
        url: CONTROL_PANEL_URL,
        variant: Variant::Secondary,
    },
];

/// Buttons of the closing "Need More Information?" section.
pub const HUB_LINKS: &[(&str, Page)] = &[
    ("Browse FAQ", Page::Faq),
    ("View Policies", Page::Terms),
    ("Get Support", Page::Contact),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_link_labels() {
        let labels: Vec<_> = QUICK_LINKS.iter().map(QuickLink::access_label).collect();
        assert_eq!(labels, ["Access Deploy Dashboard", "Access Control Panel"]);
        assert_eq!(QUICK_LINKS[0].variant, Variant::Primary);
    }
}
