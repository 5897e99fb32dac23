use super::{Accent, Icon};
use crate::nav::{CONTROL_PANEL_URL, DASHBOARD_URL, DISCORD_URL};

pub const INTRO: &str = "Our support team is available 24/7 to help with any questions or issues you may have. Choose the best contact method for your needs.";

pub const GUARANTEE: &str = "**24/7 Support Guarantee:** Our support team is available around the clock, every day of the year. Critical issues receive priority response within 1 hour.";

pub const FAQ_PROMPT: &str = "Many common questions are answered in our comprehensive FAQ section. You might find the information you need without waiting for a support response.";

pub const LANGUAGE_NOTE: &str = "Support is provided in English. Response times may vary during high traffic periods, but we always strive to exceed our commitments.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportChannel {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    pub availability: &'static str,
    pub recommended: bool,
    pub details: &'static str,
}

impl SupportChannel {
    /// Button label: "Access" followed by the first word of the title.
    pub fn access_label(&self) -> String {
        let first = self.title.split_whitespace().next().unwrap_or(self.title);
        format!("Access {first}")
    }
}

/// Expected first-response time for one class of issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTier {
    pub kind: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub static SUPPORT_CHANNELS: [SupportChannel; 3] = [
    SupportChannel {
        title: "Dashboard Support System",
        description: "Access our ticketing system and live chat directly through your account dashboard.",
        icon: Icon::Shield,
        href: DASHBOARD_URL,
        availability: "24/7 Available",
        recommended: true,
        details: "Best for account-specific issues, billing questions, and technical support.",
    },
    SupportChannel {
        title: "Control Panel Support",
        description: "Technical support and assistance available through the server control panel.",
        icon: Icon::MessageCircle,
        href: CONTROL_PANEL_URL,
        availability: "24/7 Available",
        recommended: false,
        details: "Ideal for server management questions and technical configurations.",
    },
    SupportChannel {
        title: "Discord Support",
        description: "Join our Discord community for real-time support and to connect with other users.",
        icon: Icon::MessageCircle,
        href: DISCORD_URL,
        availability: "Community-Based",
        recommended: false,
        details: "Perfect for quick questions, community help, and staying updated with announcements.",
    },
];

pub static RESPONSE_TIERS: [ResponseTier; 3] = [
    ResponseTier {
        kind: "Critical Issues",
        time: "< 1 Hour Response",
        description: "Server outages, security incidents, or service-affecting problems",
        icon: Icon::AlertCircle,
        accent: Accent::Red,
    },
    ResponseTier {
        kind: "General Support",
        time: "< 24 Hours Response",
        description: "Account questions, billing inquiries, and general assistance",
        icon: Icon::Clock,
        accent: Accent::Blue,
    },
    ResponseTier {
        kind: "Non-Critical",
        time: "< 48 Hours Response",
        description: "Feature requests, general questions, and informational inquiries",
        icon: Icon::Mail,
        accent: Accent::Green,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_labels_use_first_word() {
        let labels: Vec<_> = SUPPORT_CHANNELS.iter().map(SupportChannel::access_label).collect();
        assert_eq!(labels, ["Access Dashboard", "Access Control", "Access Discord"]);
    }

    #[test]
    fn test_exactly_one_recommended_channel() {
        let recommended: Vec<_> = SUPPORT_CHANNELS.iter().filter(|c| c.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].href, DASHBOARD_URL);
    }
}
