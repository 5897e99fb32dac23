use super::{Accent, Icon};
use crate::routes::Page;

pub const INTRO: &str = "Welcome to AceNodes' Terms & Policies hub. Below you will find all the documents outlining our rules, policies, and commitments regarding our hosting services.";

/// Card on the Terms hub linking to one policy page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySummary {
    pub page: Page,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

impl PolicySummary {
    pub fn title(&self) -> &'static str {
        self.page.title()
    }

    pub fn href(&self) -> &'static str {
        self.page.path()
    }
}

pub static POLICIES: [PolicySummary; 6] = [
    PolicySummary {
        page: Page::Aup,
        description: "Guidelines for appropriate use of AceNodes services and prohibited activities.",
        icon: Icon::Shield,
        accent: Accent::Blue,
    },
    PolicySummary {
        page: Page::Cookies,
        description: "Information about cookies used on our website and how to manage them.",
        icon: Icon::Cookie,
        accent: Accent::Green,
    },
    PolicySummary {
        page: Page::DataRetention,
        description: "How we handle, retain, and delete customer data and backups.",
        icon: Icon::Database,
        accent: Accent::Purple,
    },
    PolicySummary {
        page: Page::Dmca,
        description: "Procedures for reporting copyright infringement and abuse complaints.",
        icon: Icon::AlertTriangle,
        accent: Accent::Orange,
    },
    PolicySummary {
        page: Page::Security,
        description: "Technical and organizational measures we maintain to protect data.",
        icon: Icon::Lock,
        accent: Accent::Red,
    },
    PolicySummary {
        page: Page::Sla,
        description: "Our uptime guarantees, support response times, and service commitments.",
        icon: Icon::FileCheck,
        accent: Accent::Cyan,
    },
];

pub const IMPORTANT_NOTICE: &[&str] = &[
    "By using AceNodes services, you agree to comply with all applicable policies and terms outlined in this section. These documents are regularly updated to reflect changes in our services and legal requirements.",
    "We recommend reviewing these policies periodically, especially when significant updates are made to our services. You will be notified of major policy changes through your dashboard or email.",
    "If you have questions about any of these policies or need clarification on specific terms, please contact our support team through your dashboard.",
];

/// Summary card for a policy page, if the page is one.
pub fn summary_for(page: Page) -> Option<&'static PolicySummary> {
    POLICIES.iter().find(|p| p.page == page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_policy_page_has_a_card() {
        for page in Page::ALL {
            assert_eq!(summary_for(page).is_some(), page.is_policy(), "{page}");
        }
    }

    #[test]
    fn test_card_titles_follow_pages() {
        let sla = summary_for(Page::Sla).unwrap();
        assert_eq!(sla.title(), "Service Level Agreement (SLA)");
        assert_eq!(sla.href(), "/terms/sla");
    }
}
