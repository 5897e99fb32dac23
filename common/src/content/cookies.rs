pub const SUBTITLE: &str = "How we use cookies to enhance your experience";

pub const WHAT_ARE_COOKIES: &str = "Cookies are small text files that are stored on your device when you visit our website. They help us provide you with a better browsing experience by remembering your preferences and improving site functionality.";

pub const CONSENT: &str = "By using our website, you agree to our cookie usage as described in this policy. You can manage cookie preferences through your browser settings at any time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieType {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub required: bool,
}

impl CookieType {
    pub fn requirement_label(&self) -> &'static str {
        if self.required {
            "Required"
        } else {
            "Optional"
        }
    }
}

/// Where a browser keeps its cookie controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserGuide {
    pub browser: &'static str,
    pub settings_path: &'static str,
}

pub static COOKIE_TYPES: [CookieType; 3] = [
    CookieType {
        name: "Essential Cookies",
        description: "Required for basic website functionality and security. These cannot be disabled.",
        examples: &["Session management", "Security features", "Load balancing"],
        required: true,
    },
    CookieType {
        name: "Analytics Cookies",
        description: "Help us understand how visitors interact with our website to improve performance.",
        examples: &["Page views", "User behavior", "Performance metrics"],
        required: false,
    },
    CookieType {
        name: "Preference Cookies",
        description: "Remember your settings and preferences for a personalized experience.",
        examples: &["Language settings", "Theme preferences", "Dashboard layout"],
        required: false,
    },
];

pub const MANAGING: &str = "You can control and manage cookies through your browser settings. Most browsers allow you to block or delete cookies, though this may affect website functionality.";

pub static BROWSER_GUIDES: [BrowserGuide; 4] = [
    BrowserGuide {
        browser: "Chrome",
        settings_path: "Settings → Privacy and Security → Cookies and other site data",
    },
    BrowserGuide {
        browser: "Firefox",
        settings_path: "Options → Privacy & Security → Cookies and Site Data",
    },
    BrowserGuide {
        browser: "Safari",
        settings_path: "Preferences → Privacy → Manage Website Data",
    },
    BrowserGuide {
        browser: "Edge",
        settings_path: "Settings → Cookies and site permissions → Cookies",
    },
];

pub const DISABLING_WARNING: &str = "**Important:** Disabling certain cookies may affect website functionality, including login sessions, preferences, and some dashboard features.";

pub const THIRD_PARTY_INTRO: &str = "We may use third-party services that set their own cookies to provide functionality such as analytics, support systems, or payment processing. These services have their own cookie policies:";

pub const THIRD_PARTY_SERVICES: &[&str] = &[
    "Analytics providers for website performance tracking",
    "Support and chat systems for customer assistance",
    "Payment processors for secure transaction handling",
];

pub const QUESTIONS: &str = "If you have questions about our cookie policy or need assistance with cookie settings, please contact our support team through your dashboard.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_essential_cookies_are_required() {
        let required: Vec<_> = COOKIE_TYPES
            .iter()
            .filter(|t| t.required)
            .map(|t| t.name)
            .collect();
        assert_eq!(required, ["Essential Cookies"]);
        assert_eq!(COOKIE_TYPES[1].requirement_label(), "Optional");
    }
}
