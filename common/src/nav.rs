use crate::content::Icon;
use crate::routes::{normalize_path, Page};

pub const DASHBOARD_URL: &str = "https://deploy.acenodes.co.uk";
pub const CONTROL_PANEL_URL: &str = "https://panel.acenodes.co.uk";
pub const DISCORD_URL: &str = "https://discord.acenodes.co.uk";

/// Entry in the primary navigation (header, mobile menu and footer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub page: Page,
    pub icon: Icon,
}

impl NavItem {
    pub fn href(&self) -> &'static str {
        self.page.path()
    }
}

/// Link that leaves the site; always opened in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub static NAVIGATION: [NavItem; 4] = [
    NavItem { name: "Home", page: Page::Home, icon: Icon::Home },
    NavItem { name: "FAQ", page: Page::Faq, icon: Icon::MessageCircle },
    NavItem { name: "Terms & Policies", page: Page::Terms, icon: Icon::FileText },
    NavItem { name: "Contact", page: Page::Contact, icon: Icon::Shield },
];

pub static EXTERNAL_LINKS: [ExternalLink; 2] = [
    ExternalLink { name: "Dashboard", href: DASHBOARD_URL, icon: Icon::Server },
    ExternalLink { name: "Control Panel", href: CONTROL_PANEL_URL, icon: Icon::Shield },
];

/// Whether a nav link points at the page currently shown.
pub fn is_active(current_path: &str, href: &str) -> bool {
    normalize_path(current_path) == normalize_path(href)
}

/// Open/closed flag of the collapsible navigation shown on narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any link from the menu closes it.
    pub fn on_navigate(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn test_menu_toggle_then_navigate() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.on_navigate();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_while_closed_stays_closed() {
        let mut menu = MobileMenu::default();
        menu.on_navigate();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_is_active_exact_match() {
        assert!(is_active("/faq", "/faq"));
        assert!(is_active("/faq/", "/faq"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/terms/aup", "/terms"));
        assert!(!is_active("/faq", "/"));
    }

    #[test]
    fn test_navigation_targets_known_pages() {
        let hrefs: Vec<_> = NAVIGATION.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, ["/", "/faq", "/terms", "/contact"]);
        assert!(EXTERNAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }
}
