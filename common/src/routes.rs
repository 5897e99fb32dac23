use std::fmt;

/// An internal page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    Faq,
    Terms,
    Contact,
    Aup,
    Cookies,
    DataRetention,
    Dmca,
    Security,
    Sla,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::Faq,
        Page::Terms,
        Page::Contact,
        Page::Aup,
        Page::Cookies,
        Page::DataRetention,
        Page::Dmca,
        Page::Security,
        Page::Sla,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Faq => "/faq",
            Page::Terms => "/terms",
            Page::Contact => "/contact",
            Page::Aup => "/terms/aup",
            Page::Cookies => "/terms/cookies",
            Page::DataRetention => "/terms/data-retention",
            Page::Dmca => "/terms/dmca",
            Page::Security => "/terms/security",
            Page::Sla => "/terms/sla",
        }
    }

    /// Heading shown at the top of the page (and in policy breadcrumbs).
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Faq => "Frequently Asked Questions",
            Page::Terms => "Terms & Policies",
            Page::Contact => "Contact Support",
            Page::Aup => "Acceptable Use Policy",
            Page::Cookies => "Cookie Policy",
            Page::DataRetention => "Data Retention & Deletion Policy",
            Page::Dmca => "DMCA & Abuse Reporting Policy",
            Page::Security => "Security Policy",
            Page::Sla => "Service Level Agreement (SLA)",
        }
    }

    /// Whether the page lives under the Terms & Policies hub.
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            Page::Aup
                | Page::Cookies
                | Page::DataRetention
                | Page::Dmca
                | Page::Security
                | Page::Sla
        )
    }

    /// Breadcrumb trail for policy pages: the hub followed by the page itself.
    pub fn breadcrumb(&self) -> Option<[Page; 2]> {
        self.is_policy().then_some([Page::Terms, *self])
    }

    /// Resolve a request path to a page.
    ///
    /// Query strings and fragments are ignored, as is a single trailing slash.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = normalize_path(path);
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip query, fragment and trailing slash (except for the root path).
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_resolves_from_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_trailing_slash_and_query_ignored() {
        assert_eq!(Page::from_path("/faq/"), Some(Page::Faq));
        assert_eq!(Page::from_path("/terms/sla?ref=footer"), Some(Page::Sla));
        assert_eq!(Page::from_path("/contact#hours"), Some(Page::Contact));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Page::from_path("/pricing"), None);
        assert_eq!(Page::from_path("/terms/aup/extra"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_policy_breadcrumbs() {
        assert_eq!(Page::Cookies.breadcrumb(), Some([Page::Terms, Page::Cookies]));
        assert_eq!(Page::Faq.breadcrumb(), None);
        assert_eq!(Page::ALL.iter().filter(|p| p.is_policy()).count(), 6);
    }

    #[test]
    fn test_policy_paths_live_under_terms() {
        for page in Page::ALL.iter().filter(|p| p.is_policy()) {
            assert!(page.path().starts_with("/terms/"), "{page} not under /terms");
        }
    }
}
