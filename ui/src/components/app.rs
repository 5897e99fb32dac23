use dioxus::prelude::*;

use acenodes_common::content::{Icon, BRAND, COPYRIGHT};
use acenodes_common::nav::{is_active, MobileMenu, EXTERNAL_LINKS, NAVIGATION};
use acenodes_common::routes::Page;

use super::contact_view::ContactView;
use super::faq_view::FaqView;
use super::home_view::HomeView;
use super::icon::IconGlyph;
use super::not_found_view::NotFoundView;
use super::policies::aup_view::AupView;
use super::policies::cookies_view::CookiesView;
use super::policies::data_retention_view::DataRetentionView;
use super::policies::dmca_view::DmcaView;
use super::policies::security_view::SecurityView;
use super::policies::sla_view::SlaView;
use super::terms_view::TermsView;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGO: &str = "/acenodes-logo.png";

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/faq")]
    Faq {},
    #[route("/terms")]
    Terms {},
    #[route("/contact")]
    Contact {},
    #[route("/terms/aup")]
    Aup {},
    #[route("/terms/cookies")]
    Cookies {},
    #[route("/terms/data-retention")]
    DataRetention {},
    #[route("/terms/dmca")]
    Dmca {},
    #[route("/terms/security")]
    Security {},
    #[route("/terms/sla")]
    Sla {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Faq => Route::Faq {},
            Page::Terms => Route::Terms {},
            Page::Contact => Route::Contact {},
            Page::Aup => Route::Aup {},
            Page::Cookies => Route::Cookies {},
            Page::DataRetention => Route::DataRetention {},
            Page::Dmca => Route::Dmca {},
            Page::Security => Route::Security {},
            Page::Sla => Route::Sla {},
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Header, mobile menu and footer wrapped around every page.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let mut menu = use_signal(MobileMenu::default);
    let menu_open = menu.read().is_open();

    rsx! {
        div { class: "site",
            nav { class: "site-nav",
                div { class: "nav-bar",
                    Link { to: Route::Home {}, class: "brand",
                        img { src: LOGO, alt: BRAND, class: "brand-logo" }
                        span { class: "brand-name gradient-text", "{BRAND}" }
                        span { class: "brand-suffix", "misc" }
                    }

                    div { class: "nav-desktop",
                        {NAVIGATION.iter().map(|item| {
                            let class = if is_active(&current_path, item.href()) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            rsx! {
                                Link { key: "{item.name}", to: Route::from(item.page), class: "{class}",
                                    IconGlyph { icon: item.icon }
                                    span { "{item.name}" }
                                }
                            }
                        })}
                        div { class: "nav-external",
                            for link in EXTERNAL_LINKS {
                                a {
                                    key: "{link.name}",
                                    class: "btn btn-outline btn-sm",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    IconGlyph { icon: link.icon }
                                    span { "{link.name}" }
                                    IconGlyph { icon: Icon::ExternalLink }
                                }
                            }
                        }
                    }

                    button {
                        class: "nav-toggle",
                        aria_label: "Toggle navigation",
                        onclick: move |_| {
                            menu.write().toggle();
                            tracing::debug!("mobile menu open: {}", menu.read().is_open());
                        },
                        if menu_open { "✕" } else { "☰" }
                    }
                }

                if menu_open {
                    div { class: "nav-mobile",
                        {NAVIGATION.iter().map(|item| {
                            let class = if is_active(&current_path, item.href()) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            rsx! {
                                Link {
                                    key: "{item.name}",
                                    to: Route::from(item.page),
                                    class: "{class}",
                                    onclick: move |_| menu.write().on_navigate(),
                                    IconGlyph { icon: item.icon }
                                    span { "{item.name}" }
                                }
                            }
                        })}
                        div { class: "nav-mobile-external",
                            for link in EXTERNAL_LINKS {
                                a {
                                    key: "{link.name}",
                                    class: "nav-link",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    onclick: move |_| menu.write().on_navigate(),
                                    IconGlyph { icon: link.icon }
                                    span { "{link.name}" }
                                    IconGlyph { icon: Icon::ExternalLink }
                                }
                            }
                        }
                    }
                }
            }

            main { class: "site-main",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    Link { to: Route::Home {}, class: "brand",
                        img { src: LOGO, alt: BRAND, class: "brand-logo" }
                        span { class: "brand-name gradient-text", "{BRAND}" }
                    }
                    p { "Professional game server hosting with 99.9% uptime guarantee and 24/7 support." }
                }
                div {
                    h3 { "Information" }
                    ul {
                        for item in NAVIGATION {
                            li { key: "{item.name}",
                                Link { to: Route::from(item.page), "{item.name}" }
                            }
                        }
                    }
                }
                div {
                    h3 { "Services" }
                    ul {
                        for link in EXTERNAL_LINKS {
                            li { key: "{link.name}",
                                a { href: link.href, target: "_blank", rel: "noopener noreferrer",
                                    span { "{link.name}" }
                                    IconGlyph { icon: Icon::ExternalLink }
                                }
                            }
                        }
                    }
                }
                div {
                    h3 { "Support" }
                    p { "24/7 Customer Support" }
                    p { class: "text-primary", "Available via Dashboard" }
                }
            }
            p { class: "footer-copyright", "{COPYRIGHT}" }
        }
    }
}

/// Route component: renders the landing page.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
fn Faq() -> Element {
    rsx! { FaqView {} }
}

#[component]
fn Terms() -> Element {
    rsx! { TermsView {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactView {} }
}

#[component]
fn Aup() -> Element {
    rsx! { AupView {} }
}

#[component]
fn Cookies() -> Element {
    rsx! { CookiesView {} }
}

#[component]
fn DataRetention() -> Element {
    rsx! { DataRetentionView {} }
}

#[component]
fn Dmca() -> Element {
    rsx! { DmcaView {} }
}

#[component]
fn Security() -> Element {
    rsx! { SecurityView {} }
}

#[component]
fn Sla() -> Element {
    rsx! { SlaView {} }
}

/// Route component: anything the router does not recognise.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { NotFoundView { path: path } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_page_paths() {
        for page in Page::ALL {
            assert_eq!(Route::from(page).to_string(), page.path());
        }
    }

    #[test]
    fn test_paths_parse_back_to_routes() {
        for page in Page::ALL {
            assert_eq!(page.path().parse::<Route>().ok(), Some(Route::from(page)));
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/pricing/plans".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["pricing".to_string(), "plans".to_string()],
            })
        );
    }
}
