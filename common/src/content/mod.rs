//! Static copy for every page of the site.
//!
//! Each submodule holds the records one page renders. The UI crate maps them
//! onto markup; nothing here knows about styling beyond the semantic
//! [`Accent`] and [`Variant`] hints.

pub mod aup;
pub mod contact;
pub mod cookies;
pub mod data_retention;
pub mod dmca;
pub mod home;
pub mod security;
pub mod sla;
pub mod terms;

use chrono::NaiveDate;

pub const BRAND: &str = "AceNodes";
pub const COPYRIGHT: &str = "© 2024 AceNodes. All rights reserved.";

/// Pictogram attached to a card, nav entry or notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertCircle,
    AlertTriangle,
    CheckCircle,
    Clock,
    Cookie,
    Database,
    ExternalLink,
    FileCheck,
    FileText,
    Home,
    Lock,
    Mail,
    MessageCircle,
    Server,
    Settings,
    Shield,
    Trash,
    Zap,
}

impl Icon {
    /// Kebab-case name, used as the `icon-<name>` CSS class.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::AlertCircle => "alert-circle",
            Icon::AlertTriangle => "alert-triangle",
            Icon::CheckCircle => "check-circle",
            Icon::Clock => "clock",
            Icon::Cookie => "cookie",
            Icon::Database => "database",
            Icon::ExternalLink => "external-link",
            Icon::FileCheck => "file-check",
            Icon::FileText => "file-text",
            Icon::Home => "home",
            Icon::Lock => "lock",
            Icon::Mail => "mail",
            Icon::MessageCircle => "message-circle",
            Icon::Server => "server",
            Icon::Settings => "settings",
            Icon::Shield => "shield",
            Icon::Trash => "trash",
            Icon::Zap => "zap",
        }
    }

    /// Text fallback shown inside the icon element.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::AlertCircle => "!",
            Icon::AlertTriangle => "⚠",
            Icon::CheckCircle => "✓",
            Icon::Clock => "◷",
            Icon::Cookie => "◉",
            Icon::Database => "⛁",
            Icon::ExternalLink => "↗",
            Icon::FileCheck => "☑",
            Icon::FileText => "☰",
            Icon::Home => "⌂",
            Icon::Lock => "⚿",
            Icon::Mail => "✉",
            Icon::MessageCircle => "✆",
            Icon::Server => "▤",
            Icon::Settings => "⚙",
            Icon::Shield => "⛨",
            Icon::Trash => "✕",
            Icon::Zap => "ϟ",
        }
    }
}

/// Color hint for icons on policy and response-time cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Cyan,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
            Accent::Red => "accent-red",
            Accent::Cyan => "accent-cyan",
        }
    }
}

/// Button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
}

impl Variant {
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Primary => "btn btn-primary",
            Variant::Secondary => "btn btn-secondary",
        }
    }
}

/// Date the policy documents were last revised.
pub fn policies_updated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap_or_default()
}

/// "December 2024" style label for [`policies_updated`].
pub fn last_updated_label() -> String {
    policies_updated().format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_updated_label() {
        assert_eq!(last_updated_label(), "December 2024");
    }

    #[test]
    fn test_icon_names_are_kebab_case() {
        for icon in [Icon::AlertTriangle, Icon::FileCheck, Icon::MessageCircle, Icon::Zap] {
            let name = icon.name();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{name}");
            assert!(!icon.glyph().is_empty());
        }
    }
}
