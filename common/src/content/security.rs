use super::Icon;

pub const SUBTITLE: &str = "Technical and organizational measures we maintain to protect data";

pub const OVERVIEW: &str = "Security is built into every layer of the AceNodes platform. This policy describes the technical and organizational measures we maintain to protect customer servers, data, and accounts.";

/// A group of related safeguards shown as one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityArea {
    pub title: &'static str,
    pub icon: Icon,
    pub measures: &'static [&'static str],
}

pub static AREAS: [SecurityArea; 4] = [
    SecurityArea {
        title: "Infrastructure Protection",
        icon: Icon::Server,
        measures: &[
            "DDoS protection included on every game server",
            "Network firewalls restricting access to management interfaces",
            "Isolation between customer servers on shared hosts",
            "Continuous uptime and resource monitoring",
        ],
    },
    SecurityArea {
        title: "Data Protection",
        icon: Icon::Database,
        measures: &[
            "Encrypted backups stored separately from primary storage",
            "Backups retained for 14 days and then permanently erased",
            "Secure deletion when accounts are closed",
        ],
    },
    SecurityArea {
        title: "Access Control",
        icon: Icon::Lock,
        measures: &[
            "Staff access limited to what is required for their role",
            "Administrative actions logged and reviewed",
            "Customer access to files through the control panel and FTP only",
        ],
    },
    SecurityArea {
        title: "Incident Response",
        icon: Icon::AlertTriangle,
        measures: &[
            "Security incidents treated as critical with response within 1 hour",
            "Affected customers notified through the dashboard or email",
            "Post-incident review to prevent recurrence",
        ],
    },
];

pub const CUSTOMER_RESPONSIBILITIES: &[&str] = &[
    "Keep dashboard and control panel credentials private",
    "Use strong, unique passwords for game server administration",
    "Keep mods and plugins up to date",
    "Report suspected compromise to support immediately",
];

pub const DISCLOSURE: &str = "**Responsible Disclosure:** If you discover a vulnerability in our services, please report it privately through the dashboard support system. Do not access other customers' data or disrupt service while investigating.";
