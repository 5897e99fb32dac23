use super::Icon;

pub const SUBTITLE: &str = "How we handle, retain, and delete customer data and backups";

pub const OVERVIEW: &str = "This policy explains how AceNodes handles the retention and deletion of customer data. We are committed to protecting your privacy and ensuring that your data is handled responsibly throughout its lifecycle.";

pub const OVERVIEW_NOTICE: &str = "We retain customer data only as long as necessary to provide our services and comply with legal obligations. Data deletion is performed securely and completely.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPeriod {
    pub kind: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static RETENTION_PERIODS: [RetentionPeriod; 4] = [
    RetentionPeriod {
        kind: "Active Account Data",
        period: "During active subscription",
        description: "Customer data, server configurations, and files are retained while your account remains active.",
        icon: Icon::Database,
    },
    RetentionPeriod {
        kind: "Account Termination",
        period: "30 days",
        description: "After account closure, data is securely deleted within 30 days unless legally required to retain.",
        icon: Icon::Trash,
    },
    RetentionPeriod {
        kind: "Backup Retention",
        period: "14 days",
        description: "Backups are maintained for up to 14 days and then permanently erased from all systems.",
        icon: Icon::Clock,
    },
    RetentionPeriod {
        kind: "Legal Compliance",
        period: "As required by law",
        description: "Some data may be retained longer if required by legal obligations or ongoing investigations.",
        icon: Icon::Shield,
    },
];

pub const DELETION_INTRO: &str = "When you close your account or request data deletion, we follow a comprehensive process to ensure your data is completely and securely removed from our systems:";

pub const DELETION_STEPS: &[&str] = &[
    "Account closure request received and verified",
    "Data marked for deletion in our systems",
    "Secure deletion from primary storage within 7 days",
    "Backup systems purged within 30 days",
    "Confirmation of complete data removal",
];

/// Heading and body for each backup-handling block.
pub const BACKUP_HANDLING: &[(&str, &str)] = &[
    (
        "Backup Creation",
        "We create regular backups of customer data to ensure service reliability and disaster recovery capabilities. These backups are encrypted and stored securely.",
    ),
    (
        "Backup Retention",
        "Backups are automatically deleted after 14 days. This ensures we can recover from recent issues while minimizing long-term data storage.",
    ),
    (
        "Backup Deletion",
        "When data deletion is requested, backups containing your data are identified and securely purged from all backup systems within our retention timeline.",
    ),
];

pub const LEGAL_NOTICE: &str = "**Legal Obligations:** In some cases, we may be required by law to retain certain data for longer periods, such as for tax purposes, legal proceedings, or regulatory compliance.";

pub const EXTENDED_RETENTION_CASES: &[&str] = &[
    "Active legal proceedings or investigations",
    "Regulatory compliance requirements",
    "Tax and financial record obligations",
    "Security incident investigations",
];

pub const ACCESS_REQUESTS: &str = "You have the right to request access to your data or request its deletion. Contact our support team through your dashboard to initiate these requests.";
