pub const SUBTITLE: &str = "Guidelines for appropriate use of AceNodes services";

pub const PURPOSE: &str = "This Acceptable Use Policy (AUP) outlines the acceptable use of AceNodes hosting services. All customers must comply with this policy to ensure the security, reliability, and legal compliance of our services. Customers must not use our services to host, distribute, or engage in any illegal content, spam, or harmful activities.";

pub const PROHIBITED_NOTICE: &str = "The following activities are strictly prohibited when using AceNodes services:";

pub const PROHIBITED_ACTIVITIES: &[&str] = &[
    "Unauthorized access attempts to any system or network",
    "Hosting, distributing, or transmitting malware, viruses, or harmful software",
    "Hosting phishing websites or content designed to steal personal information",
    "Sending unsolicited bulk emails (spam) or promotional material",
    "Any activity that violates applicable local, national, or international laws",
    "Content that infringes on intellectual property rights",
    "Hosting illegal file sharing or piracy content",
    "Any activity that degrades network performance for other users",
];

pub const ENFORCEMENT_INTRO: &str = "Violations of this Acceptable Use Policy may result in immediate action to protect our infrastructure and other customers. Enforcement actions may include:";

/// Escalating responses, rendered as a numbered list.
pub const ENFORCEMENT_ACTIONS: &[&str] = &[
    "Warning and request for immediate compliance",
    "Temporary suspension of service",
    "Permanent termination of service",
    "Legal action if required by law or regulation",
];

pub const INVESTIGATION: &str = "**Investigation Process:** All reported violations are investigated thoroughly. Customers will be contacted during the investigation process and given an opportunity to respond to allegations before final action is taken.";

pub const REPORTING: &str = "If you believe someone is violating this Acceptable Use Policy, please report it immediately through our abuse reporting system. Include as much detail as possible to help us investigate quickly and effectively.";

pub const UPDATES: &str = "This Acceptable Use Policy may be updated from time to time to reflect changes in our services, legal requirements, or industry standards. Customers will be notified of significant changes through their dashboard or email.";
