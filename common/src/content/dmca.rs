pub const SUBTITLE: &str = "Procedures for reporting copyright infringement and abuse complaints";

pub const OVERVIEW: &str = "AceNodes respects the intellectual property rights of others and expects customers to do the same. This policy explains how to report copyright infringement under the Digital Millennium Copyright Act (DMCA) and how to report other abuse originating from our network.";

pub const NOTICE_INTRO: &str = "A valid copyright infringement notice must include the following information:";

pub const NOTICE_REQUIREMENTS: &[&str] = &[
    "A physical or electronic signature of the copyright owner or an authorized agent",
    "Identification of the copyrighted work claimed to be infringed",
    "Identification of the infringing material and information sufficient to locate it, such as the server address",
    "Your contact information, including name, address, telephone number, and email",
    "A statement that you have a good faith belief that the use is not authorized by the copyright owner, its agent, or the law",
    "A statement, under penalty of perjury, that the information in the notice is accurate and that you are authorized to act on behalf of the owner",
];

/// How a complaint moves from receipt to resolution, rendered as a numbered list.
pub const HANDLING_STEPS: &[&str] = &[
    "Notice received and checked for completeness",
    "Affected customer notified and asked to remove or justify the content",
    "Content disabled if no adequate response is received",
    "Outcome recorded and both parties informed",
];

pub const COUNTER_NOTICE: &str = "If you believe material was removed by mistake or misidentification, you may submit a counter-notice through your dashboard. Material may be restored if the complainant does not take further action within the period set by law.";

pub const REPEAT_INFRINGERS: &str = "**Repeat Infringers:** Accounts that receive repeated valid infringement notices will be suspended or terminated in accordance with our Acceptable Use Policy.";

pub const ABUSE_REPORTS: &str = "To report other abuse such as spam, phishing, malware distribution, or attacks originating from an AceNodes server, use the abuse reporting system in the dashboard. Include server addresses, timestamps, and any logs that help us investigate.";

pub const FALSE_CLAIMS: &str = "Submitting a knowingly false or misleading notice may expose you to liability for damages. If you are unsure whether material infringes your rights, consider seeking legal advice first.";
