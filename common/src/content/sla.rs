use chrono::Duration;

pub const SUBTITLE: &str = "Our uptime guarantees, support response times, and service commitments";

pub const OVERVIEW: &str = "This Service Level Agreement (SLA) describes the availability and support levels AceNodes commits to for all hosting services. It applies to every active game server from the moment it is provisioned.";

/// Guaranteed monthly availability, in basis points (9990 = 99.9%).
pub const UPTIME_BASIS_POINTS: u32 = 9_990;

pub const MONITORING: &str = "Our monitoring systems detect issues immediately and our technical team works to resolve problems as quickly as possible.";

pub const CREDIT_ELIGIBILITY: &str = "Any downtime that affects our SLA commitment may be eligible for service credits. Contact our support team through the dashboard to discuss your specific situation.";

/// Percentage text for a basis-point figure, without trailing zeros
/// ("99.9%", "99.95%", "100%").
pub fn uptime_label(basis_points: u32) -> String {
    let (whole, frac) = (basis_points / 100, basis_points % 100);
    match frac {
        0 => format!("{whole}%"),
        f if f % 10 == 0 => format!("{whole}.{}%", f / 10),
        f => format!("{whole}.{f:02}%"),
    }
}

/// Longest downtime over `period` that still meets `uptime_basis_points`.
pub fn allowed_downtime(uptime_basis_points: u32, period: Duration) -> Duration {
    let down = 10_000 - i64::from(uptime_basis_points.min(10_000));
    Duration::milliseconds(period.num_milliseconds() * down / 10_000)
}

/// Compact "8h 45m 36s" rendering; zero components are omitted.
pub fn format_downtime(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

/// Downtime budget of the guarantee over a 30-day month.
pub fn monthly_downtime_label() -> String {
    format_downtime(allowed_downtime(UPTIME_BASIS_POINTS, Duration::days(30)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_budget() {
        let budget = allowed_downtime(UPTIME_BASIS_POINTS, Duration::days(30));
        assert_eq!(budget, Duration::minutes(43) + Duration::seconds(12));
        assert_eq!(monthly_downtime_label(), "43m 12s");
    }

    #[test]
    fn test_yearly_budget() {
        let budget = allowed_downtime(UPTIME_BASIS_POINTS, Duration::days(365));
        assert_eq!(format_downtime(budget), "8h 45m 36s");
    }

    #[test]
    fn test_full_uptime_allows_nothing() {
        assert_eq!(allowed_downtime(10_000, Duration::days(30)), Duration::zero());
        assert_eq!(allowed_downtime(12_000, Duration::days(30)), Duration::zero());
        assert_eq!(format_downtime(Duration::zero()), "0s");
    }

    #[test]
    fn test_uptime_label() {
        assert_eq!(uptime_label(UPTIME_BASIS_POINTS), "99.9%");
        assert_eq!(uptime_label(9_995), "99.95%");
        assert_eq!(uptime_label(9_905), "99.05%");
        assert_eq!(uptime_label(9_900), "99%");
        assert_eq!(uptime_label(10_000), "100%");
    }
}
