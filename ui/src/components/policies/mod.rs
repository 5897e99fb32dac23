pub mod aup_view;
pub mod cookies_view;
pub mod data_retention_view;
pub mod dmca_view;
pub mod security_view;
pub mod sla_view;
