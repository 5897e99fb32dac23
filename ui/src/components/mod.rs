pub mod app;
pub mod contact_view;
pub mod faq_view;
pub mod home_view;
pub mod icon;
pub mod markdown;
pub mod not_found_view;
pub mod page_shell;
pub mod policies;
pub mod terms_view;
