pub mod content;
pub mod faq;
pub mod nav;
pub mod routes;
