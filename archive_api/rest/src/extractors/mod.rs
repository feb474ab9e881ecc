pub mod accept_language;
pub mod auth;
pub mod correlation_id;
pub mod user_agent;
