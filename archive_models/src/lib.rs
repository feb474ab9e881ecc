pub mod auth;
pub mod contact;
pub mod email_address;
pub mod locale;
mod macros;
pub mod user;
