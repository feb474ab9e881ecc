use archive_auth_impl::AuthServiceImpl;
use archive_core_contact_impl::{
    notification::ContactNotificationServiceImpl, ContactFeatureServiceImpl,
};
use archive_core_health_impl::HealthFeatureServiceImpl;
use archive_email_impl::EmailServiceImpl;
use archive_shared_impl::{jwt::JwtServiceImpl, time::TimeServiceImpl};
use archive_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = archive_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
pub type Jwt = JwtServiceImpl<Time>;

// Auth
pub type Auth = AuthServiceImpl<Jwt>;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<Auth, ContactNotification>;
pub type ContactNotification = ContactNotificationServiceImpl<Time, Template, Email>;
