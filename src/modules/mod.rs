pub mod auth;
pub mod event;
pub mod registration;
