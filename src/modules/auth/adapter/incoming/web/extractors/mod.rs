pub mod auth;

pub use auth::SessionUser;
