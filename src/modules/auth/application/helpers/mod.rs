pub mod access_control;
pub mod user_identity_resolver;

pub use access_control::AccessControl;
pub use user_identity_resolver::{ResolveUserIdError, UserIdentityResolver};
