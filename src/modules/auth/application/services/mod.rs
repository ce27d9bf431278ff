mod complete_profile_service;
mod fetch_profile_service;
mod resolve_or_create_user_service;
mod update_profile_service;

pub use complete_profile_service::CompleteProfileService;
pub use fetch_profile_service::FetchProfileService;
pub use resolve_or_create_user_service::ResolveOrCreateUserService;
pub use update_profile_service::UpdateProfileService;
