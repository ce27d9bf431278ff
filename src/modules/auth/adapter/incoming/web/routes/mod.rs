mod admin_status;
mod complete_profile;
mod fetch_profile;
mod sign_in;
mod update_profile;

pub use admin_status::{__path_admin_status_handler, admin_status_handler, AdminStatusResponse};
pub use complete_profile::{
    __path_complete_profile_handler, complete_profile_handler, CompleteProfileRequest,
};
pub use fetch_profile::{__path_fetch_profile_handler, fetch_profile_handler, UserProfileResponse};
pub use sign_in::{__path_sign_in_handler, sign_in_handler, SignInRequest, SignInResponse};
pub use update_profile::{
    __path_update_profile_handler, update_profile_handler, UpdateProfileRequest,
};
