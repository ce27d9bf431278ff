mod complete_profile;
mod fetch_profile;
mod resolve_or_create_user;
mod sign_in;
mod update_profile;

pub use complete_profile::{CompleteProfileCommand, CompleteProfileError, CompleteProfileUseCase};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use resolve_or_create_user::{ResolveOrCreateUserError, ResolveOrCreateUserUseCase};
pub use sign_in::{SignInError, SignInResult, SignInUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
