use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CompleteProfileUseCase, FetchProfileUseCase, SignInUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub sign_in: Arc<dyn SignInUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub complete_profile: Arc<dyn CompleteProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
