use std::sync::Arc;

use crate::modules::registration::application::ports::incoming::use_cases::{
    ExportRegistrationsUseCase, ListMyRegistrationsUseCase, RegisterForEventUseCase,
};

#[derive(Clone)]
pub struct RegistrationUseCases {
    pub register: Arc<dyn RegisterForEventUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyRegistrationsUseCase + Send + Sync>,
    pub export: Arc<dyn ExportRegistrationsUseCase + Send + Sync>,
}
