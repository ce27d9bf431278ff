use std::sync::Arc;

use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventUseCase, DeleteEventUseCase, GetEventUseCase, ListEventsUseCase,
    UpdateEventUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub list: Arc<dyn ListEventsUseCase + Send + Sync>,
    pub get: Arc<dyn GetEventUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEventUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEventUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEventUseCase + Send + Sync>,
}
