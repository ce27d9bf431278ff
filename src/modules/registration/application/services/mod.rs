mod export_registrations_service;
mod list_my_registrations_service;
mod register_for_event_service;

pub use export_registrations_service::ExportRegistrationsService;
pub use list_my_registrations_service::ListMyRegistrationsService;
pub use register_for_event_service::RegisterForEventService;
