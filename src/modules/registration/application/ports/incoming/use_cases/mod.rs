mod export_registrations;
mod list_my_registrations;
mod register_for_event;

pub use export_registrations::{ExportRegistrationsError, ExportRegistrationsUseCase};
pub use list_my_registrations::{ListMyRegistrationsError, ListMyRegistrationsUseCase};
pub use register_for_event::{RegisterForEventError, RegisterForEventUseCase};
