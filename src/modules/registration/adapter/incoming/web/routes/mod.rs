mod export_registrations;
mod list_my_registrations;
mod register_for_event;

pub use export_registrations::{
    __path_export_registrations_handler, export_registrations_handler, ExportRegistrationsQuery,
};
pub use list_my_registrations::{
    __path_list_my_registrations_handler, list_my_registrations_handler, MyRegistrationsResponse,
};
pub use register_for_event::{
    __path_register_for_event_handler, register_for_event_handler, RegisterForEventRequest,
    RegistrationCreatedResponse,
};
