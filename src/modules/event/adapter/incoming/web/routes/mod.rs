mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod update_event;

pub use create_event::{
    __path_create_event_handler, create_event_handler, CreateEventRequest, CreatedEventResponse,
};
pub use delete_event::{
    __path_delete_event_handler, delete_event_handler, DeleteEventRequest, DeletedEventResponse,
};
pub use get_event::{__path_get_event_handler, get_event_handler, EventResponse};
pub use list_events::{__path_list_events_handler, list_events_handler, EventListResponse};
pub use update_event::{__path_update_event_handler, update_event_handler, UpdateEventRequest};
