mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventError, CreateEventUseCase};
pub use delete_event::{DeleteEventError, DeleteEventUseCase};
pub use get_event::{GetEventError, GetEventUseCase};
pub use list_events::{ListEventsError, ListEventsUseCase};
pub use update_event::{UpdateEventCommand, UpdateEventError, UpdateEventUseCase};
