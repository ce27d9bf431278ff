use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AdminStatusResponse, CompleteProfileRequest, SignInRequest, SignInResponse,
    UpdateProfileRequest, UserProfileResponse,
};
use crate::modules::event::adapter::incoming::web::routes::{
    CreateEventRequest, CreatedEventResponse, DeleteEventRequest, DeletedEventResponse,
    EventListResponse, EventResponse, UpdateEventRequest,
};
use crate::modules::registration::adapter::incoming::web::routes::{
    MyRegistrationsResponse, RegisterForEventRequest, RegistrationCreatedResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Events API",
        version = "1.0.0",
        description = "Event listings, student registrations and administrator exports"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::sign_in_handler,
        crate::auth::adapter::incoming::web::routes::admin_status_handler,

        // User profile
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::complete_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,

        // Events
        crate::modules::event::adapter::incoming::web::routes::list_events_handler,
        crate::modules::event::adapter::incoming::web::routes::get_event_handler,
        crate::modules::event::adapter::incoming::web::routes::create_event_handler,
        crate::modules::event::adapter::incoming::web::routes::update_event_handler,
        crate::modules::event::adapter::incoming::web::routes::delete_event_handler,

        // Registrations
        crate::modules::registration::adapter::incoming::web::routes::list_my_registrations_handler,
        crate::modules::registration::adapter::incoming::web::routes::register_for_event_handler,
        crate::modules::registration::adapter::incoming::web::routes::export_registrations_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            SignInRequest,
            SignInResponse,
            AdminStatusResponse,
            UserProfileResponse,
            CompleteProfileRequest,
            UpdateProfileRequest,

            EventResponse,
            EventListResponse,
            CreateEventRequest,
            CreatedEventResponse,
            UpdateEventRequest,
            DeleteEventRequest,
            DeletedEventResponse,

            RegisterForEventRequest,
            RegistrationCreatedResponse,
            MyRegistrationsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-in and session endpoints"),
        (name = "users", description = "Student profile endpoints"),
        (name = "events", description = "Event listing and administration"),
        (name = "registrations", description = "Event registration and export"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by /api/auth/sign-in"))
                        .build(),
                ),
            )
        }
    }
}
