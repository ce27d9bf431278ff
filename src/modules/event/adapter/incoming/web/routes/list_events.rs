use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::get_event::EventResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::event::application::ports::incoming::use_cases::ListEventsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEventsQuery {
    /// Honoured for administrators only.
    pub include_hidden: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    params(ListEventsQuery),
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Events, newest first", body = inline(SuccessResponse<EventListResponse>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/events")]
pub async fn list_events_handler(
    user: Option<SessionUser>,
    query: web::Query<ListEventsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let include_hidden = match (query.include_hidden, &user) {
        (Some(true), Some(user)) => data.access_control.is_admin(&user.email).await,
        _ => false,
    };

    match data.event.list.execute(include_hidden).await {
        Ok(events) => ApiResponse::success(EventListResponse {
            events: events.into_iter().map(EventResponse::from).collect(),
        }),
        Err(ListEventsError::RepositoryError(msg)) => {
            error!("Failed to list events: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::event::application::domain::entities::Event;
    use crate::modules::event::application::ports::incoming::use_cases::ListEventsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::sample_event;
    use actix_web::{test, App};
    use async_trait::async_trait;

    /// Echoes the flag it was called with through the event name.
    struct EchoListEvents;

    #[async_trait]
    impl ListEventsUseCase for EchoListEvents {
        async fn execute(&self, include_hidden: bool) -> Result<Vec<Event>, ListEventsError> {
            Ok(vec![sample_event(&format!("include_hidden={}", include_hidden))])
        }
    }

    async fn list(uri: &str, email: Option<&str>) -> serde_json::Value {
        let app_state = TestAppStateBuilder::default()
            .with_list_events(EchoListEvents)
            .with_admins(&["admin@gitam.in"])
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(list_events_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some(email) = email {
            req = req.insert_header(bearer(email));
        }
        test::call_and_read_body_json(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn anonymous_listing_is_public() {
        let body = list("/api/events", None).await;
        assert_eq!(body["data"]["events"][0]["event_name"], "include_hidden=false");
    }

    #[actix_web::test]
    async fn admin_can_include_hidden() {
        let body = list("/api/events?include_hidden=true", Some("admin@gitam.in")).await;
        assert_eq!(body["data"]["events"][0]["event_name"], "include_hidden=true");
    }

    #[actix_web::test]
    async fn include_hidden_is_ignored_for_students() {
        let body = list("/api/events?include_hidden=true", Some("student@gitam.in")).await;
        assert_eq!(body["data"]["events"][0]["event_name"], "include_hidden=false");
    }

    #[actix_web::test]
    async fn include_hidden_is_ignored_without_session() {
        let body = list("/api/events?include_hidden=true", None).await;
        assert_eq!(body["data"]["events"][0]["event_name"], "include_hidden=false");
    }
}
