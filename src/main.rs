pub mod modules;
pub use modules::{auth, event, registration};

mod api;
mod config;
mod health;
mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{IdentityAssertionVerifier, JwtTokenService};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::entities::EmailDomainPolicy;
use crate::auth::application::helpers::{AccessControl, UserIdentityResolver};
use crate::auth::application::orchestrator::SignInOrchestrator;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::{
    CompleteProfileService, FetchProfileService, ResolveOrCreateUserService,
    UpdateProfileService,
};
use crate::config::AppConfig;
use crate::event::adapter::outgoing::event_query_postgres::EventQueryPostgres;
use crate::event::adapter::outgoing::event_repository_postgres::EventRepositoryPostgres;
use crate::event::application::event_use_cases::EventUseCases;
use crate::event::application::services::{
    CreateEventService, DeleteEventService, GetEventService, ListEventsService,
    UpdateEventService,
};
use crate::registration::adapter::outgoing::csv_registrant_sheet::CsvRegistrantSheet;
use crate::registration::adapter::outgoing::registration_query_postgres::RegistrationQueryPostgres;
use crate::registration::adapter::outgoing::registration_repository_postgres::RegistrationRepositoryPostgres;
use crate::registration::application::registration_use_cases::RegistrationUseCases;
use crate::registration::application::services::{
    ExportRegistrationsService, ListMyRegistrationsService, RegisterForEventService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{middleware, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub event: EventUseCases,
    pub registration: RegistrationUseCases,
    pub access_control: AccessControl,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    config: &AppConfig,
    db: Arc<DatabaseConnection>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db)));
    let access_control = AccessControl::new(user_query.clone());
    let identity = UserIdentityResolver::new(user_query.clone());

    // Auth
    let resolve_or_create_user = ResolveOrCreateUserService::new(
        UserRepositoryPostgres::new(Arc::clone(&db)),
        EmailDomainPolicy::new(&config.allowed_email_domain),
    );
    let sign_in = SignInOrchestrator::new(
        Arc::new(IdentityAssertionVerifier::new(&config.identity)),
        Arc::new(resolve_or_create_user),
        token_provider,
    );
    let auth = AuthUseCases {
        sign_in: Arc::new(sign_in),
        fetch_profile: Arc::new(FetchProfileService::new(UserQueryPostgres::new(
            Arc::clone(&db),
        ))),
        complete_profile: Arc::new(CompleteProfileService::new(UserRepositoryPostgres::new(
            Arc::clone(&db),
        ))),
        update_profile: Arc::new(UpdateProfileService::new(UserRepositoryPostgres::new(
            Arc::clone(&db),
        ))),
    };

    // Events
    let event = EventUseCases {
        list: Arc::new(ListEventsService::new(EventQueryPostgres::new(Arc::clone(
            &db,
        )))),
        get: Arc::new(GetEventService::new(EventQueryPostgres::new(Arc::clone(&db)))),
        create: Arc::new(CreateEventService::new(
            EventRepositoryPostgres::new(Arc::clone(&db)),
            access_control.clone(),
        )),
        update: Arc::new(UpdateEventService::new(
            EventRepositoryPostgres::new(Arc::clone(&db)),
            access_control.clone(),
        )),
        delete: Arc::new(DeleteEventService::new(
            EventRepositoryPostgres::new(Arc::clone(&db)),
            access_control.clone(),
        )),
    };

    // Registrations
    let registration = RegistrationUseCases {
        register: Arc::new(RegisterForEventService::new(
            RegistrationRepositoryPostgres::new(Arc::clone(&db)),
            EventQueryPostgres::new(Arc::clone(&db)),
            identity.clone(),
        )),
        list_mine: Arc::new(ListMyRegistrationsService::new(
            RegistrationQueryPostgres::new(Arc::clone(&db)),
            identity,
        )),
        export: Arc::new(ExportRegistrationsService::new(
            RegistrationQueryPostgres::new(Arc::clone(&db)),
            EventQueryPostgres::new(Arc::clone(&db)),
            CsvRegistrantSheet,
            access_control.clone(),
        )),
    };

    AppState {
        auth,
        event,
        registration,
        access_control,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    info!(
        environment = %config.environment,
        "Starting campus events service..."
    );

    let connect_options = config
        .database
        .connect_options()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let conn = Database::connect(connect_options)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let db_arc = Arc::new(conn);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.session.clone()));
    let state = build_state(&config, Arc::clone(&db_arc), Arc::clone(&token_provider_arc));
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_in_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_status_handler);
    // User profile
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::complete_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    // Events
    cfg.service(crate::event::adapter::incoming::web::routes::list_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::create_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::update_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::delete_event_handler);
    // Registrations
    cfg.service(crate::registration::adapter::incoming::web::routes::register_for_event_handler);
    cfg.service(
        crate::registration::adapter::incoming::web::routes::list_my_registrations_handler,
    );
    cfg.service(
        crate::registration::adapter::incoming::web::routes::export_registrations_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
