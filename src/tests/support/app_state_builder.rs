use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::AccessControl;
use crate::auth::application::ports::incoming::use_cases::{
    CompleteProfileUseCase, FetchProfileUseCase, SignInUseCase, UpdateProfileUseCase,
};
use crate::modules::event::application::event_use_cases::EventUseCases;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventUseCase, DeleteEventUseCase, GetEventUseCase, ListEventsUseCase,
    UpdateEventUseCase,
};
use crate::modules::registration::application::ports::incoming::use_cases::{
    ExportRegistrationsUseCase, ListMyRegistrationsUseCase, RegisterForEventUseCase,
};
use crate::modules::registration::application::registration_use_cases::RegistrationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case fails unless a test swaps it in.
/// Nobody is an admin until `with_admins` is called.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    event: EventUseCases,
    registration: RegistrationUseCases,
    access_control: AccessControl,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                sign_in: Arc::new(UnusedSignIn),
                fetch_profile: Arc::new(UnusedFetchProfile),
                complete_profile: Arc::new(UnusedCompleteProfile),
                update_profile: Arc::new(UnusedUpdateProfile),
            },
            event: EventUseCases {
                list: Arc::new(UnusedListEvents),
                get: Arc::new(UnusedGetEvent),
                create: Arc::new(UnusedCreateEvent),
                update: Arc::new(UnusedUpdateEvent),
                delete: Arc::new(UnusedDeleteEvent),
            },
            registration: RegistrationUseCases {
                register: Arc::new(UnusedRegisterForEvent),
                list_mine: Arc::new(UnusedListMyRegistrations),
                export: Arc::new(UnusedExportRegistrations),
            },
            access_control: access_control_with_admins(&[]),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_sign_in(mut self, uc: impl SignInUseCase + Send + Sync + 'static) -> Self {
        self.auth.sign_in = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_complete_profile(
        mut self,
        uc: impl CompleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.complete_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_admins(mut self, admins: &[&str]) -> Self {
        self.access_control = access_control_with_admins(admins);
        self
    }

    pub fn with_list_events(mut self, uc: impl ListEventsUseCase + Send + Sync + 'static) -> Self {
        self.event.list = Arc::new(uc);
        self
    }

    pub fn with_get_event(mut self, uc: impl GetEventUseCase + Send + Sync + 'static) -> Self {
        self.event.get = Arc::new(uc);
        self
    }

    pub fn with_create_event(
        mut self,
        uc: impl CreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.create = Arc::new(uc);
        self
    }

    pub fn with_update_event(
        mut self,
        uc: impl UpdateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.update = Arc::new(uc);
        self
    }

    pub fn with_delete_event(
        mut self,
        uc: impl DeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.delete = Arc::new(uc);
        self
    }

    pub fn with_register_for_event(
        mut self,
        uc: impl RegisterForEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.registration.register = Arc::new(uc);
        self
    }

    pub fn with_list_my_registrations(
        mut self,
        uc: impl ListMyRegistrationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.registration.list_mine = Arc::new(uc);
        self
    }

    pub fn with_export_registrations(
        mut self,
        uc: impl ExportRegistrationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.registration.export = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            event: self.event,
            registration: self.registration,
            access_control: self.access_control,
        })
    }
}
