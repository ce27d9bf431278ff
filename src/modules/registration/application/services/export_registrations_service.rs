use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::AccessControl;
use crate::modules::event::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};
use crate::modules::registration::application::domain::entities::{
    export_filename, RegistrationExport,
};
use crate::modules::registration::application::ports::incoming::use_cases::{
    ExportRegistrationsError, ExportRegistrationsUseCase,
};
use crate::modules::registration::application::ports::outgoing::registrant_sheet::{
    RegistrantSheet, RegistrantSheetError,
};
use crate::modules::registration::application::ports::outgoing::registration_query::{
    RegistrationQuery, RegistrationQueryError,
};

pub struct ExportRegistrationsService<Q, E, S>
where
    Q: RegistrationQuery,
    E: EventQuery,
    S: RegistrantSheet,
{
    registration_query: Q,
    event_query: E,
    sheet: S,
    access_control: AccessControl,
}

impl<Q, E, S> ExportRegistrationsService<Q, E, S>
where
    Q: RegistrationQuery,
    E: EventQuery,
    S: RegistrantSheet,
{
    pub fn new(
        registration_query: Q,
        event_query: E,
        sheet: S,
        access_control: AccessControl,
    ) -> Self {
        Self {
            registration_query,
            event_query,
            sheet,
            access_control,
        }
    }
}

#[async_trait]
impl<Q, E, S> ExportRegistrationsUseCase for ExportRegistrationsService<Q, E, S>
where
    Q: RegistrationQuery + Send + Sync,
    E: EventQuery + Send + Sync,
    S: RegistrantSheet + Send + Sync,
{
    async fn execute(
        &self,
        actor_email: &str,
        event_id: Option<Uuid>,
    ) -> Result<RegistrationExport, ExportRegistrationsError> {
        if !self.access_control.is_admin(actor_email).await {
            return Err(ExportRegistrationsError::Forbidden);
        }

        let event_id = event_id.ok_or_else(|| {
            ExportRegistrationsError::ValidationError("event_id is required".to_string())
        })?;

        let event = match self.event_query.get_by_id(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(ExportRegistrationsError::EventNotFound),
            Err(EventQueryError::DatabaseError(msg)) => {
                return Err(ExportRegistrationsError::RepositoryError(msg))
            }
        };

        let registrants = self
            .registration_query
            .registrants_for_event(event_id)
            .await
            .map_err(|RegistrationQueryError::DatabaseError(msg)| {
                ExportRegistrationsError::RepositoryError(msg)
            })?;

        let bytes = self
            .sheet
            .render(&registrants)
            .map_err(|RegistrantSheetError::RenderFailed(msg)| {
                ExportRegistrationsError::RepositoryError(msg)
            })?;

        tracing::info!(
            event_id = %event_id,
            rows = registrants.len(),
            "Registrations exported"
        );

        Ok(RegistrationExport {
            filename: export_filename(&event.event_name, self.sheet.extension()),
            content_type: self.sheet.content_type(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::event::application::domain::entities::Event;
    use crate::modules::registration::application::domain::entities::Registrant;
    use crate::tests::support::fixtures::{sample_event, sample_registrant};
    use crate::tests::support::stubs::access_control_with_admins;

    struct FixedRegistrants(Vec<Registrant>);

    #[async_trait]
    impl RegistrationQuery for FixedRegistrants {
        async fn events_for_user(
            &self,
            _user_id: UserId,
        ) -> Result<Vec<Event>, RegistrationQueryError> {
            unimplemented!("not used by export")
        }

        async fn registrants_for_event(
            &self,
            _event_id: Uuid,
        ) -> Result<Vec<Registrant>, RegistrationQueryError> {
            Ok(self.0.clone())
        }
    }

    struct OneEvent(Option<Event>);

    #[async_trait]
    impl EventQuery for OneEvent {
        async fn get_by_id(&self, _event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
            Ok(self.0.clone())
        }

        async fn list(&self, _include_hidden: bool) -> Result<Vec<Event>, EventQueryError> {
            unimplemented!("not used by export")
        }

        async fn find_by_name(&self, _event_name: &str) -> Result<Option<Event>, EventQueryError> {
            unimplemented!("not used by export")
        }
    }

    /// One line per registrant e-mail.
    struct LineSheet;

    impl RegistrantSheet for LineSheet {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, registrants: &[Registrant]) -> Result<Vec<u8>, RegistrantSheetError> {
            Ok(registrants
                .iter()
                .map(|r| r.user_email.as_str())
                .collect::<Vec<_>>()
                .join("\n")
                .into_bytes())
        }
    }

    fn service(event: Option<Event>) -> ExportRegistrationsService<FixedRegistrants, OneEvent, LineSheet> {
        ExportRegistrationsService::new(
            FixedRegistrants(vec![
                sample_registrant("b@gitam.in"),
                sample_registrant("a@gitam.in"),
            ]),
            OneEvent(event),
            LineSheet,
            access_control_with_admins(&["admin@gitam.in"]),
        )
    }

    #[tokio::test]
    async fn admin_gets_rendered_sheet_with_safe_filename() {
        let event = sample_event("AI/ML Bootcamp");

        let export = service(Some(event.clone()))
            .execute("admin@gitam.in", Some(event.event_id))
            .await
            .unwrap();

        assert_eq!(export.filename, "AI_ML Bootcamp_registrations.txt");
        assert_eq!(export.content_type, "text/plain");
        assert_eq!(export.bytes, b"b@gitam.in\na@gitam.in".to_vec());
    }

    #[tokio::test]
    async fn plain_user_is_forbidden() {
        let event = sample_event("Hack Night");

        let result = service(Some(event.clone()))
            .execute("student@gitam.in", Some(event.event_id))
            .await;

        assert_eq!(result.unwrap_err(), ExportRegistrationsError::Forbidden);
    }

    #[tokio::test]
    async fn missing_event_id_is_validation_error() {
        let result = service(None).execute("admin@gitam.in", None).await;

        assert!(matches!(
            result,
            Err(ExportRegistrationsError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let result = service(None)
            .execute("admin@gitam.in", Some(Uuid::new_v4()))
            .await;

        assert_eq!(result.unwrap_err(), ExportRegistrationsError::EventNotFound);
    }
}
