pub mod registrant_sheet;
pub mod registration_query;
pub mod registration_repository;

pub use registrant_sheet::{RegistrantSheet, RegistrantSheetError};
pub use registration_query::{RegistrationQuery, RegistrationQueryError};
pub use registration_repository::{RegistrationRepository, RegistrationRepositoryError};
