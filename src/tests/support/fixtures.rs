use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::auth_helper::TEST_USER_ID;
use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::registration::application::domain::entities::Registrant;

/// Plain student with an empty profile.
pub fn sample_user(email: &str) -> User {
    let now = Utc::now();
    User {
        user_id: UserId::from(TEST_USER_ID),
        user_email: email.to_string(),
        user_name: Some("Test Student".to_string()),
        profile_pic: None,
        roll_no: None,
        semester: None,
        branch: None,
        college_name: None,
        role: Role::User,
        created_at: now,
        updated_at: now,
    }
}

/// Visible event on 2025-03-14 18:30.
pub fn sample_event(name: &str) -> Event {
    let now = Utc::now();
    let event_date = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|d| d.and_hms_opt(18, 30, 0))
        .unwrap();

    Event {
        event_id: Uuid::new_v4(),
        event_name: name.to_string(),
        event_date,
        duration: Some(120),
        event_description: Some("Campus event".to_string()),
        poster: "https://cdn.example.com/poster.png".to_string(),
        reg_link: None,
        whatsapp_link: None,
        venue: Some("Main Auditorium".to_string()),
        visibility: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_registrant(email: &str) -> Registrant {
    Registrant {
        user_name: Some("Test Student".to_string()),
        user_email: email.to_string(),
        roll_no: Some("2021CS001".to_string()),
        semester: Some("5".to_string()),
        branch: Some("CSE".to_string()),
        registered_at: Utc::now(),
    }
}
