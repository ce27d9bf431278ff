use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Only the exact strings `admin` and `superadmin` elevate; anything else is a plain user.
    pub fn from_db(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Role::Admin,
            Some("superadmin") => Role::SuperAdmin,
            _ => Role::User,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub user_id: UserId,
    pub user_email: String,
    pub user_name: Option<String>,
    pub profile_pic: Option<String>,
    pub roll_no: Option<String>,
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub college_name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl User {
    pub fn is_profile_complete(&self) -> bool {
        present(&self.roll_no) && present(&self.semester) && present(&self.branch)
    }
}

/// Sign-in is limited to addresses under one institutional domain.
#[derive(Debug, Clone)]
pub struct EmailDomainPolicy {
    suffix: String,
}

impl EmailDomainPolicy {
    pub fn new(domain: &str) -> Self {
        let domain = domain.trim().trim_start_matches('@').to_lowercase();
        Self {
            suffix: format!("@{}", domain),
        }
    }

    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn allows(&self, email: &str) -> bool {
        let email = Self::normalize(email);
        email_address::EmailAddress::is_valid(&email)
            && email.ends_with(&self.suffix)
            && email.len() > self.suffix.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(roll_no: Option<&str>, semester: Option<&str>, branch: Option<&str>) -> User {
        User {
            user_id: UserId::from(Uuid::new_v4()),
            user_email: "student@gitam.in".to_string(),
            user_name: None,
            profile_pic: None,
            roll_no: roll_no.map(str::to_string),
            semester: semester.map(str::to_string),
            branch: branch.map(str::to_string),
            college_name: None,
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn role_from_db_only_elevates_exact_values() {
        assert_eq!(Role::from_db(Some("admin")), Role::Admin);
        assert_eq!(Role::from_db(Some("superadmin")), Role::SuperAdmin);
        assert_eq!(Role::from_db(Some("Admin")), Role::User);
        assert_eq!(Role::from_db(Some("moderator")), Role::User);
        assert_eq!(Role::from_db(None), Role::User);

        assert!(Role::Admin.is_elevated());
        assert!(Role::SuperAdmin.is_elevated());
        assert!(!Role::User.is_elevated());
    }

    #[test]
    fn profile_complete_needs_roll_semester_and_branch() {
        assert!(user_with(Some("R1"), Some("5"), Some("CSE")).is_profile_complete());
        assert!(!user_with(Some("R1"), Some("5"), None).is_profile_complete());
        assert!(!user_with(Some("R1"), Some("  "), Some("CSE")).is_profile_complete());
        assert!(!user_with(None, None, None).is_profile_complete());
    }

    #[test]
    fn domain_policy_is_case_insensitive() {
        let policy = EmailDomainPolicy::new("gitam.in");

        assert!(policy.allows("student@gitam.in"));
        assert!(policy.allows("Student@GITAM.IN"));
        assert!(!policy.allows("student@gmail.com"));
        assert!(!policy.allows("student@notgitam.in"));
        assert!(!policy.allows("@gitam.in"));
        assert!(!policy.allows("not an email@gitam.in"));
    }

    #[test]
    fn user_id_round_trips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = UserId::from(raw);

        assert_eq!(id.value(), raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
