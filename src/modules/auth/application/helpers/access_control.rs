use std::sync::Arc;

use crate::auth::application::ports::outgoing::user_query::UserQuery;

/// Admin check used before every privileged operation. The role is read fresh
/// on each call and any failure denies.
#[derive(Clone)]
pub struct AccessControl {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl AccessControl {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn is_admin(&self, email: &str) -> bool {
        match self.user_query.find_by_email(email).await {
            Ok(Some(user)) if user.role.is_elevated() => true,
            Ok(Some(user)) => {
                tracing::warn!(user_id = %user.user_id, "Admin check denied: insufficient role");
                false
            }
            Ok(None) => {
                tracing::warn!("Admin check denied: no user for session e-mail");
                false
            }
            Err(e) => {
                tracing::error!("Admin check failed, denying: {}", e);
                false
            }
        }
    }
}
