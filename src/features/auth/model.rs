use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::{ROLE_ADMIN, ROLE_STAFF};

/// Identity attached to a request after JWT validation.
///
/// Account management itself lives in the external identity provider; this is
/// only the validated claim set the rest of the service works with.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject claim, which is also the `profiles.id` of the account
    pub id: Uuid,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    pub fn is_staff(&self) -> bool {
        self.has_role(ROLE_STAFF)
    }

    /// Staff-level access (staff or admin)
    pub fn has_staff_access(&self) -> bool {
        self.is_admin() || self.is_staff()
    }

    /// On-campus accounts are identified by their institutional email domain.
    /// They must use the facility as walk-in during the reserved window and
    /// cannot pre-book those hours online.
    pub fn is_walk_in_restricted(&self, campus_email_domain: &str) -> bool {
        self.email
            .as_deref()
            .map(|e| e.ends_with(campus_email_domain))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(email: Option<&str>, roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            email: email.map(|e| e.to_string()),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_staff_access_levels() {
        assert!(user_with(None, &["admin"]).has_staff_access());
        assert!(user_with(None, &["staff"]).has_staff_access());
        assert!(!user_with(None, &["user"]).has_staff_access());
        assert!(!user_with(None, &[]).has_staff_access());
    }

    #[test]
    fn test_walk_in_restriction_by_email_domain() {
        assert!(user_with(Some("somchai.j@ku.th"), &["user"]).is_walk_in_restricted("@ku.th"));
        assert!(!user_with(Some("visitor@gmail.com"), &["user"]).is_walk_in_restricted("@ku.th"));
        // No email on record means no restriction
        assert!(!user_with(None, &["user"]).is_walk_in_restricted("@ku.th"));
    }
}
