#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
pub fn make_user(email: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: Some(email.to_string()),
        roles: vec!["user".to_string()],
    }
}

#[cfg(test)]
pub fn make_staff() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: Some("staff@example.com".to_string()),
        roles: vec!["staff".to_string()],
    }
}

#[cfg(test)]
pub fn make_admin() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: Some("admin@example.com".to_string()),
        roles: vec!["admin".to_string()],
    }
}
