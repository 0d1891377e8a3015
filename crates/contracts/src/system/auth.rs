use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session identity resolved once per session and handed down via context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub uuid: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
    pub company_id: Option<i64>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    /// Admins hold every permission implicitly.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_admin || self.permissions.iter().any(|p| p == permission)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_holds_every_permission() {
        let user = UserInfo {
            is_admin: true,
            ..UserInfo::default()
        };
        assert!(user.has_permission("companies.manage"));
    }

    #[test]
    fn permission_lookup_is_exact() {
        let user = UserInfo {
            permissions: vec!["catalog.manage".to_string()],
            ..UserInfo::default()
        };
        assert!(user.has_permission("catalog.manage"));
        assert!(!user.has_permission("users.manage"));
    }
}
