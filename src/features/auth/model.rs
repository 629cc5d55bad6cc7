use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

/// Identity extracted from a validated bearer access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user can access the admin back office
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let admin = AuthenticatedUser {
            sub: "user-1".to_string(),
            roles: vec!["admin".to_string()],
        };
        let buyer = AuthenticatedUser {
            sub: "user-2".to_string(),
            roles: vec![],
        };

        assert!(admin.is_admin());
        assert!(!buyer.is_admin());
    }
}
