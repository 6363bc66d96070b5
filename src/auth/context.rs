use serde::{Deserialize, Serialize};
use crate::types::{UserRole, UserStatus, Permission};
use crate::errors::{ServiceError, ServiceResult};
use crate::validation::{Email, NonEmptyString};

/// The signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Backend identifier of the user
    pub user_id: String,

    /// Login email, also used as the owner key on donation requests
    pub email: Email,

    pub display_name: String,

    pub role: UserRole,

    #[serde(default)]
    pub status: UserStatus,
}

impl AuthContext {
    /// Create a new authentication context, checking the email shape
    pub fn new(
        user_id: &str,
        email: &str,
        display_name: &str,
        role: UserRole,
        status: UserStatus,
    ) -> ServiceResult<Self> {
        let user_id = NonEmptyString::new(user_id)
            .map_err(|_| ServiceError::Authentication("missing user id".to_string()))?;
        let email = Email::new(email)?;
        Ok(Self {
            user_id: user_id.0,
            email,
            display_name: display_name.trim().to_string(),
            role,
            status,
        })
    }

    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }

    /// Check if user has a specific permission.
    /// Blocked accounts only keep read-only permissions.
    pub fn has_permission(&self, permission: Permission) -> bool {
        if self.is_blocked() && !permission.is_read_only() {
            return false;
        }
        self.role.has_permission(permission)
    }

    /// Authorize a specific permission, returning an error if not allowed
    pub fn authorize(&self, permission: Permission) -> ServiceResult<()> {
        if self.is_blocked() && !permission.is_read_only() {
            log::warn!("Blocked user {} attempted {}", self.user_id, permission.as_str());
            return Err(ServiceError::AccountBlocked(self.email.as_str().to_string()));
        }
        if self.role.has_permission(permission) {
            Ok(())
        } else {
            Err(ServiceError::PermissionDenied(format!(
                "role '{}' does not have permission: {}",
                self.role,
                permission.as_str()
            )))
        }
    }

    /// Authorize multiple permissions, requiring all of them
    pub fn authorize_all(&self, permissions: &[Permission]) -> ServiceResult<()> {
        permissions.iter().try_for_each(|p| self.authorize(*p))
    }

    /// Verify user is an admin
    pub fn authorize_admin(&self) -> ServiceResult<()> {
        if matches!(self.role, UserRole::Admin) && !self.is_blocked() {
            Ok(())
        } else {
            Err(ServiceError::PermissionDenied(
                "This action requires administrator privileges".to_string()
            ))
        }
    }

    /// For operations restricted to the user's own records
    pub fn authorize_owner_or_admin(&self, owner_email: &str) -> ServiceResult<()> {
        if self.is_blocked() {
            return Err(ServiceError::AccountBlocked(self.email.as_str().to_string()));
        }
        if self.email.as_str() == owner_email || matches!(self.role, UserRole::Admin) {
            Ok(())
        } else {
            Err(ServiceError::PermissionDenied(
                "You do not have permission to access this resource".to_string()
            ))
        }
    }
}
