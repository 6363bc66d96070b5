use serde::{Deserialize, Serialize};
use std::fmt;

// --- User Role Definition ---

/// UserRole enum for authorization in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Donor,
    Volunteer,
}

/// Account status; blocked accounts keep read access only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

// --- Permission Enum Definition ---

/// Permission enum representing individual permissions in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    // Dashboard access
    ViewDashboard,

    // User management
    ManageUsers,

    // Donation request permissions
    CreateDonationRequest,
    EditOwnDonationRequest,
    ViewAllDonationRequests,
    UpdateDonationStatus,
    DeleteDonationRequest,
    RespondToDonationRequest,

    // Content permissions
    CreateBlog,
    PublishBlog,
    DeleteBlog,

    // Funding permissions
    GiveFund,
    ViewFundingStats,
}

// --- UserRole Implementation ---

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Donor => "donor",
            UserRole::Volunteer => "volunteer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "donor" => Some(UserRole::Donor),
            "volunteer" => Some(UserRole::Volunteer),
            _ => None,
        }
    }

    /// Check if the role grants a specific permission
    pub fn has_permission(&self, permission: Permission) -> bool {
        match self {
            UserRole::Admin => true, // Admin has all permissions
            UserRole::Volunteer => match permission {
                Permission::ViewDashboard
                | Permission::ViewAllDonationRequests
                | Permission::UpdateDonationStatus
                | Permission::RespondToDonationRequest
                | Permission::CreateBlog
                | Permission::GiveFund
                | Permission::ViewFundingStats => true,

                // Admin-only
                Permission::ManageUsers
                | Permission::PublishBlog
                | Permission::DeleteBlog
                | Permission::DeleteDonationRequest => false,

                // Volunteers coordinate requests, they do not own them
                Permission::CreateDonationRequest
                | Permission::EditOwnDonationRequest => false,
            },
            UserRole::Donor => match permission {
                Permission::ViewDashboard
                | Permission::CreateDonationRequest
                | Permission::EditOwnDonationRequest
                | Permission::RespondToDonationRequest
                | Permission::GiveFund => true,

                Permission::ManageUsers
                | Permission::ViewAllDonationRequests
                | Permission::UpdateDonationStatus
                | Permission::DeleteDonationRequest
                | Permission::CreateBlog
                | Permission::PublishBlog
                | Permission::DeleteBlog
                | Permission::ViewFundingStats => false,
            },
        }
    }

    /// Check if the role has all of the specified permissions
    pub fn has_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(*p))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(UserStatus::Active),
            "blocked" => Some(UserStatus::Blocked),
            _ => None,
        }
    }
}

// --- Permission Implementation ---

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ManageUsers => "manage_users",
            Permission::CreateDonationRequest => "create_donation_request",
            Permission::EditOwnDonationRequest => "edit_own_donation_request",
            Permission::ViewAllDonationRequests => "view_all_donation_requests",
            Permission::UpdateDonationStatus => "update_donation_status",
            Permission::DeleteDonationRequest => "delete_donation_request",
            Permission::RespondToDonationRequest => "respond_to_donation_request",
            Permission::CreateBlog => "create_blog",
            Permission::PublishBlog => "publish_blog",
            Permission::DeleteBlog => "delete_blog",
            Permission::GiveFund => "give_fund",
            Permission::ViewFundingStats => "view_funding_stats",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.as_str() == s)
    }

    /// Read-only permissions stay available to blocked accounts
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Permission::ViewDashboard
                | Permission::ViewAllDonationRequests
                | Permission::ViewFundingStats
        )
    }

    /// Get all permissions in the system
    pub fn all() -> Vec<Permission> {
        vec![
            Permission::ViewDashboard,
            Permission::ManageUsers,
            Permission::CreateDonationRequest, Permission::EditOwnDonationRequest,
            Permission::ViewAllDonationRequests, Permission::UpdateDonationStatus,
            Permission::DeleteDonationRequest, Permission::RespondToDonationRequest,
            Permission::CreateBlog, Permission::PublishBlog, Permission::DeleteBlog,
            Permission::GiveFund, Permission::ViewFundingStats,
        ]
    }
}

/// Sections of the dashboard a signed-in user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Home,
    Profile,
    MyDonationRequests,
    CreateDonationRequest,
    AllUsers,
    AllDonationRequests,
    ContentManagement,
    Funding,
}

impl DashboardSection {
    /// Permission gating the section; `None` means any signed-in user
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            DashboardSection::Home | DashboardSection::Profile => None,
            DashboardSection::MyDonationRequests => Some(Permission::EditOwnDonationRequest),
            DashboardSection::CreateDonationRequest => Some(Permission::CreateDonationRequest),
            DashboardSection::AllUsers => Some(Permission::ManageUsers),
            DashboardSection::AllDonationRequests => Some(Permission::ViewAllDonationRequests),
            DashboardSection::ContentManagement => Some(Permission::CreateBlog),
            DashboardSection::Funding => Some(Permission::GiveFund),
        }
    }

    pub fn all() -> [DashboardSection; 8] {
        [
            DashboardSection::Home,
            DashboardSection::Profile,
            DashboardSection::MyDonationRequests,
            DashboardSection::CreateDonationRequest,
            DashboardSection::AllUsers,
            DashboardSection::AllDonationRequests,
            DashboardSection::ContentManagement,
            DashboardSection::Funding,
        ]
    }
}

/// Navigation entries for a role, in display order
pub fn sections_for(role: UserRole) -> Vec<DashboardSection> {
    DashboardSection::all()
        .into_iter()
        .filter(|section| match section.required_permission() {
            None => true,
            Some(permission) => role.has_permission(permission),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_strings() {
        for role in [UserRole::Admin, UserRole::Donor, UserRole::Volunteer] {
            assert_eq!(UserRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::from_str("Admin"), None);
        assert_eq!(UserRole::from_str("superuser"), None);
    }

    #[test]
    fn test_admin_has_everything() {
        assert!(UserRole::Admin.has_permissions(&Permission::all()));
    }

    #[test]
    fn test_volunteer_permissions() {
        let role = UserRole::Volunteer;
        assert!(role.has_permission(Permission::ViewAllDonationRequests));
        assert!(role.has_permission(Permission::UpdateDonationStatus));
        assert!(role.has_permission(Permission::CreateBlog));
        assert!(!role.has_permission(Permission::PublishBlog));
        assert!(!role.has_permission(Permission::DeleteDonationRequest));
        assert!(!role.has_permission(Permission::ManageUsers));
    }

    #[test]
    fn test_volunteer_permission_matrix() {
        let granted: Vec<Permission> = Permission::all()
            .into_iter()
            .filter(|p| UserRole::Volunteer.has_permission(*p))
            .collect();
        assert_eq!(
            granted,
            vec![
                Permission::ViewDashboard,
                Permission::ViewAllDonationRequests,
                Permission::UpdateDonationStatus,
                Permission::RespondToDonationRequest,
                Permission::CreateBlog,
                Permission::GiveFund,
                Permission::ViewFundingStats,
            ]
        );
    }

    #[test]
    fn test_donor_permissions() {
        let role = UserRole::Donor;
        assert!(role.has_permission(Permission::CreateDonationRequest));
        assert!(role.has_permission(Permission::GiveFund));
        assert!(!role.has_permission(Permission::ViewAllDonationRequests));
        assert!(!role.has_permission(Permission::ViewFundingStats));
    }

    #[test]
    fn test_permission_strings() {
        for permission in Permission::all() {
            assert_eq!(Permission::from_str(permission.as_str()), Some(permission));
        }
        assert_eq!(Permission::from_str("fly"), None);
    }

    #[test]
    fn test_serde_lowercase_roles() {
        let role: UserRole = serde_json::from_str("\"volunteer\"").unwrap();
        assert_eq!(role, UserRole::Volunteer);
        let status: UserStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(status, UserStatus::Blocked);
    }

    #[test]
    fn test_sections_for_roles() {
        let donor = sections_for(UserRole::Donor);
        assert!(donor.contains(&DashboardSection::MyDonationRequests));
        assert!(!donor.contains(&DashboardSection::AllUsers));

        let volunteer = sections_for(UserRole::Volunteer);
        assert!(volunteer.contains(&DashboardSection::AllDonationRequests));
        assert!(volunteer.contains(&DashboardSection::ContentManagement));
        assert!(!volunteer.contains(&DashboardSection::CreateDonationRequest));

        assert_eq!(sections_for(UserRole::Admin).len(), DashboardSection::all().len());
    }
}
