mod has_permission;

pub use has_permission::{sections_for, DashboardSection, Permission, UserRole, UserStatus};
