use std::sync::Once;
use crate::auth::AuthContext;
use crate::domains::region::{Region, RegionIndex, SubRegion};
use crate::domains::settings::{AppSettings, AppTheme};
use crate::errors::{ServiceError, ServiceResult};
use crate::types::{DashboardSection, Permission};
use crate::validation::Validate;

static LOGGER_INIT: Once = Once::new();

/// Application-wide state owned by the host and passed explicitly.
///
/// Created once on app start; `sign_out` is the teardown point for
/// everything tied to a user session.
#[derive(Debug)]
pub struct AppContext {
    settings: AppSettings,
    regions: RegionIndex,
    session: Option<AuthContext>,
}

impl AppContext {
    /// Validate settings, start logging and build the region index
    pub fn initialize(
        settings: AppSettings,
        regions: Vec<Region>,
        sub_regions: Vec<SubRegion>,
    ) -> ServiceResult<Self> {
        settings
            .validate()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        init_logging(&settings.log_level);
        log::info!("Initializing application context");

        let regions = RegionIndex::build(regions, sub_regions);
        if regions.is_empty() {
            log::warn!("No districts loaded; location fields will stay empty");
        }
        log::debug!(
            "Context ready: {} districts, {} upazilas, theme {}",
            regions.region_count(),
            regions.sub_region_count(),
            settings.theme.as_str()
        );

        Ok(Self {
            settings,
            regions,
            session: None,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn region_index(&self) -> &RegionIndex {
        &self.regions
    }

    pub fn session(&self) -> Option<&AuthContext> {
        self.session.as_ref()
    }

    pub fn sign_in(&mut self, user: AuthContext) {
        log::info!("User {} signed in as {}", user.user_id, user.role);
        if user.is_blocked() {
            log::warn!("User {} is blocked; mutating actions will be refused", user.user_id);
        }
        self.session = Some(user);
    }

    /// Teardown for the session; returns the user that was signed in
    pub fn sign_out(&mut self) -> Option<AuthContext> {
        let previous = self.session.take();
        if let Some(user) = &previous {
            log::info!("User {} signed out", user.user_id);
        }
        previous
    }

    /// The signed-in user, or an authentication error
    pub fn require_session(&self) -> ServiceResult<&AuthContext> {
        self.session
            .as_ref()
            .ok_or_else(|| ServiceError::Authentication("no user is signed in".to_string()))
    }

    /// Route guard: signed in and allowed to perform `permission`
    pub fn guard(&self, permission: Permission) -> ServiceResult<&AuthContext> {
        let user = self.require_session()?;
        user.authorize(permission)?;
        Ok(user)
    }

    /// Navigation for the current session; empty when signed out
    pub fn dashboard_sections(&self) -> Vec<DashboardSection> {
        match &self.session {
            Some(user) => crate::types::sections_for(user.role),
            None => Vec::new(),
        }
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        log::debug!("Theme changed to {}", theme.as_str());
        self.settings.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> AppTheme {
        let next = self.settings.theme.toggled();
        self.set_theme(next);
        next
    }
}

fn init_logging(default_level: &str) {
    LOGGER_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(default_level);
        // Another logger may already be installed by the host
        let _ = env_logger::Builder::from_env(env).try_init();
    });
}
