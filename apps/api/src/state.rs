use std::sync::Arc;

use memberlens_application::{
    MembershipResolver, SiteDirectory, SiteUserLookupService, TenantDirectory,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub site_directory: Arc<dyn SiteDirectory>,
    pub tenant_directory: Arc<dyn TenantDirectory>,
    pub site_user_lookup_service: SiteUserLookupService,
}

impl AppState {
    pub fn new(
        site_directory: Arc<dyn SiteDirectory>,
        tenant_directory: Arc<dyn TenantDirectory>,
    ) -> Self {
        Self {
            site_user_lookup_service: SiteUserLookupService::new(site_directory.clone()),
            site_directory,
            tenant_directory,
        }
    }

    /// Returns a resolver with fresh caches, scoped to one request.
    pub fn membership_resolver(&self) -> MembershipResolver {
        MembershipResolver::new(self.site_directory.clone(), self.tenant_directory.clone())
    }
}
