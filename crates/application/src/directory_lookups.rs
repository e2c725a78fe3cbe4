use std::sync::Arc;

use memberlens_core::{AppResult, UserIdentity};
use memberlens_domain::{DirectoryUserRecord, SiteUserRecord, TenantGroupId};

use crate::single_flight::SingleFlightCache;
use crate::{SiteDirectory, TenantDirectory};

/// Memoized directory calls shared by the mapper and the resolver.
///
/// Each lookup kind keeps its own key space. Expanded site principals are
/// keyed by site principal id so a shadow-principal reached from several
/// identities is fetched once.
#[derive(Clone)]
pub(crate) struct DirectoryLookups {
    site_directory: Arc<dyn SiteDirectory>,
    tenant_directory: Arc<dyn TenantDirectory>,
    expanded_site_users: Arc<SingleFlightCache<u32, SiteUserRecord>>,
    directory_users: Arc<SingleFlightCache<UserIdentity, DirectoryUserRecord>>,
    member_group_ids: Arc<SingleFlightCache<UserIdentity, Vec<TenantGroupId>>>,
}

impl DirectoryLookups {
    pub(crate) fn new(
        site_directory: Arc<dyn SiteDirectory>,
        tenant_directory: Arc<dyn TenantDirectory>,
    ) -> Self {
        Self {
            site_directory,
            tenant_directory,
            expanded_site_users: Arc::new(SingleFlightCache::new()),
            directory_users: Arc::new(SingleFlightCache::new()),
            member_group_ids: Arc::new(SingleFlightCache::new()),
        }
    }

    pub(crate) fn site_directory(&self) -> &dyn SiteDirectory {
        self.site_directory.as_ref()
    }

    pub(crate) async fn expanded_site_user(&self, id: u32) -> AppResult<SiteUserRecord> {
        let site_directory = Arc::clone(&self.site_directory);
        self.expanded_site_users
            .get(id, move || async move {
                site_directory.get_expanded_site_user(id).await
            })
            .await
    }

    pub(crate) async fn directory_user(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<DirectoryUserRecord> {
        let tenant_directory = Arc::clone(&self.tenant_directory);
        let target = identity.clone();
        self.directory_users
            .get(identity.clone(), move || async move {
                tenant_directory.get_directory_user(&target).await
            })
            .await
    }

    pub(crate) async fn member_group_ids(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<TenantGroupId>> {
        let tenant_directory = Arc::clone(&self.tenant_directory);
        let target = identity.clone();
        self.member_group_ids
            .get(identity.clone(), move || async move {
                tenant_directory.get_member_group_ids(&target).await
            })
            .await
    }
}
