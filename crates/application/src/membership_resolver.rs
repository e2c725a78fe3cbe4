//! Cross-directory group membership resolution.
//!
//! A resolver owns its memoization state. Build one per session or request
//! context and drop it to forget every cached outcome, failures included.

use std::sync::Arc;

use memberlens_core::{AppResult, UserIdentity};
use memberlens_domain::{DirectoryUserRecord, GroupMembership, SiteUserRecord};

use crate::directory_lookups::DirectoryLookups;
use crate::membership_extractor::extract_site_memberships;
use crate::single_flight::SingleFlightCache;
use crate::tenant_group_mapper::TenantGroupMapper;
use crate::{SiteDirectory, TenantDirectory};

/// Resolves every site group membership an identity holds, directly or
/// through Tenant Directory groups.
#[derive(Clone)]
pub struct MembershipResolver {
    lookups: DirectoryLookups,
    mapper: TenantGroupMapper,
    tenant_group_memberships: Arc<SingleFlightCache<UserIdentity, Vec<GroupMembership>>>,
}

impl MembershipResolver {
    /// Creates a resolver with empty caches over the given directories.
    #[must_use]
    pub fn new(
        site_directory: Arc<dyn SiteDirectory>,
        tenant_directory: Arc<dyn TenantDirectory>,
    ) -> Self {
        let lookups = DirectoryLookups::new(site_directory, tenant_directory);
        Self {
            mapper: TenantGroupMapper::new(lookups.clone()),
            lookups,
            tenant_group_memberships: Arc::new(SingleFlightCache::new()),
        }
    }

    /// Returns direct memberships followed by memberships held through
    /// Tenant Directory groups. Nothing is deduplicated.
    ///
    /// Any failed lookup fails the whole resolution.
    pub async fn user_memberships(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<GroupMembership>> {
        let (mut memberships, indirect) = tokio::try_join!(
            self.direct_site_memberships(identity),
            self.tenant_group_site_memberships(identity)
        )?;

        memberships.extend(indirect);
        Ok(memberships)
    }

    /// Returns the memberships held by the identity's own site principal.
    pub async fn direct_site_memberships(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<GroupMembership>> {
        let site_user = self.expanded_site_user(identity).await?;
        extract_site_memberships(&site_user)
    }

    /// Returns the memberships held through Tenant Directory groups.
    pub async fn tenant_group_site_memberships(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<GroupMembership>> {
        let mapper = self.mapper.clone();
        let target = identity.clone();
        self.tenant_group_memberships
            .get(identity.clone(), move || async move {
                mapper.site_memberships(&target).await
            })
            .await
    }

    /// Returns the identity's expanded site principal record.
    pub async fn expanded_site_user(&self, identity: &UserIdentity) -> AppResult<SiteUserRecord> {
        self.lookups.expanded_site_user(identity.id()).await
    }

    /// Returns the identity's Tenant Directory record.
    pub async fn directory_user(&self, identity: &UserIdentity) -> AppResult<DirectoryUserRecord> {
        self.lookups.directory_user(identity).await
    }
}
