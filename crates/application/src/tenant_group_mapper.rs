use futures::future::try_join_all;
use memberlens_core::{AppError, AppResult, CALLING_CONTEXT_ID, UserIdentity};
use memberlens_domain::{GroupMembership, LoginNameFilter};

use crate::directory_lookups::DirectoryLookups;
use crate::membership_extractor::extract_site_memberships;

/// Finds the site memberships an identity holds through Tenant Directory
/// groups that are known to the site as shadow-principals.
#[derive(Clone)]
pub(crate) struct TenantGroupMapper {
    lookups: DirectoryLookups,
}

impl TenantGroupMapper {
    pub(crate) fn new(lookups: DirectoryLookups) -> Self {
        Self { lookups }
    }

    /// Resolves tenant groups to shadow-principals, then flattens each
    /// shadow-principal's own memberships in the order the site returned them.
    ///
    /// Shadow-principal lookups run concurrently; the first failure fails the
    /// whole mapping. Duplicates across principals are kept.
    pub(crate) async fn site_memberships(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<GroupMembership>> {
        let group_ids = self.lookups.member_group_ids(identity).await?;
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let filter = LoginNameFilter::for_tenant_groups(&group_ids);
        let shadow_principals = self
            .lookups
            .site_directory()
            .find_site_users_by_login_substring(&filter)
            .await?;

        let per_principal = try_join_all(
            shadow_principals
                .iter()
                .map(|principal| self.shadow_principal_memberships(principal.id)),
        )
        .await?;

        Ok(per_principal.into_iter().flatten().collect())
    }

    async fn shadow_principal_memberships(
        &self,
        principal_id: u32,
    ) -> AppResult<Vec<GroupMembership>> {
        // Id 0 would resolve the calling context instead of the group.
        if principal_id == CALLING_CONTEXT_ID {
            return Err(AppError::MalformedResponse(
                "shadow-principal returned without a site principal id".to_owned(),
            ));
        }

        let principal = self.lookups.expanded_site_user(principal_id).await?;
        extract_site_memberships(&principal)
    }
}
