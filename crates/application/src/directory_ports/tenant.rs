use async_trait::async_trait;

use memberlens_core::{AppResult, UserIdentity};
use memberlens_domain::{DirectoryUserRecord, TenantGroupId};

/// Port for the tenant-wide identity directory.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Returns the Tenant Directory record of an identity.
    ///
    /// The calling context is looked up as itself; any other identity is
    /// looked up by email.
    async fn get_directory_user(&self, identity: &UserIdentity) -> AppResult<DirectoryUserRecord>;

    /// Returns the transitive Tenant Directory group ids of an identity.
    async fn get_member_group_ids(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<TenantGroupId>>;
}
