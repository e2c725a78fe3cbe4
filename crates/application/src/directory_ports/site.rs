use async_trait::async_trait;

use memberlens_core::AppResult;
use memberlens_domain::{LoginNameFilter, SiteUserRecord};

/// Port for the site-scoped access-control directory.
#[async_trait]
pub trait SiteDirectory: Send + Sync {
    /// Returns a principal together with its expanded site groups.
    ///
    /// `id == 0` resolves the calling context's own record. Fails with
    /// `NotFound` when no such principal exists.
    async fn get_expanded_site_user(&self, id: u32) -> AppResult<SiteUserRecord>;

    /// Returns the principals whose login name contains any of the filter's
    /// needles. Returns an empty list when nothing matches.
    async fn find_site_users_by_login_substring(
        &self,
        filter: &LoginNameFilter,
    ) -> AppResult<Vec<SiteUserRecord>>;

    /// Lists every principal known to the site.
    async fn list_site_users(&self) -> AppResult<Vec<SiteUserRecord>>;

    /// Finds one principal by its exact login name.
    async fn find_site_user_by_login_name(
        &self,
        login_name: &str,
    ) -> AppResult<Option<SiteUserRecord>>;
}
