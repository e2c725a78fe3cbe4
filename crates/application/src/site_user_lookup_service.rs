use std::sync::Arc;

use memberlens_core::{AppError, AppResult, UserIdentity};
use memberlens_domain::{SiteUserRecord, identity_from_login_name};

use crate::SiteDirectory;

/// A user picked by login name, with the site principal id when the site
/// knows the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUserSelection {
    /// Site principal id, `None` when the user is unknown to the site.
    pub site_user_id: Option<u32>,
    /// Email taken from the login name.
    pub email: String,
}

impl SiteUserSelection {
    /// Returns the identity to resolve, if the user is known to the site.
    #[must_use]
    pub fn identity(&self) -> Option<UserIdentity> {
        self.site_user_id
            .map(|site_user_id| UserIdentity::new(site_user_id, self.email.clone()))
    }
}

/// Application service for picking site users.
#[derive(Clone)]
pub struct SiteUserLookupService {
    site_directory: Arc<dyn SiteDirectory>,
}

impl SiteUserLookupService {
    /// Creates a new lookup service.
    #[must_use]
    pub fn new(site_directory: Arc<dyn SiteDirectory>) -> Self {
        Self { site_directory }
    }

    /// Lists site users whose title contains `title_filter`, ignoring case.
    /// A missing or blank filter lists every user.
    pub async fn list_site_users(
        &self,
        title_filter: Option<&str>,
    ) -> AppResult<Vec<SiteUserRecord>> {
        let users = self.site_directory.list_site_users().await?;

        let Some(filter) = title_filter
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return Ok(users);
        };

        let filter = filter.to_lowercase();
        Ok(users
            .into_iter()
            .filter(|user| user.title.to_lowercase().contains(filter.as_str()))
            .collect())
    }

    /// Maps a claims login name onto a site user selection.
    pub async fn resolve_login_name(&self, login_name: &str) -> AppResult<SiteUserSelection> {
        let login_name = login_name.trim();
        if login_name.is_empty() {
            return Err(AppError::Validation(
                "login name must not be empty".to_owned(),
            ));
        }

        let site_user = self
            .site_directory
            .find_site_user_by_login_name(login_name)
            .await?;

        Ok(SiteUserSelection {
            site_user_id: site_user.map(|user| user.id),
            email: identity_from_login_name(login_name).to_owned(),
        })
    }
}
