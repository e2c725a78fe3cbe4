use memberlens_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::PrincipalTypeFlags;

/// Site Directory group a principal belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteGroupRecord {
    /// Site group id.
    pub id: u32,
    /// Site group title.
    pub title: String,
}

/// Site Directory projection of a principal.
///
/// `expanded_groups` is only present when the directory was asked to expand
/// group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUserRecord {
    /// Site principal id.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Email, empty for principals without a mailbox.
    pub email: String,
    /// Claims-encoded login name.
    pub login_name: String,
    /// Kind of principal.
    pub principal_type: PrincipalTypeFlags,
    /// Expanded group memberships, when requested.
    pub expanded_groups: Option<Vec<SiteGroupRecord>>,
}

impl SiteUserRecord {
    /// Returns the expanded groups, failing if the record was fetched
    /// without expansion.
    pub fn groups(&self) -> AppResult<&[SiteGroupRecord]> {
        self.expanded_groups.as_deref().ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "site principal {} was returned without expanded groups",
                self.id
            ))
        })
    }
}
