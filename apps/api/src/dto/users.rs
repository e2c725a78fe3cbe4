use memberlens_application::SiteUserSelection;
use memberlens_domain::{DirectoryUserRecord, SiteUserRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Query string carrying the email half of a user identity.
#[derive(Debug, Default, Deserialize)]
pub struct IdentityQuery {
    pub email: Option<String>,
}

/// Query string for the site user listing.
#[derive(Debug, Default, Deserialize)]
pub struct SiteUserListQuery {
    pub filter: Option<String>,
}

/// Query string for login name resolution.
#[derive(Debug, Deserialize)]
pub struct ResolveLoginNameQuery {
    pub login_name: String,
}

/// API representation of a site principal.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "site-user-response.ts"
)]
pub struct SiteUserResponse {
    pub id: u32,
    pub title: String,
    pub email: String,
    pub login_name: String,
    pub principal_type: u32,
    pub principal_type_label: String,
}

impl From<SiteUserRecord> for SiteUserResponse {
    fn from(value: SiteUserRecord) -> Self {
        Self {
            id: value.id,
            principal_type_label: value.principal_type.to_string(),
            principal_type: value.principal_type.bits(),
            title: value.title,
            email: value.email,
            login_name: value.login_name,
        }
    }
}

/// API representation of a resolved login name.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "site-user-selection-response.ts"
)]
pub struct SiteUserSelectionResponse {
    pub site_user_id: Option<u32>,
    pub email: String,
}

impl From<SiteUserSelection> for SiteUserSelectionResponse {
    fn from(value: SiteUserSelection) -> Self {
        Self {
            site_user_id: value.site_user_id,
            email: value.email,
        }
    }
}

/// Combined site and tenant directory view of one identity.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "user-info-response.ts"
)]
pub struct UserInfoResponse {
    pub site_user_id: u32,
    pub title: String,
    pub email: String,
    pub login_name: String,
    pub directory_object_id: String,
    pub display_name: Option<String>,
    pub user_principal_name: Option<String>,
}

impl UserInfoResponse {
    #[must_use]
    pub fn from_records(site_user: &SiteUserRecord, directory_user: &DirectoryUserRecord) -> Self {
        Self {
            site_user_id: site_user.id,
            title: site_user.title.clone(),
            email: site_user.email.clone(),
            login_name: site_user.login_name.clone(),
            directory_object_id: directory_user.id.clone(),
            display_name: directory_user.display_name.clone(),
            user_principal_name: directory_user.user_principal_name.clone(),
        }
    }
}
