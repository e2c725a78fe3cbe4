use serde::Deserialize;

/// JSON document describing both directories for local runs and tests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryFixture {
    /// Site principal id the calling context maps to.
    #[serde(default)]
    pub current_site_user_id: Option<u32>,
    /// Site groups.
    #[serde(default)]
    pub site_groups: Vec<SiteGroupFixture>,
    /// Site principals, including tenant group shadows.
    #[serde(default)]
    pub site_users: Vec<SiteUserFixture>,
    /// Tenant Directory users.
    #[serde(default)]
    pub directory_users: Vec<DirectoryUserFixture>,
}

/// Site group entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteGroupFixture {
    /// Site group id.
    pub id: u32,
    /// Site group title.
    pub title: String,
}

/// Site principal entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteUserFixture {
    /// Site principal id.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Email.
    #[serde(default)]
    pub email: String,
    /// Claims-encoded login name.
    pub login_name: String,
    /// Raw principal type bits.
    pub principal_type: u32,
    /// Ids of the site groups the principal belongs to, in directory order.
    #[serde(default)]
    pub group_ids: Vec<u32>,
}

/// Tenant Directory user entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUserFixture {
    /// Tenant Directory object id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Primary mail address.
    #[serde(default)]
    pub mail: Option<String>,
    /// User principal name.
    #[serde(default)]
    pub user_principal_name: Option<String>,
    /// Whether this user is the calling context.
    #[serde(default)]
    pub is_current_user: bool,
    /// Transitive tenant group ids, in directory order.
    #[serde(default)]
    pub member_group_ids: Vec<String>,
}
