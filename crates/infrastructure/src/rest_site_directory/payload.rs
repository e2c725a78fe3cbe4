use memberlens_domain::{PrincipalTypeFlags, SiteGroupRecord, SiteUserRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CollectionPayload<T> {
    pub(super) value: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SiteGroupPayload {
    id: u32,
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SiteUserPayload {
    id: u32,
    title: String,
    #[serde(default)]
    email: Option<String>,
    login_name: String,
    principal_type: u32,
    #[serde(default)]
    groups: Option<Vec<SiteGroupPayload>>,
}

impl From<SiteGroupPayload> for SiteGroupRecord {
    fn from(value: SiteGroupPayload) -> Self {
        Self {
            id: value.id,
            title: value.title,
        }
    }
}

impl From<SiteUserPayload> for SiteUserRecord {
    fn from(value: SiteUserPayload) -> Self {
        Self {
            id: value.id,
            title: value.title,
            email: value.email.unwrap_or_default(),
            login_name: value.login_name,
            principal_type: PrincipalTypeFlags::from_bits(value.principal_type),
            expanded_groups: value
                .groups
                .map(|groups| groups.into_iter().map(SiteGroupRecord::from).collect()),
        }
    }
}
