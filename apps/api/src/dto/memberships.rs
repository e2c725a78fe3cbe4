use memberlens_domain::GroupMembership;
use serde::Serialize;
use ts_rs::TS;

/// API representation of one resolved membership.
///
/// `site_group_name` and `site_group_id` are both `null` for a principal
/// that belongs to no site group.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "membership-response.ts"
)]
pub struct MembershipResponse {
    pub site_group_name: Option<String>,
    pub site_group_id: Option<u32>,
    pub via_principal_name: String,
    pub via_principal_type: u32,
    pub via_principal_type_names: Vec<String>,
    pub via_principal_id: u32,
}

impl From<GroupMembership> for MembershipResponse {
    fn from(value: GroupMembership) -> Self {
        let via = value.via();
        Self {
            site_group_name: value.site_group_name().map(ToOwned::to_owned),
            site_group_id: value.site_group_id(),
            via_principal_name: via.name.clone(),
            via_principal_type: via.principal_type.bits(),
            via_principal_type_names: via
                .principal_type
                .names()
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            via_principal_id: via.id,
        }
    }
}

/// Memberships resolved for one identity.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "user-memberships-response.ts"
)]
pub struct UserMembershipsResponse {
    pub user_id: u32,
    pub email: String,
    pub memberships: Vec<MembershipResponse>,
}
