mod common;
mod memberships;
mod users;

pub use common::HealthResponse;
pub use memberships::{MembershipResponse, UserMembershipsResponse};
pub use users::{
    IdentityQuery, ResolveLoginNameQuery, SiteUserListQuery, SiteUserResponse,
    SiteUserSelectionResponse, UserInfoResponse,
};
