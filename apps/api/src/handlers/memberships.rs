use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::info;

use crate::dto::{IdentityQuery, MembershipResponse, UserMembershipsResponse};
use crate::error::ApiResult;
use crate::state::AppState;

use super::identity_from_path;

pub async fn user_memberships_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<IdentityQuery>,
) -> ApiResult<Json<UserMembershipsResponse>> {
    let identity = identity_from_path(id, query)?;
    let memberships = state
        .membership_resolver()
        .user_memberships(&identity)
        .await?;

    info!(%identity, count = memberships.len(), "resolved memberships");

    Ok(Json(UserMembershipsResponse {
        user_id: identity.id(),
        email: identity.email().to_owned(),
        memberships: memberships
            .into_iter()
            .map(MembershipResponse::from)
            .collect(),
    }))
}
