use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::{IdentityQuery, UserInfoResponse};
use crate::error::ApiResult;
use crate::state::AppState;

use super::identity_from_path;

pub async fn user_info_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<IdentityQuery>,
) -> ApiResult<Json<UserInfoResponse>> {
    let identity = identity_from_path(id, query)?;
    let resolver = state.membership_resolver();
    let (site_user, directory_user) = tokio::try_join!(
        resolver.expanded_site_user(&identity),
        resolver.directory_user(&identity)
    )?;

    Ok(Json(UserInfoResponse::from_records(
        &site_user,
        &directory_user,
    )))
}
