use axum::Json;
use axum::extract::{Query, State};

use crate::dto::{
    ResolveLoginNameQuery, SiteUserListQuery, SiteUserResponse, SiteUserSelectionResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_site_users_handler(
    State(state): State<AppState>,
    Query(query): Query<SiteUserListQuery>,
) -> ApiResult<Json<Vec<SiteUserResponse>>> {
    let users = state
        .site_user_lookup_service
        .list_site_users(query.filter.as_deref())
        .await?
        .into_iter()
        .map(SiteUserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn resolve_login_name_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveLoginNameQuery>,
) -> ApiResult<Json<SiteUserSelectionResponse>> {
    let selection = state
        .site_user_lookup_service
        .resolve_login_name(query.login_name.as_str())
        .await?;

    Ok(Json(SiteUserSelectionResponse::from(selection)))
}
