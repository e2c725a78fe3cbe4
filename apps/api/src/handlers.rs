pub mod health;
pub mod memberships;
pub mod site_users;
pub mod users;

use memberlens_core::{AppError, UserIdentity};

use crate::dto::IdentityQuery;
use crate::error::ApiResult;

/// Builds the identity addressed by a `/api/users/{id}` route.
///
/// Id `0` is the calling context and may omit the email; any other id needs
/// one to address the tenant directory.
fn identity_from_path(id: u32, query: IdentityQuery) -> ApiResult<UserIdentity> {
    let email = query
        .email
        .map(|email| email.trim().to_owned())
        .unwrap_or_default();

    if id == memberlens_core::CALLING_CONTEXT_ID {
        return Ok(UserIdentity::calling_context(email));
    }

    if email.is_empty() {
        return Err(AppError::Validation(format!("email is required for user {id}")).into());
    }

    Ok(UserIdentity::new(id, email))
}
