use axum::http::StatusCode;
use memberlens_application::SiteDirectory;
use memberlens_core::{AppError, AppResult, CALLING_CONTEXT_ID};
use memberlens_domain::{LoginNameFilter, PrincipalTypeFlags, TenantGroupId};
use serde_json::json;
use uuid::Uuid;

use super::RestSiteDirectory;
use crate::test_support::{RecordedRequest, StubDirectory, unreachable_url};

fn site_api(request: &RecordedRequest) -> (StatusCode, String) {
    let alice = json!({
        "Id": 11,
        "Title": "Alice",
        "Email": "alice@contoso.com",
        "LoginName": "i:0#.f|membership|alice@contoso.com",
        "PrincipalType": 1,
        "Groups": [
            { "Id": 3, "Title": "Owners" },
            { "Id": 4, "Title": "Members" }
        ]
    });
    let finance = json!({
        "Id": 31,
        "Title": "Finance",
        "Email": "",
        "LoginName": "c:0t.c|tenant|00000000-0000-0000-0000-000000000001",
        "PrincipalType": 4
    });

    match request.path.as_str() {
        "/sites/hr/_api/web/currentuser" | "/sites/hr/_api/web/getuserbyid(11)" => {
            (StatusCode::OK, alice.to_string())
        }
        "/sites/hr/_api/web/getuserbyid(31)" => (StatusCode::OK, finance.to_string()),
        "/sites/hr/_api/web/getuserbyid(40)" => (StatusCode::OK, "<html>".to_owned()),
        "/sites/hr/_api/web/getuserbyid(50)" => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": "throttled" }).to_string(),
        ),
        "/sites/hr/_api/web/siteusers" => {
            (StatusCode::OK, json!({ "value": [alice, finance] }).to_string())
        }
        "/sites/hr/_api/web/siteusers(@v)" => match request.query_value("@v") {
            Some("'i:0#.f|membership|alice@contoso.com'") => (StatusCode::OK, alice.to_string()),
            _ => (
                StatusCode::NOT_FOUND,
                json!({ "error": "user not found" }).to_string(),
            ),
        },
        _ => (
            StatusCode::NOT_FOUND,
            json!({ "error": "no such resource" }).to_string(),
        ),
    }
}

async fn directory() -> AppResult<(StubDirectory, RestSiteDirectory)> {
    let stub = StubDirectory::spawn(site_api).await?;
    let directory =
        RestSiteDirectory::new(reqwest::Client::new(), stub.base_url.clone(), "site-token");
    Ok((stub, directory))
}

#[tokio::test]
async fn calling_context_uses_current_user_endpoint() -> AppResult<()> {
    let (stub, directory) = directory().await?;

    let record = directory.get_expanded_site_user(CALLING_CONTEXT_ID).await?;

    assert_eq!(record.id, 11);
    assert_eq!(record.groups()?.len(), 2);
    let requests = stub.requests().await;
    assert_eq!(requests[0].path, "/sites/hr/_api/web/currentuser");
    assert_eq!(requests[0].query_value("$expand"), Some("Groups"));
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer site-token"));
    assert_eq!(
        requests[0].accept.as_deref(),
        Some("application/json;odata=nometadata")
    );
    Ok(())
}

#[tokio::test]
async fn explicit_id_maps_expanded_groups() -> AppResult<()> {
    let (_stub, directory) = directory().await?;

    let record = directory.get_expanded_site_user(11).await?;

    assert_eq!(record.title, "Alice");
    assert_eq!(record.principal_type, PrincipalTypeFlags::USER);
    let titles: Vec<&str> = record
        .groups()?
        .iter()
        .map(|group| group.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Owners", "Members"]);
    Ok(())
}

#[tokio::test]
async fn expanded_lookup_without_groups_is_malformed() -> AppResult<()> {
    let (_stub, directory) = directory().await?;

    let result = directory.get_expanded_site_user(31).await;

    assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    Ok(())
}

#[tokio::test]
async fn status_codes_map_to_error_kinds() -> AppResult<()> {
    let (_stub, directory) = directory().await?;

    assert!(matches!(
        directory.get_expanded_site_user(99).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        directory.get_expanded_site_user(50).await,
        Err(AppError::TransportFailure(_))
    ));
    assert!(matches!(
        directory.get_expanded_site_user(40).await,
        Err(AppError::MalformedResponse(_))
    ));
    Ok(())
}

#[tokio::test]
async fn unreachable_site_is_a_transport_failure() -> AppResult<()> {
    let directory =
        RestSiteDirectory::new(reqwest::Client::new(), unreachable_url().await?, "token");

    let result = directory.list_site_users().await;

    assert!(matches!(result, Err(AppError::TransportFailure(_))));
    Ok(())
}

#[tokio::test]
async fn login_substring_search_sends_or_combined_filter() -> AppResult<()> {
    let (stub, directory) = directory().await?;
    let first = TenantGroupId::from_uuid(Uuid::from_u128(1));
    let second = TenantGroupId::from_uuid(Uuid::from_u128(2));

    let users = directory
        .find_site_users_by_login_substring(&LoginNameFilter::for_tenant_groups(&[first, second]))
        .await?;

    assert_eq!(users.len(), 2);
    let requests = stub.requests().await;
    assert_eq!(
        requests[0].query_value("$filter"),
        Some(
            "substringof('|00000000-0000-0000-0000-000000000001',LoginName) or \
             substringof('|00000000-0000-0000-0000-000000000002',LoginName)"
        )
    );
    Ok(())
}

#[tokio::test]
async fn empty_login_filter_sends_no_request() -> AppResult<()> {
    let (stub, directory) = directory().await?;

    let users = directory
        .find_site_users_by_login_substring(&LoginNameFilter::for_tenant_groups(&[]))
        .await?;

    assert!(users.is_empty());
    assert!(stub.requests().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn login_name_lookup_returns_none_when_missing() -> AppResult<()> {
    let (stub, directory) = directory().await?;

    let known = directory
        .find_site_user_by_login_name("i:0#.f|membership|alice@contoso.com")
        .await?;
    let unknown = directory
        .find_site_user_by_login_name("i:0#.f|membership|o'neil@contoso.com")
        .await?;

    assert_eq!(known.map(|user| user.id), Some(11));
    assert_eq!(unknown, None);
    let requests = stub.requests().await;
    assert_eq!(
        requests[1].query_value("@v"),
        Some("'i:0#.f|membership|o''neil@contoso.com'")
    );
    Ok(())
}
