use std::str::FromStr;

use async_trait::async_trait;
use memberlens_application::TenantDirectory;
use memberlens_core::{AppError, AppResult, UserIdentity};
use memberlens_domain::{DirectoryUserRecord, TenantGroupId};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::directory_http_client::{DirectoryHttpClient, endpoint};

/// Tenant Directory adapter over the directory graph API.
///
/// The calling context is addressed as `me`, every other identity by email.
#[derive(Clone)]
pub struct GraphTenantDirectory {
    client: DirectoryHttpClient,
    graph_url: Url,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectoryUserPayload {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    mail: Option<String>,
    #[serde(default)]
    user_principal_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MemberGroupsPayload {
    value: Vec<String>,
}

impl From<DirectoryUserPayload> for DirectoryUserRecord {
    fn from(value: DirectoryUserPayload) -> Self {
        Self {
            id: value.id,
            display_name: value.display_name,
            mail: value.mail,
            user_principal_name: value.user_principal_name,
        }
    }
}

impl GraphTenantDirectory {
    /// Creates a new adapter rooted at `graph_url`.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        graph_url: Url,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client: DirectoryHttpClient::new(http_client, access_token, "tenant directory"),
            graph_url,
        }
    }

    fn user_endpoint(&self, identity: &UserIdentity, operation: Option<&str>) -> AppResult<Url> {
        let mut segments = if identity.is_calling_context() {
            vec!["me"]
        } else {
            if identity.email().trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "identity {} has no email to address the tenant directory with",
                    identity.id()
                )));
            }
            vec!["users", identity.email()]
        };
        segments.extend(operation);

        endpoint(&self.graph_url, &segments)
    }
}

#[async_trait]
impl TenantDirectory for GraphTenantDirectory {
    async fn get_directory_user(&self, identity: &UserIdentity) -> AppResult<DirectoryUserRecord> {
        let url = self.user_endpoint(identity, None)?;
        let payload: DirectoryUserPayload = self.client.get_json(url).await?;
        Ok(payload.into())
    }

    async fn get_member_group_ids(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<TenantGroupId>> {
        let url = self.user_endpoint(identity, Some("getMemberGroups"))?;
        let payload: MemberGroupsPayload = self
            .client
            .post_json(url, &json!({ "securityEnabledOnly": false }))
            .await?;

        payload
            .value
            .iter()
            .map(|value| TenantGroupId::from_str(value))
            .collect()
    }
}
