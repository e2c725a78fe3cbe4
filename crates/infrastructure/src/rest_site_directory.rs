use async_trait::async_trait;
use memberlens_application::SiteDirectory;
use memberlens_core::{AppError, AppResult, CALLING_CONTEXT_ID};
use memberlens_domain::{LoginNameFilter, SiteUserRecord};
use url::Url;

use crate::directory_http_client::{DirectoryHttpClient, endpoint};

mod payload;

use payload::{CollectionPayload, SiteUserPayload};

/// Site Directory adapter over the site's REST API.
#[derive(Clone)]
pub struct RestSiteDirectory {
    client: DirectoryHttpClient,
    site_url: Url,
}

impl RestSiteDirectory {
    /// Creates a new adapter for the site at `site_url`.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        site_url: Url,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client: DirectoryHttpClient::new(http_client, access_token, "site directory"),
            site_url,
        }
    }

    fn web_endpoint(&self, resource: &str) -> AppResult<Url> {
        endpoint(&self.site_url, &["_api", "web", resource])
    }

    fn principal_resource(id: u32) -> String {
        if id == CALLING_CONTEXT_ID {
            "currentuser".to_owned()
        } else {
            format!("getuserbyid({id})")
        }
    }
}

/// Renders an OData string literal, doubling embedded quotes.
fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn login_name_filter_expression(filter: &LoginNameFilter) -> String {
    filter
        .needles()
        .iter()
        .map(|needle| format!("substringof({},LoginName)", odata_literal(needle)))
        .collect::<Vec<_>>()
        .join(" or ")
}

#[async_trait]
impl SiteDirectory for RestSiteDirectory {
    async fn get_expanded_site_user(&self, id: u32) -> AppResult<SiteUserRecord> {
        let mut url = self.web_endpoint(Self::principal_resource(id).as_str())?;
        url.query_pairs_mut().append_pair("$expand", "Groups");

        let payload: SiteUserPayload = self.client.get_json(url).await?;
        let record = SiteUserRecord::from(payload);
        if record.expanded_groups.is_none() {
            return Err(AppError::MalformedResponse(format!(
                "site principal {} was returned without its Groups expansion",
                record.id
            )));
        }

        Ok(record)
    }

    async fn find_site_users_by_login_substring(
        &self,
        filter: &LoginNameFilter,
    ) -> AppResult<Vec<SiteUserRecord>> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.web_endpoint("siteusers")?;
        url.query_pairs_mut()
            .append_pair("$filter", login_name_filter_expression(filter).as_str());

        let payload: CollectionPayload<SiteUserPayload> = self.client.get_json(url).await?;
        Ok(payload.value.into_iter().map(SiteUserRecord::from).collect())
    }

    async fn list_site_users(&self) -> AppResult<Vec<SiteUserRecord>> {
        let url = self.web_endpoint("siteusers")?;
        let payload: CollectionPayload<SiteUserPayload> = self.client.get_json(url).await?;
        Ok(payload.value.into_iter().map(SiteUserRecord::from).collect())
    }

    async fn find_site_user_by_login_name(
        &self,
        login_name: &str,
    ) -> AppResult<Option<SiteUserRecord>> {
        let mut url = self.web_endpoint("siteusers(@v)")?;
        url.query_pairs_mut()
            .append_pair("@v", odata_literal(login_name).as_str());

        let payload: Option<SiteUserPayload> = self.client.get_optional_json(url).await?;
        Ok(payload.map(SiteUserRecord::from))
    }
}

#[cfg(test)]
mod tests;
