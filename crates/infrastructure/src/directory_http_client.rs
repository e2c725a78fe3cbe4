use memberlens_core::{AppError, AppResult};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Authenticated JSON transport shared by the remote directory adapters.
///
/// Maps HTTP outcomes onto the application error taxonomy: `404` becomes
/// `NotFound`, any other failure to get a successful response becomes
/// `TransportFailure`, and an undecodable body becomes `MalformedResponse`.
/// No request is retried.
#[derive(Clone)]
pub(crate) struct DirectoryHttpClient {
    http_client: reqwest::Client,
    access_token: String,
    directory_name: &'static str,
}

impl DirectoryHttpClient {
    pub(crate) fn new(
        http_client: reqwest::Client,
        access_token: impl Into<String>,
        directory_name: &'static str,
    ) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            directory_name,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let request = self.http_client.get(url.clone());
        self.send(request, &url).await
    }

    pub(crate) async fn get_optional_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> AppResult<Option<T>> {
        match self.get_json(url).await {
            Ok(value) => Ok(Some(value)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &serde_json::Value,
    ) -> AppResult<T> {
        let request = self.http_client.post(url.clone()).json(body);
        self.send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> AppResult<T> {
        debug!(
            directory = self.directory_name,
            path = %url.path(),
            "directory request"
        );

        let response = request
            .bearer_auth(self.access_token.as_str())
            .header(reqwest::header::ACCEPT, "application/json;odata=nometadata")
            .send()
            .await
            .map_err(|error| {
                AppError::TransportFailure(format!(
                    "{} request to '{}' failed: {error}",
                    self.directory_name,
                    url.path()
                ))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} has no resource at '{}'",
                self.directory_name,
                url.path()
            )));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<response body unavailable>".to_owned());
            warn!(
                directory = self.directory_name,
                path = %url.path(),
                %status,
                "directory request failed"
            );
            return Err(AppError::TransportFailure(format!(
                "{} returned status {status} for '{}': {body}",
                self.directory_name,
                url.path()
            )));
        }

        let bytes = response.bytes().await.map_err(|error| {
            AppError::TransportFailure(format!(
                "failed to read {} response body: {error}",
                self.directory_name
            ))
        })?;

        serde_json::from_slice(&bytes).map_err(|error| {
            AppError::MalformedResponse(format!(
                "{} returned an unexpected payload for '{}': {error}",
                self.directory_name,
                url.path()
            ))
        })
    }
}

/// Appends path segments to a base url, percent-encoding each segment.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| AppError::Validation(format!("directory url '{base}' cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
