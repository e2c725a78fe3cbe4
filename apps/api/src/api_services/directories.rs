use std::sync::Arc;

use memberlens_core::AppError;
use memberlens_infrastructure::{GraphTenantDirectory, InMemoryDirectory, RestSiteDirectory};
use tracing::info;

use crate::api_config::{ApiConfig, DirectoryProviderConfig, RemoteDirectoryConfig};
use crate::state::AppState;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    match &config.directory_provider {
        DirectoryProviderConfig::Fixture { path } => {
            let directory = Arc::new(InMemoryDirectory::from_json_file(path).await?);
            info!(path = %path.display(), "using fixture directories");
            Ok(AppState::new(directory.clone(), directory))
        }
        DirectoryProviderConfig::Remote(remote) => {
            let http_client = build_http_client(remote)?;
            info!(
                site_url = %remote.site_url,
                graph_url = %remote.graph_url,
                "using remote directories"
            );
            Ok(AppState::new(
                Arc::new(RestSiteDirectory::new(
                    http_client.clone(),
                    remote.site_url.clone(),
                    remote.site_access_token.clone(),
                )),
                Arc::new(GraphTenantDirectory::new(
                    http_client,
                    remote.graph_url.clone(),
                    remote.graph_access_token.clone(),
                )),
            ))
        }
    }
}

fn build_http_client(config: &RemoteDirectoryConfig) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build directory http client: {error}")))
}
