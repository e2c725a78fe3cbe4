use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use memberlens_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com/v1.0";
const DEFAULT_DIRECTORY_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RemoteDirectoryConfig {
    pub site_url: Url,
    pub site_access_token: String,
    pub graph_url: Url,
    pub graph_access_token: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum DirectoryProviderConfig {
    Fixture { path: PathBuf },
    Remote(RemoteDirectoryConfig),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub directory_provider: DirectoryProviderConfig,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(3001);

        let directory_provider = match lookup("DIRECTORY_PROVIDER")
            .unwrap_or_else(|| "fixture".to_owned())
            .as_str()
        {
            "fixture" => DirectoryProviderConfig::Fixture {
                path: PathBuf::from(required_non_empty(&lookup, "DIRECTORY_FIXTURE_PATH")?),
            },
            "remote" => {
                let timeout_seconds = lookup("DIRECTORY_TIMEOUT_SECONDS")
                    .map(|value| {
                        value.parse::<u64>().map_err(|error| {
                            AppError::Validation(format!(
                                "invalid DIRECTORY_TIMEOUT_SECONDS: {error}"
                            ))
                        })
                    })
                    .transpose()?
                    .unwrap_or(DEFAULT_DIRECTORY_TIMEOUT_SECONDS);
                if timeout_seconds == 0 {
                    return Err(AppError::Validation(
                        "DIRECTORY_TIMEOUT_SECONDS must be greater than zero".to_owned(),
                    ));
                }

                let graph_url = lookup("GRAPH_URL").unwrap_or_else(|| DEFAULT_GRAPH_URL.to_owned());
                DirectoryProviderConfig::Remote(RemoteDirectoryConfig {
                    site_url: parse_url("SITE_URL", &required_non_empty(&lookup, "SITE_URL")?)?,
                    site_access_token: required_non_empty(&lookup, "SITE_ACCESS_TOKEN")?,
                    graph_url: parse_url("GRAPH_URL", &graph_url)?,
                    graph_access_token: required_non_empty(&lookup, "GRAPH_ACCESS_TOKEN")?,
                    timeout: Duration::from_secs(timeout_seconds),
                })
            }
            other => {
                return Err(AppError::Validation(format!(
                    "DIRECTORY_PROVIDER must be either 'fixture' or 'remote', got '{other}'"
                )));
            }
        };

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            directory_provider,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn parse_url(name: &str, value: &str) -> Result<Url, AppError> {
    let url = Url::parse(value.trim())
        .map_err(|error| AppError::Validation(format!("invalid {name} '{value}': {error}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Validation(format!(
            "{name} '{value}' must be an absolute http(s) url"
        )));
    }

    Ok(url)
}
