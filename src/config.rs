use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, net::SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTROLLER_URL: &str = "http://192.168.4.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub port: u16,
    /// Controller base URL, without a trailing slash.
    pub controller_url: String,
}

impl PanelConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("PORT").ok(), env::var("CONTROLLER_URL").ok())
    }

    pub fn from_vars(
        port: Option<String>,
        controller_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring unparsable PORT '{value}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let controller_url = controller_url.unwrap_or_else(|| DEFAULT_CONTROLLER_URL.to_string());
        let controller_url = normalize_controller_url(&controller_url)?;

        Ok(Self {
            port,
            controller_url,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn normalize_controller_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError {
        key: "CONTROLLER_URL",
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(trimmed.to_string())
}
