use crate::models::{Control, DeviceStatus, Directive};
use reqwest::{Client, StatusCode};
use tracing::debug;

const STATUS_PATH: &str = "getData";
const ACTIVATE_PATH: &str = "activate";

/// HTTP client for the spa controller's two endpoints.
#[derive(Debug, Clone)]
pub struct ControllerClient {
    http: Client,
    base_url: String,
}

impl ControllerClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `None` when the controller answers anything but 200.
    pub async fn fetch_status(&self) -> Result<Option<DeviceStatus>, reqwest::Error> {
        let response = self.http.get(self.endpoint(STATUS_PATH)).send().await?;
        if response.status() != StatusCode::OK {
            debug!(status = %response.status(), "status endpoint did not answer 200");
            return Ok(None);
        }

        let status = response.json::<DeviceStatus>().await?;
        Ok(Some(status))
    }

    /// Sends `activate?<id>=on|off`. The response body is not read.
    pub async fn activate(&self, control: Control, directive: Directive) -> Result<(), reqwest::Error> {
        let response = self
            .http
            .get(self.endpoint(ACTIVATE_PATH))
            .query(&[(control.element_id(), directive.as_str())])
            .send()
            .await?;
        debug!(%control, %directive, status = %response.status(), "activation sent");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}
