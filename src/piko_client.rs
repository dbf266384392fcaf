use anyhow::Context;
use serde_derive::{Deserialize, Serialize};

/// Identity of one inverter, fetched once and assumed stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub serial_number: String,
    pub model: String,
}

/// Capability surface of the device-communication layer.
///
/// The actual wire protocol stays behind this trait: callers only see
/// "refresh the snapshots" plus the two raw tuples and the device identity.
#[allow(async_fn_in_trait)]
pub trait PikoClient {
    /// Fetches a fresh copy of both reading tuples from the device.
    async fn update(&mut self) -> Result<(), anyhow::Error>;

    /// Raw device reading tuple from the last successful `update`.
    fn data(&self) -> &[f64];

    /// Raw own-consumption tuple from the last successful `update`; empty on
    /// units without the metering hardware.
    fn ba_data(&self) -> &[f64];

    /// Fetches the device identity (serial number and model).
    async fn info(&self) -> Result<DeviceInfo, anyhow::Error>;
}

/// HTTP implementation speaking the inverter's local JSON endpoints with
/// basic auth. Credentials are passed through unchanged.
pub struct HttpPikoClient {
    base_url: String,
    username: String,
    password: String,
    client: reqwest::Client,
    data: Vec<f64>,
    ba_data: Vec<f64>,
}

impl HttpPikoClient {
    pub fn new(host: &str, username: &str, password: &str) -> Self {
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("http://{host}")
        };
        Self {
            base_url,
            username: username.to_string(),
            password: password.to_string(),
            client: reqwest::Client::new(),
            data: Vec::new(),
            ba_data: Vec::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, anyhow::Error> {
        let url = format!("{}{}", self.base_url, path);
        let result = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(result)
    }

    /// Fetches a tuple endpoint; a 404 means the device variant does not have
    /// that reading set and maps to an empty tuple.
    async fn get_tuple(&self, path: &str) -> Result<Vec<f64>, anyhow::Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let values = response.error_for_status()?.json().await?;
        Ok(values)
    }
}

impl PikoClient for HttpPikoClient {
    async fn update(&mut self) -> Result<(), anyhow::Error> {
        let data = self
            .get_tuple("/api/measurements")
            .await
            .context("reading device measurements")?;
        let ba_data = self
            .get_tuple("/api/own-consumption")
            .await
            .context("reading own-consumption measurements")?;
        self.data = data;
        self.ba_data = ba_data;
        Ok(())
    }

    fn data(&self) -> &[f64] {
        &self.data
    }

    fn ba_data(&self) -> &[f64] {
        &self.ba_data
    }

    async fn info(&self) -> Result<DeviceInfo, anyhow::Error> {
        self.get_json("/api/info").await.context("reading device info")
    }
}
