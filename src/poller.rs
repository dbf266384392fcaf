use std::time::Duration;

use anyhow::Context;
use tokio::time::Instant;
use tracing::debug;

use crate::piko_client::{DeviceInfo, PikoClient};
use crate::readings::{OwnConsumption, ProcessData};

/// Minimum time between two real network fetches. All sensors of one device
/// share a poller, so this caps the request rate regardless of how many
/// sensors are configured.
pub const MIN_TIME_BETWEEN_UPDATES: Duration = Duration::from_secs(30);

/// Throttled poller owning the device client.
///
/// Holds the last decoded snapshots; `refresh` only performs the network
/// fetch once the minimum interval has elapsed, so sensors refreshing within
/// the same tick all observe the same snapshot. Device identity is fetched
/// once at construction and never again.
pub struct PikoPoller<C: PikoClient> {
    client: C,
    identity: DeviceInfo,
    min_interval: Duration,
    last_fetch: Option<Instant>,
    process_data: Option<ProcessData>,
    own_consumption: Option<OwnConsumption>,
}

impl<C: PikoClient> PikoPoller<C> {
    /// Creates a poller with the default minimum fetch interval. Fails when
    /// the device identity cannot be fetched.
    pub async fn new(client: C) -> Result<Self, anyhow::Error> {
        Self::with_min_interval(client, MIN_TIME_BETWEEN_UPDATES).await
    }

    pub async fn with_min_interval(
        client: C,
        min_interval: Duration,
    ) -> Result<Self, anyhow::Error> {
        let identity = client.info().await.context("fetching device identity")?;
        debug!(
            serial_number = %identity.serial_number,
            model = %identity.model,
            "connected to inverter"
        );
        Ok(Self {
            client,
            identity,
            min_interval,
            last_fetch: None,
            process_data: None,
            own_consumption: None,
        })
    }

    /// Refreshes both snapshots, unless the previous successful fetch is
    /// still within the minimum interval (then the prior snapshots stay).
    ///
    /// Client errors propagate to the caller and leave the snapshots and the
    /// throttle state untouched, so the next invocation retries immediately.
    pub async fn refresh(&mut self) -> Result<(), anyhow::Error> {
        if let Some(last_fetch) = self.last_fetch {
            if last_fetch.elapsed() < self.min_interval {
                return Ok(());
            }
        }

        self.client.update().await?;
        self.process_data = ProcessData::from_raw(self.client.data());
        self.own_consumption = OwnConsumption::from_raw(self.client.ba_data());
        self.last_fetch = Some(Instant::now());
        debug!(data = ?self.client.data(), ba_data = ?self.client.ba_data(), "fetched snapshots");
        Ok(())
    }

    pub fn identity(&self) -> &DeviceInfo {
        &self.identity
    }

    /// Last decoded device snapshot; `None` before the first successful fetch
    /// or when the device reported an empty tuple.
    pub fn process_data(&self) -> Option<&ProcessData> {
        self.process_data.as_ref()
    }

    /// Last decoded own-consumption snapshot; `None` on units without the
    /// metering hardware.
    pub fn own_consumption(&self) -> Option<&OwnConsumption> {
        self.own_consumption.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }
}
