use std::env;
use std::sync::Arc;
use std::time::Duration;

use kostal_piko_bridge::{BridgeConfig, HttpPikoClient, PikoPoller, PikoSensor};
use tokio::sync::Mutex;
use tokio::time;
use tracing::{info, warn};

/// How often the runner walks all sensors. The poller's own throttle decides
/// whether a walk actually touches the network.
const UPDATE_CADENCE: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let config_path = env::var("PIKO_CONFIG").unwrap_or_else(|_| "piko.json".to_string());
    let config = BridgeConfig::from_file(&config_path)?;

    info!(host = %config.host, name = %config.name, "starting Kostal Piko bridge");

    let client = HttpPikoClient::new(&config.host, &config.username, &config.password);
    // Identity is fetched here, once; a dead inverter fails startup.
    let poller = Arc::new(Mutex::new(PikoPoller::new(client).await?));

    let mut sensors = Vec::new();
    for sensor_type in &config.monitored_conditions {
        sensors.push(PikoSensor::new(poller.clone(), *sensor_type, &config.name).await);
    }
    info!(count = sensors.len(), "sensors registered");

    let mut tick = time::interval(UPDATE_CADENCE);
    loop {
        tick.tick().await;
        for sensor in &mut sensors {
            match sensor.refresh().await {
                Ok(()) => match sensor.state() {
                    Some(value) => info!(
                        sensor = %sensor.name(),
                        value,
                        unit = sensor.unit_of_measurement().unwrap_or(""),
                        "reading"
                    ),
                    None => info!(sensor = %sensor.name(), "unavailable"),
                },
                Err(error) => {
                    warn!(sensor = %sensor.name(), %error, "refresh failed, will retry")
                }
            }
        }
    }
}
