use std::sync::Arc;

use tokio::sync::Mutex;

use crate::piko_client::PikoClient;
use crate::poller::PikoPoller;
use crate::sensor_types::SensorType;

/// All sensors of one device hold the same poller behind one mutex, so a
/// device produces at most one network fetch per throttle interval no matter
/// how many sensors the host refreshes.
pub type SharedPoller<C> = Arc<Mutex<PikoPoller<C>>>;

pub const MANUFACTURER: &str = "Kostal";

/// One sensor entity for a single monitored condition.
///
/// The last observed value is `None` ("unavailable") until the first
/// successful refresh, and falls back to `None` whenever the device stops
/// reporting the reading (short tuple, no third string, no metering
/// hardware).
pub struct PikoSensor<C: PikoClient> {
    poller: SharedPoller<C>,
    sensor_type: SensorType,
    name_prefix: String,
    serial_number: String,
    model: String,
    state: Option<f64>,
}

impl<C: PikoClient> PikoSensor<C> {
    pub async fn new(poller: SharedPoller<C>, sensor_type: SensorType, name_prefix: &str) -> Self {
        let (serial_number, model) = {
            let locked = poller.lock().await;
            let identity = locked.identity();
            (identity.serial_number.clone(), identity.model.clone())
        };
        Self {
            poller,
            sensor_type,
            name_prefix: name_prefix.to_string(),
            serial_number,
            model,
            state: None,
        }
    }

    /// Triggers the shared poller (a no-op inside the throttle window) and
    /// re-extracts this sensor's value from the current snapshot. Fetch
    /// errors propagate so the host can mark the entity unavailable.
    pub async fn refresh(&mut self) -> Result<(), anyhow::Error> {
        let mut poller = self.poller.lock().await;
        poller.refresh().await?;
        self.state = Self::extract(&poller, self.sensor_type);
        Ok(())
    }

    fn extract(poller: &PikoPoller<C>, sensor_type: SensorType) -> Option<f64> {
        let process = poller.process_data();
        let own = poller.own_consumption();
        match sensor_type {
            SensorType::CurrentPower => process?.current_power,
            SensorType::TotalEnergy => process?.total_energy,
            SensorType::DailyEnergy => process?.daily_energy,
            SensorType::String1Voltage => process?.string1_voltage,
            SensorType::String1Current => process?.string1_current,
            SensorType::String2Voltage => process?.string2_voltage,
            SensorType::String2Current => process?.string2_current,
            SensorType::String3Voltage => process?.string3_voltage,
            SensorType::String3Current => process?.string3_current,
            SensorType::L1Voltage => process?.l1_voltage,
            SensorType::L1Power => process?.l1_power,
            SensorType::L2Voltage => process?.l2_voltage,
            SensorType::L2Power => process?.l2_power,
            SensorType::L3Voltage => process?.l3_voltage,
            SensorType::L3Power => process?.l3_power,
            SensorType::Status => process?.status,
            SensorType::SolarGeneratorPower => own?.solar_generator_power,
            SensorType::ConsumptionPhase1 => own?.consumption_phase_1,
            SensorType::ConsumptionPhase2 => own?.consumption_phase_2,
            SensorType::ConsumptionPhase3 => own?.consumption_phase_3,
        }
    }

    /// Last observed value; `None` means unavailable.
    pub fn state(&self) -> Option<f64> {
        self.state
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// Display name, "{prefix} {label}".
    pub fn name(&self) -> String {
        format!("{} {}", self.name_prefix, self.sensor_type.label())
    }

    /// Unique id, "{serial} {label}".
    pub fn unique_id(&self) -> String {
        format!("{} {}", self.serial_number, self.sensor_type.label())
    }

    /// Grouping key tying all of a device's sensors together.
    pub fn device_identifier(&self) -> &str {
        &self.serial_number
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn unit_of_measurement(&self) -> Option<&'static str> {
        self.sensor_type.unit()
    }

    pub fn icon(&self) -> &'static str {
        self.sensor_type.icon()
    }
}
