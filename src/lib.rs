//! Kostal Piko Sensor Bridge Library
//!
//! This library polls a Kostal Piko solar inverter over its local network API
//! and exposes the individual measurements (power, voltage, current, energy,
//! status) as sensor entities with label/unit/icon metadata. One throttled
//! poller is shared by all of a device's sensors, so the inverter sees at
//! most one network fetch per interval.

pub mod config;
pub mod piko_client;
pub mod poller;
pub mod readings;
pub mod sensor;
pub mod sensor_types;

// Re-export commonly used types for easier access
pub use config::BridgeConfig;
pub use piko_client::{DeviceInfo, HttpPikoClient, PikoClient};
pub use poller::{PikoPoller, MIN_TIME_BETWEEN_UPDATES};
pub use readings::{OwnConsumption, ProcessData};
pub use sensor::{PikoSensor, SharedPoller};
pub use sensor_types::SensorType;
