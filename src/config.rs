use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_derive::{Deserialize, Serialize};

use crate::sensor_types::SensorType;

const DEFAULT_NAME: &str = "Kostal Piko";

/// Bridge configuration for one inverter.
///
/// Deserialization already rejects unknown monitored-condition keys, so no
/// entity is ever constructed for a sensor type this crate does not know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Host name or address of the inverter's local API, scheme optional.
    pub host: String,
    pub username: String,
    pub password: String,
    /// Display-name prefix for all of the device's sensors.
    #[serde(default = "default_name")]
    pub name: String,
    pub monitored_conditions: Vec<SensorType>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl BridgeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if self.monitored_conditions.is_empty() {
            anyhow::bail!("monitored_conditions must list at least one sensor");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<BridgeConfig> {
        let config: BridgeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"{
                "host": "192.168.1.50",
                "username": "pyko",
                "password": "pyko",
                "name": "Garage Roof",
                "monitored_conditions": ["current_power", "status", "consumption_phase_1"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.host, "192.168.1.50");
        assert_eq!(config.name, "Garage Roof");
        assert_eq!(
            config.monitored_conditions,
            vec![
                SensorType::CurrentPower,
                SensorType::Status,
                SensorType::ConsumptionPhase1,
            ]
        );
    }

    #[test]
    fn test_name_defaults() {
        let config = parse(
            r#"{
                "host": "192.168.1.50",
                "username": "pyko",
                "password": "pyko",
                "monitored_conditions": ["current_power"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "Kostal Piko");
    }

    #[test]
    fn test_unknown_sensor_key_is_rejected() {
        let result = parse(
            r#"{
                "host": "192.168.1.50",
                "username": "pyko",
                "password": "pyko",
                "monitored_conditions": ["current_power", "warp_core_temperature"]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_condition_list_is_rejected() {
        let result = parse(
            r#"{
                "host": "192.168.1.50",
                "username": "pyko",
                "password": "pyko",
                "monitored_conditions": []
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = parse(
            r#"{
                "host": "192.168.1.50",
                "monitored_conditions": ["current_power"]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_has_path_context() {
        let error = BridgeConfig::from_file("/nonexistent/piko.json").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/piko.json"));
    }
}
