use serde_derive::{Deserialize, Serialize};

/// The closed set of measurements a Piko inverter can expose.
///
/// The configuration schema accepts these as snake_case keys
/// (`current_power`, `consumption_phase_1`, ...), so an unknown key is
/// rejected while the config is being deserialized, before any entity exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    CurrentPower,
    TotalEnergy,
    DailyEnergy,
    String1Voltage,
    String1Current,
    String2Voltage,
    String2Current,
    String3Voltage,
    String3Current,
    L1Voltage,
    L1Power,
    L2Voltage,
    L2Power,
    L3Voltage,
    L3Power,
    SolarGeneratorPower,
    #[serde(rename = "consumption_phase_1")]
    ConsumptionPhase1,
    #[serde(rename = "consumption_phase_2")]
    ConsumptionPhase2,
    #[serde(rename = "consumption_phase_3")]
    ConsumptionPhase3,
    Status,
}

impl SensorType {
    /// Every known sensor type, in the order the original descriptor table
    /// listed them.
    pub const ALL: [SensorType; 20] = [
        SensorType::SolarGeneratorPower,
        SensorType::ConsumptionPhase1,
        SensorType::ConsumptionPhase2,
        SensorType::ConsumptionPhase3,
        SensorType::CurrentPower,
        SensorType::TotalEnergy,
        SensorType::DailyEnergy,
        SensorType::String1Voltage,
        SensorType::String1Current,
        SensorType::String2Voltage,
        SensorType::String2Current,
        SensorType::String3Voltage,
        SensorType::String3Current,
        SensorType::L1Voltage,
        SensorType::L1Power,
        SensorType::L2Voltage,
        SensorType::L2Power,
        SensorType::L3Voltage,
        SensorType::L3Power,
        SensorType::Status,
    ];

    /// Display label, also part of each entity's unique id.
    pub fn label(self) -> &'static str {
        match self {
            SensorType::CurrentPower => "Current Power",
            SensorType::TotalEnergy => "Total Energy",
            SensorType::DailyEnergy => "Daily Energy",
            SensorType::String1Voltage => "String 1 Voltage",
            SensorType::String1Current => "String 1 Current",
            SensorType::String2Voltage => "String 2 Voltage",
            SensorType::String2Current => "String 2 Current",
            SensorType::String3Voltage => "String 3 Voltage",
            SensorType::String3Current => "String 3 Current",
            SensorType::L1Voltage => "L1 Voltage",
            SensorType::L1Power => "L1 Power",
            SensorType::L2Voltage => "L2 Voltage",
            SensorType::L2Power => "L2 Power",
            SensorType::L3Voltage => "L3 Voltage",
            SensorType::L3Power => "L3 Power",
            SensorType::SolarGeneratorPower => "Solar Generator Power",
            SensorType::ConsumptionPhase1 => "Consumption Phase 1",
            SensorType::ConsumptionPhase2 => "Consumption Phase 2",
            SensorType::ConsumptionPhase3 => "Consumption Phase 3",
            SensorType::Status => "Status",
        }
    }

    /// Unit of measurement; `None` for unit-less readings (the status code).
    pub fn unit(self) -> Option<&'static str> {
        match self {
            SensorType::CurrentPower
            | SensorType::L1Power
            | SensorType::L2Power
            | SensorType::L3Power
            | SensorType::SolarGeneratorPower
            | SensorType::ConsumptionPhase1
            | SensorType::ConsumptionPhase2
            | SensorType::ConsumptionPhase3 => Some("W"),
            SensorType::TotalEnergy | SensorType::DailyEnergy => Some("kWh"),
            SensorType::String1Voltage
            | SensorType::String2Voltage
            | SensorType::String3Voltage
            | SensorType::L1Voltage
            | SensorType::L2Voltage
            | SensorType::L3Voltage => Some("V"),
            SensorType::String1Current
            | SensorType::String2Current
            | SensorType::String3Current => Some("A"),
            SensorType::Status => None,
        }
    }

    /// Icon identifier handed through to the host platform.
    pub fn icon(self) -> &'static str {
        match self {
            SensorType::CurrentPower
            | SensorType::TotalEnergy
            | SensorType::DailyEnergy
            | SensorType::SolarGeneratorPower => "mdi:solar-power",
            SensorType::String1Voltage
            | SensorType::String2Voltage
            | SensorType::String3Voltage
            | SensorType::L1Voltage
            | SensorType::L2Voltage
            | SensorType::L3Voltage => "mdi:current-ac",
            SensorType::String1Current
            | SensorType::String2Current
            | SensorType::String3Current => "mdi:flash",
            SensorType::L1Power
            | SensorType::L2Power
            | SensorType::L3Power
            | SensorType::ConsumptionPhase1
            | SensorType::ConsumptionPhase2
            | SensorType::ConsumptionPhase3 => "mdi:power-plug",
            SensorType::Status => "mdi:information-outline",
        }
    }

    /// True for readings sourced from the own-consumption tuple rather than
    /// the main device tuple.
    pub fn is_own_consumption(self) -> bool {
        matches!(
            self,
            SensorType::SolarGeneratorPower
                | SensorType::ConsumptionPhase1
                | SensorType::ConsumptionPhase2
                | SensorType::ConsumptionPhase3
        )
    }
}
