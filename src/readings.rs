//! Typed views over the inverter's positional reading tuples.
//!
//! The device reports bare ordered arrays of numbers where the position
//! encodes the meaning, and the layout shifts depending on how many panel
//! strings the unit has. These decoders are the only place in the crate that
//! knows those offsets.

/// Raw tuples at or above this length use the triple-string layout.
const TRIPLE_STRING_MIN_LEN: usize = 15;

/// A device tuple of length <= 1 carries no readings at all.
const MIN_USEFUL_LEN: usize = 2;

/// Decoded main device snapshot.
///
/// Each field is `None` when the device variant does not report it (no third
/// string installed, or the tuple stopped short of the field's offset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessData {
    pub current_power: Option<f64>,
    pub total_energy: Option<f64>,
    pub daily_energy: Option<f64>,
    pub string1_voltage: Option<f64>,
    pub string1_current: Option<f64>,
    pub string2_voltage: Option<f64>,
    pub string2_current: Option<f64>,
    pub string3_voltage: Option<f64>,
    pub string3_current: Option<f64>,
    pub l1_voltage: Option<f64>,
    pub l1_power: Option<f64>,
    pub l2_voltage: Option<f64>,
    pub l2_power: Option<f64>,
    pub l3_voltage: Option<f64>,
    pub l3_power: Option<f64>,
    pub status: Option<f64>,
}

impl ProcessData {
    /// Decodes a raw device tuple, or `None` when the tuple is too short to
    /// carry any reading.
    ///
    /// Dual-string units report a shorter tuple: string 3 is absent and the
    /// L3 voltage/power and status values sit three slots earlier than on a
    /// triple-string unit.
    pub fn from_raw(raw: &[f64]) -> Option<Self> {
        if raw.len() < MIN_USEFUL_LEN {
            return None;
        }
        let triple_string = raw.len() >= TRIPLE_STRING_MIN_LEN;
        let at = |index: usize| raw.get(index).copied();
        Some(Self {
            current_power: at(0),
            total_energy: at(1),
            daily_energy: at(2),
            string1_voltage: at(3),
            string1_current: at(5),
            string2_voltage: at(7),
            string2_current: at(9),
            string3_voltage: if triple_string { at(11) } else { None },
            string3_current: if triple_string { at(13) } else { None },
            l1_voltage: at(4),
            l1_power: at(6),
            l2_voltage: at(8),
            l2_power: at(10),
            l3_voltage: if triple_string { at(12) } else { at(11) },
            l3_power: if triple_string { at(14) } else { at(12) },
            status: if triple_string { at(15) } else { at(13) },
        })
    }
}

/// Decoded own-consumption snapshot, present only on units with the optional
/// metering hardware. The device signals its absence with a tuple of length
/// <= 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnConsumption {
    pub solar_generator_power: Option<f64>,
    pub consumption_phase_1: Option<f64>,
    pub consumption_phase_2: Option<f64>,
    pub consumption_phase_3: Option<f64>,
}

impl OwnConsumption {
    pub fn from_raw(raw: &[f64]) -> Option<Self> {
        if raw.len() < MIN_USEFUL_LEN {
            return None;
        }
        let at = |index: usize| raw.get(index).copied();
        Some(Self {
            solar_generator_power: at(5),
            consumption_phase_1: at(8),
            consumption_phase_2: at(9),
            consumption_phase_3: at(10),
        })
    }
}
