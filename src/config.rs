//! Machine configuration: everything needed to build a [`Machine`](crate::Machine).
//!
//! A configuration names its components by their historical identifiers and
//! carries the 1-based ring settings and starting positions an operator
//! would read off the key sheet. Custom rotors and reflectors carry their
//! wiring inline. It can be deserialized with `serde`:
//!
//! ```
//! use enigma_machine::{Machine, MachineConfig};
//!
//! let json = r#"{
//!     "machine_type": "M3",
//!     "reflector": "B",
//!     "right": { "rotor": "III" },
//!     "middle": { "rotor": "II" },
//!     "left": { "rotor": "I" },
//!     "plugboard": ["AB", "CD"]
//! }"#;
//! let config: MachineConfig = serde_json::from_str(json).unwrap();
//! let mut machine = Machine::new(&config).unwrap();
//! assert_eq!(machine.encode_message("HELLOXWORLD", 0), "ILACBSQQCPW");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineType {
    /// Three rotors.
    M3,
    /// Three rotors plus a non-rotating fourth rotor beside the reflector.
    M4,
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineType::M3 => write!(f, "M3"),
            MachineType::M4 => write!(f, "M4"),
        }
    }
}

fn default_setting() -> i32 {
    1
}

/// One rotor slot: which rotor, its ring setting and its starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Rotor identifier, e.g. `"III"` or `"b"`.
    pub rotor: String,
    /// Ring setting, 1-based ("A = 1"). Defaults to 1.
    #[serde(default = "default_setting")]
    pub ring_setting: i32,
    /// Starting position, 1-based ("A = 1"). Defaults to 1.
    #[serde(default = "default_setting")]
    pub position: i32,
    /// Custom wiring, 26 letters for contacts A..Z. When set, `rotor` is
    /// only a label and the historical tables are not consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiring: Option<String>,
    /// Notch letters of a custom rotor. Ignored without `wiring`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notches: Option<String>,
}

impl RotorConfig {
    /// A rotor at ring setting 1 and position 1.
    pub fn new(rotor: impl Into<String>) -> Self {
        RotorConfig {
            rotor: rotor.into(),
            ring_setting: 1,
            position: 1,
            wiring: None,
            notches: None,
        }
    }

    /// Sets the ring setting.
    pub fn with_ring_setting(mut self, ring_setting: i32) -> Self {
        self.ring_setting = ring_setting;
        self
    }

    /// Sets the starting position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Uses a custom wiring and notch letters instead of a table entry.
    pub fn with_wiring(mut self, wiring: impl Into<String>, notches: impl Into<String>) -> Self {
        self.wiring = Some(wiring.into());
        self.notches = Some(notches.into());
        self
    }
}

/// Full configuration of a machine.
///
/// Nothing is validated here; [`Machine::new`](crate::Machine::new) checks
/// identifiers, plugboard pairs and the fourth rotor requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Machine model.
    pub machine_type: MachineType,
    /// Reflector identifier, e.g. `"B"` or `"b_thin"`.
    pub reflector: String,
    /// Custom reflector wiring. When set, `reflector` is only a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflector_wiring: Option<String>,
    /// Right (fast) rotor.
    pub right: RotorConfig,
    /// Middle rotor.
    pub middle: RotorConfig,
    /// Left rotor.
    pub left: RotorConfig,
    /// Fourth rotor, required for the M4 and rejected for the M3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fourth: Option<RotorConfig>,
    /// Plugboard pairs, e.g. `["AB", "CD"]`.
    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl MachineConfig {
    /// An M3 configuration with default ring settings, positions and an
    /// empty plugboard.
    pub fn m3(reflector: &str, right: &str, middle: &str, left: &str) -> Self {
        MachineConfig {
            machine_type: MachineType::M3,
            reflector: reflector.to_string(),
            reflector_wiring: None,
            right: RotorConfig::new(right),
            middle: RotorConfig::new(middle),
            left: RotorConfig::new(left),
            fourth: None,
            plugboard: Vec::new(),
        }
    }

    /// An M4 configuration with default ring settings, positions and an
    /// empty plugboard.
    pub fn m4(reflector: &str, right: &str, middle: &str, left: &str, fourth: &str) -> Self {
        MachineConfig {
            machine_type: MachineType::M4,
            fourth: Some(RotorConfig::new(fourth)),
            ..MachineConfig::m3(reflector, right, middle, left)
        }
    }

    /// Sets the plugboard pairs.
    pub fn with_plugboard<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugboard = pairs.into_iter().map(Into::into).collect();
        self
    }

    /// Uses a custom reflector wiring instead of a table entry.
    pub fn with_reflector_wiring(mut self, wiring: impl Into<String>) -> Self {
        self.reflector_wiring = Some(wiring.into());
        self
    }

    /// Sets ring settings right to left; the fourth value is ignored unless
    /// a fourth rotor is configured.
    pub fn with_ring_settings(mut self, right: i32, middle: i32, left: i32, fourth: i32) -> Self {
        self.right.ring_setting = right;
        self.middle.ring_setting = middle;
        self.left.ring_setting = left;
        if let Some(slot) = self.fourth.as_mut() {
            slot.ring_setting = fourth;
        }
        self
    }

    /// Sets starting positions right to left; the fourth value is ignored
    /// unless a fourth rotor is configured.
    pub fn with_positions(mut self, right: i32, middle: i32, left: i32, fourth: i32) -> Self {
        self.right.position = right;
        self.middle.position = middle;
        self.left.position = left;
        if let Some(slot) = self.fourth.as_mut() {
            slot.position = fourth;
        }
        self
    }
}
