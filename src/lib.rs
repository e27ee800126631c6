//! M3/M4 rotor cipher machine emulator.
//!
//! Reproduces the signal path of the naval rotor cipher machines: a
//! plugboard, three stepping rotors (plus the non-rotating fourth rotor of
//! the M4) and a reflector, wired with the historical substitution tables.
//! Output is letter-for-letter identical to the original hardware.
//!
//! # Architecture
//!
//! ```text
//! tables      (static rotor / reflector wirings, looked up by identifier)
//!     ↓
//! Plugboard   (pairwise swaps, applied on entry and exit)
//! Rotor       (wiring + ring setting + position, forward and reverse)
//! Reflector   (fixed involution)
//!     ↓
//! Machine     (stepping with double step + full signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two identically configured machines:
//!
//! ```
//! use enigma_machine::{Machine, MachineConfig};
//!
//! let config = MachineConfig::m3("B", "III", "II", "I").with_plugboard(["AB", "CD"]);
//!
//! let mut encoder = Machine::new(&config).unwrap();
//! let ciphertext = encoder.encode_message("Hello, world!", 5);
//! assert_eq!(ciphertext, "ILACB BMTBE");
//!
//! let mut decoder = Machine::new(&config).unwrap();
//! assert_eq!(decoder.encode_message(&ciphertext, 0), "HELLOWORLD");
//! ```
//!
//! An M4 with the thin reflector, fourth rotor and custom ring settings:
//!
//! ```
//! use enigma_machine::{Machine, MachineConfig};
//!
//! let config = MachineConfig::m4("c_thin", "V", "VII", "II", "b")
//!     .with_plugboard(["PO", "ML", "IU"])
//!     .with_ring_settings(2, 3, 4, 5)
//!     .with_positions(10, 11, 12, 13);
//! let mut machine = Machine::new(&config).unwrap();
//! assert_eq!(machine.encode_message("WEATHERREPORTNORTHSEA", 5), "NZGCS DJFUX PKIKE KJFAF P");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod tables;

mod machine;
mod plugboard;
mod reflector;
mod rotor;

pub use alphabet::Letter;
pub use config::{MachineConfig, MachineType, RotorConfig};
pub use error::{EnigmaError, Result};
pub use machine::{Machine, MachineStatus};
pub use plugboard::{Plugboard, MAX_PAIRS};
pub use reflector::{Reflector, ReflectorSpec};
pub use rotor::{Rotor, RotorSpec};
