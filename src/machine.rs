//! Machine: the complete M3/M4 signal path and rotor stepping.
//!
//! Each keypress first steps the rotors, then sends the letter through
//!
//! ```text
//! plugboard → right → middle → left → [fourth] → reflector
//!           ← right ← middle ← left ← [fourth] ←
//! plugboard
//! ```
//!
//! Stepping reproduces the pawl-and-ratchet behaviour of the real machine,
//! including the double step of the middle rotor.

use std::fmt;

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::config::{MachineConfig, MachineType, RotorConfig};
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorSpec};
use crate::rotor::{Rotor, RotorSpec};
use crate::tables;

/// An M3 or M4 cipher machine.
///
/// The machine is self-reciprocal: a second machine built from the same
/// configuration turns the ciphertext back into the plaintext.
///
/// Encoding mutates the rotor positions, so every encode call takes
/// `&mut self`. Separate machines share nothing but the static tables and
/// can run on different threads.
///
/// # Examples
///
/// ```
/// use enigma_machine::{Machine, MachineConfig};
///
/// let config = MachineConfig::m3("B", "III", "II", "I").with_plugboard(["AB", "CD"]);
///
/// let mut encoder = Machine::new(&config).unwrap();
/// let ciphertext = encoder.encode_message("HELLOXWORLD", 0);
/// assert_eq!(ciphertext, "ILACBSQQCPW");
///
/// let mut decoder = Machine::new(&config).unwrap();
/// assert_eq!(decoder.encode_message(&ciphertext, 0), "HELLOXWORLD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    machine_type: MachineType,
    reflector: Reflector,
    right: Rotor,
    middle: Rotor,
    left: Rotor,
    fourth: Option<Rotor>,
    plugboard: Plugboard,
    /// Positions at construction: right, middle, left, fourth.
    start: [i32; 4],
}

impl Machine {
    /// Builds a machine from a configuration, resolving identifiers against
    /// the historical tables. Slots that carry their own wiring build a
    /// custom component instead.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotor`] / [`EnigmaError::UnknownReflector`]
    ///   for identifiers not in [`tables`](crate::tables).
    /// - Any wiring or notch error from [`RotorSpec::custom`] and
    ///   [`ReflectorSpec::custom`].
    /// - [`EnigmaError::MissingFourthRotor`] for an M4 without a fourth rotor.
    /// - [`EnigmaError::UnexpectedFourthRotor`] for an M3 with one.
    /// - Any plugboard error from [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaError, Machine, MachineConfig};
    ///
    /// let mut config = MachineConfig::m4("b_thin", "III", "II", "I", "g");
    /// assert!(Machine::new(&config).is_ok());
    ///
    /// config.fourth = None;
    /// assert_eq!(Machine::new(&config), Err(EnigmaError::MissingFourthRotor));
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self> {
        let mount = |slot: &RotorConfig| -> Result<Rotor> {
            match &slot.wiring {
                Some(wiring) => {
                    let notches = slot.notches.as_deref().unwrap_or("");
                    let spec = RotorSpec::custom(&slot.rotor, wiring, notches)?;
                    Ok(Rotor::new(spec, slot.ring_setting, slot.position))
                }
                None => Rotor::from_table(&slot.rotor, slot.ring_setting, slot.position),
            }
        };
        let reflector = match &config.reflector_wiring {
            Some(wiring) => Reflector::new(ReflectorSpec::custom(&config.reflector, wiring)?),
            None => Reflector::from_table(&config.reflector)?,
        };
        let fourth = config.fourth.as_ref().map(mount).transpose()?;
        Machine::from_components(
            config.machine_type,
            reflector,
            mount(&config.right)?,
            mount(&config.middle)?,
            mount(&config.left)?,
            fourth,
            Plugboard::new(&config.plugboard)?,
        )
    }

    /// Builds a machine from already mounted components, e.g. custom rotors.
    ///
    /// # Errors
    /// [`EnigmaError::MissingFourthRotor`] for an M4 without `fourth`, and
    /// [`EnigmaError::UnexpectedFourthRotor`] for an M3 with one.
    pub fn from_components(
        machine_type: MachineType,
        reflector: Reflector,
        right: Rotor,
        middle: Rotor,
        left: Rotor,
        fourth: Option<Rotor>,
        plugboard: Plugboard,
    ) -> Result<Self> {
        match (machine_type, &fourth) {
            (MachineType::M4, None) => return Err(EnigmaError::MissingFourthRotor),
            (MachineType::M3, Some(rotor)) => {
                return Err(EnigmaError::UnexpectedFourthRotor(rotor.name().to_string()))
            }
            _ => {}
        }
        let start = [
            right.position(),
            middle.position(),
            left.position(),
            fourth.as_ref().map_or(1, Rotor::position),
        ];
        let machine = Machine {
            machine_type,
            reflector,
            right,
            middle,
            left,
            fourth,
            plugboard,
            start,
        };
        debug!(
            machine_type = %machine.machine_type,
            reflector = machine.reflector.name(),
            plugboard_pairs = machine.plugboard.len(),
            status = %machine.status(),
            "machine assembled"
        );
        Ok(machine)
    }

    /// Returns the machine model.
    pub fn machine_type(&self) -> MachineType {
        self.machine_type
    }

    /// Returns the right (fast) rotor.
    pub fn right(&self) -> &Rotor {
        &self.right
    }

    /// Returns the middle rotor.
    pub fn middle(&self) -> &Rotor {
        &self.middle
    }

    /// Returns the left rotor.
    pub fn left(&self) -> &Rotor {
        &self.left
    }

    /// Returns the fourth rotor of an M4.
    pub fn fourth(&self) -> Option<&Rotor> {
        self.fourth.as_ref()
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Advances the rotors as one keypress would.
    ///
    /// Notches are checked before anything moves:
    /// - middle rotor on its notch: left, middle and right all advance
    ///   (the middle rotor's double step);
    /// - otherwise right rotor on its notch: middle and right advance;
    /// - otherwise only the right rotor advances.
    ///
    /// The fourth rotor never moves.
    pub fn step(&mut self) {
        if self.middle.is_on_notch() {
            trace!(
                middle = %self.middle.window_letter(),
                "middle rotor on notch, double step"
            );
            self.left.step_up();
            self.middle.step_up();
            self.right.step_up();
        } else if self.right.is_on_notch() {
            trace!(right = %self.right.window_letter(), "right rotor turnover");
            self.middle.step_up();
            self.right.step_up();
        } else {
            self.right.step_up();
        }
    }

    /// Encodes one letter: steps the rotors, then maps the letter through
    /// the full signal path.
    pub fn encode(&mut self, letter: Letter) -> Letter {
        self.step();
        self.map(letter)
    }

    /// Maps a letter through the signal path at the current positions,
    /// without stepping.
    fn map(&self, letter: Letter) -> Letter {
        let mut l = self.plugboard.map(letter);
        l = self.right.map_forward(l);
        l = self.middle.map_forward(l);
        l = self.left.map_forward(l);
        if let Some(fourth) = &self.fourth {
            l = fourth.map_forward(l);
        }
        l = self.reflector.map(l);
        if let Some(fourth) = &self.fourth {
            l = fourth.map_reverse(l);
        }
        l = self.left.map_reverse(l);
        l = self.middle.map_reverse(l);
        l = self.right.map_reverse(l);
        self.plugboard.map(l)
    }

    /// Encodes one character, as a keypress on the machine.
    ///
    /// Lowercase input is accepted; the output is always uppercase.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedCharacter`] for anything outside
    /// A-Z. The rotors do not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::m3("B", "III", "II", "I").with_plugboard(["AB", "CD"]);
    /// let mut machine = Machine::new(&config).unwrap();
    /// assert_eq!(machine.encode_letter('m').unwrap(), 'C');
    /// assert!(machine.encode_letter('!').is_err());
    /// assert_eq!(machine.encode_letter('i').unwrap(), 'O');
    /// ```
    pub fn encode_letter(&mut self, c: char) -> Result<char> {
        let letter = Letter::from_char(c)?;
        Ok(self.encode(letter).to_char())
    }

    /// Encodes a whole message.
    ///
    /// Only letters A-Z (either case) are encoded; every other character is
    /// dropped and does not step the rotors. When `group_size` is non-zero a
    /// single space is inserted after every `group_size` output letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::m3("B", "III", "II", "I");
    /// let mut machine = Machine::new(&config).unwrap();
    /// assert_eq!(machine.encode_message("abc-defg", 4), "BJEL RQZ");
    /// ```
    pub fn encode_message(&mut self, text: &str, group_size: usize) -> String {
        let separators = if group_size > 0 { text.len() / group_size } else { 0 };
        let mut output = String::with_capacity(text.len() + separators);
        let mut count = 0usize;
        for letter in text.chars().filter_map(|c| Letter::from_char(c).ok()) {
            if group_size > 0 && count > 0 && count.is_multiple_of(group_size) {
                output.push(' ');
            }
            output.push(self.encode(letter).to_char());
            count += 1;
        }
        output
    }

    /// Returns every rotor to the position it had when the machine was
    /// built. Ring settings and plugboard are unchanged.
    pub fn reset(&mut self) {
        self.right.set_position(self.start[0]);
        self.middle.set_position(self.start[1]);
        self.left.set_position(self.start[2]);
        if let Some(fourth) = self.fourth.as_mut() {
            fourth.set_position(self.start[3]);
        }
    }

    /// Returns the window letters, left to right (fourth rotor first).
    pub fn window(&self) -> String {
        self.rotors_left_to_right()
            .map(|rotor| rotor.window_letter().to_char())
            .collect()
    }

    fn rotors_left_to_right(&self) -> impl Iterator<Item = &Rotor> {
        self.fourth
            .iter()
            .chain([&self.left, &self.middle, &self.right])
    }

    /// Returns a human-readable snapshot of the rotor order and windows.
    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            machine_type: self.machine_type,
            rotors: self
                .rotors_left_to_right()
                .map(|rotor| (rotor.name().to_string(), rotor.window_letter().to_char()))
                .collect(),
        }
    }

    /// Returns a configuration that rebuilds this machine in its current
    /// state, including the current rotor positions.
    ///
    /// Components that differ from the table entry of the same name, or
    /// have no table entry, carry their wiring so that
    /// [`Machine::new`] accepts the result.
    pub fn config(&self) -> MachineConfig {
        let slot = |rotor: &Rotor| {
            let spec = rotor.spec();
            let custom = tables::rotor(spec.name()).ok() != Some(spec);
            RotorConfig {
                rotor: spec.name().to_string(),
                ring_setting: rotor.ring_setting(),
                position: rotor.position(),
                wiring: custom.then(|| spec.wiring_string()),
                notches: custom.then(|| spec.notch_string()),
            }
        };
        let reflector = self.reflector.spec();
        let custom_reflector = tables::reflector(reflector.name()).ok() != Some(reflector);
        MachineConfig {
            machine_type: self.machine_type,
            reflector: reflector.name().to_string(),
            reflector_wiring: custom_reflector.then(|| reflector.wiring_string()),
            right: slot(&self.right),
            middle: slot(&self.middle),
            left: slot(&self.left),
            fourth: self.fourth.as_ref().map(slot),
            plugboard: self.plugboard.pairs(),
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.status().fmt(f)
    }
}

/// Rotor identifiers and window letters, left to right.
///
/// Displays as `M3: I(A) -> II(A) -> III(B)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineStatus {
    /// Machine model.
    pub machine_type: MachineType,
    /// `(identifier, window letter)` per rotor, fourth rotor first.
    pub rotors: Vec<(String, char)>,
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.machine_type)?;
        for (i, (name, window)) in self.rotors.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}({})", name, window)?;
        }
        Ok(())
    }
}
