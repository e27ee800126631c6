//! Rotor: a rotating substitution wheel with a ring setting and notches.
//!
//! The signal enters a rotor through the contact under the current window
//! letter. Rotating the rotor shifts every contact by one place, and the
//! ring setting shifts the wiring core against the letter ring, so both
//! offsets are applied before the wiring lookup and undone after it:
//!
//! ```text
//! offset  = position - ring_setting            (mod 26)
//! forward = wiring[input + offset] - offset    (mod 26)
//! reverse = inverse[input + offset] - offset   (mod 26)
//! ```

use std::borrow::Cow;

use crate::alphabet::{self, invert, Letter, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};
use crate::tables;

/// Immutable description of a rotor type: its wiring and notch letters.
///
/// The historical rotors live in [`tables::ROTORS`]; custom rotors can be
/// built with [`RotorSpec::custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    name: Cow<'static, str>,
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    /// Bit `i` set when letter `i` is a notch position.
    notches: u32,
}

impl RotorSpec {
    /// Builds a table entry from uppercase ASCII literals.
    pub(crate) const fn historical(
        name: &'static str,
        wiring: &[u8; ALPHABET_LEN],
        notches: &[u8],
    ) -> Self {
        let wiring = tables::letters(wiring);
        let mut mask = 0u32;
        let mut i = 0;
        while i < notches.len() {
            assert!(notches[i].is_ascii_uppercase(), "notch literal must be A-Z");
            mask |= 1u32 << (notches[i] - b'A') as u32;
            i += 1;
        }
        RotorSpec {
            name: Cow::Borrowed(name),
            inverse: invert(&wiring),
            wiring,
            notches: mask,
        }
    }

    /// Builds a custom rotor type.
    ///
    /// # Parameters
    /// - `name`: Identifier reported by status and configuration accessors.
    /// - `wiring`: 26 letters, the output for contacts A..Z.
    /// - `notches`: Letters at which this rotor carries its left neighbour,
    ///   possibly empty.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not a
    /// permutation of A-Z, or [`EnigmaError::InvalidNotch`] for a notch
    /// outside A-Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::RotorSpec;
    ///
    /// let spec = RotorSpec::custom("shift", "BCDEFGHIJKLMNOPQRSTUVWXYZA", "Z").unwrap();
    /// assert_eq!(spec.name(), "shift");
    /// assert!(RotorSpec::custom("bad", "ABC", "").is_err());
    /// ```
    pub fn custom(name: impl Into<String>, wiring: &str, notches: &str) -> Result<Self> {
        let wiring = alphabet::parse_permutation(wiring)?;
        let mut mask = 0u32;
        for c in notches.chars() {
            let letter = Letter::from_char(c).map_err(|_| EnigmaError::InvalidNotch(c))?;
            mask |= 1u32 << letter.index();
        }
        Ok(RotorSpec {
            name: Cow::Owned(name.into()),
            inverse: invert(&wiring),
            wiring,
            notches: mask,
        })
    }

    /// Returns the rotor identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passes a letter through the bare wiring, right to left.
    pub fn wire(&self, letter: Letter) -> Letter {
        Letter::from_index(self.wiring[letter.index()] as usize)
    }

    /// Passes a letter through the bare wiring, left to right.
    pub fn unwire(&self, letter: Letter) -> Letter {
        Letter::from_index(self.inverse[letter.index()] as usize)
    }

    /// Returns `true` if `letter` is one of this rotor's notch positions.
    pub fn has_notch(&self, letter: Letter) -> bool {
        self.notches & (1u32 << letter.index()) != 0
    }

    /// Iterates over the notch positions in alphabet order.
    pub fn notches(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&letter| self.has_notch(letter))
    }

    /// Returns the wiring as 26 letters, the form [`RotorSpec::custom`] takes.
    pub fn wiring_string(&self) -> String {
        Letter::all().map(|letter| self.wire(letter).to_char()).collect()
    }

    /// Returns the notch letters in alphabet order, e.g. `"MZ"`.
    pub fn notch_string(&self) -> String {
        self.notches().map(Letter::to_char).collect()
    }
}

/// A rotor mounted in the machine: a [`RotorSpec`] plus its ring setting and
/// current position.
///
/// Ring setting and position are taken 1-based ("A = 1") and wrap modulo
/// 26, so `27` means `A` and `0` means `Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: RotorSpec,
    ring_setting: Letter,
    position: Letter,
}

impl Rotor {
    /// Mounts a rotor with the given ring setting and starting position.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{tables, Letter, Rotor};
    ///
    /// let rotor = Rotor::new(tables::rotor("I").unwrap().clone(), 1, 1);
    /// let a = Letter::A;
    /// assert_eq!(rotor.map_forward(a).to_char(), 'E');
    /// assert_eq!(rotor.map_reverse(rotor.map_forward(a)), a);
    /// ```
    pub fn new(spec: RotorSpec, ring_setting: i32, position: i32) -> Self {
        Rotor {
            spec,
            ring_setting: Letter::from_number(ring_setting),
            position: Letter::from_number(position),
        }
    }

    /// Mounts a historical rotor by identifier.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] if `name` is not in
    /// [`tables::ROTORS`].
    pub fn from_table(name: &str, ring_setting: i32, position: i32) -> Result<Self> {
        let spec = tables::rotor(name)?;
        Ok(Rotor::new(spec.clone(), ring_setting, position))
    }

    /// Returns the rotor type.
    pub fn spec(&self) -> &RotorSpec {
        &self.spec
    }

    /// Returns the rotor identifier.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Returns the ring setting, 1-based.
    pub fn ring_setting(&self) -> i32 {
        self.ring_setting.number()
    }

    /// Returns the current position, 1-based.
    pub fn position(&self) -> i32 {
        self.position.number()
    }

    /// Returns the letter currently visible in the machine window.
    pub fn window_letter(&self) -> Letter {
        self.position
    }

    fn offset(&self) -> usize {
        (self.position.index() + ALPHABET_LEN - self.ring_setting.index()) % ALPHABET_LEN
    }

    /// Maps a letter travelling towards the reflector.
    pub fn map_forward(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.spec.wire(letter.shift(offset)).unshift(offset)
    }

    /// Maps a letter travelling back from the reflector.
    ///
    /// Exact inverse of [`map_forward`](Self::map_forward) for the same
    /// position and ring setting.
    pub fn map_reverse(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.spec.unwire(letter.shift(offset)).unshift(offset)
    }

    /// Advances the rotor one position, wrapping `Z` to `A`.
    pub fn step_up(&mut self) {
        self.position = self.position.shift(1);
    }

    /// Moves the rotor to a 1-based position, wrapping modulo 26.
    pub fn set_position(&mut self, position: i32) {
        self.position = Letter::from_number(position);
    }

    /// Turns the rotor back one position, wrapping `A` to `Z`.
    pub fn step_down(&mut self) {
        self.position = self.position.unshift(1);
    }

    /// Returns `true` if the current position is one of the notches.
    pub fn is_on_notch(&self) -> bool {
        self.spec.has_notch(self.position)
    }
}
