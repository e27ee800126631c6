//! The 26-letter alphabet shared by every component of the machine.
//!
//! Letters are held as 0-based indices (`A = 0` .. `Z = 25`). The 1-based
//! convention operators use for ring settings and positions ("A = 1") only
//! appears at the configuration boundary, see [`Letter::from_number`].

use std::fmt;

use crate::error::{EnigmaError, Result};

/// Number of letters on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// The supported plaintext alphabet, in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single letter of the machine alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// `A`.
    pub const A: Letter = Letter(0);

    /// Builds a letter from a 0-based index, wrapping modulo 26.
    pub const fn from_index(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Builds a letter from a 1-based number ("A = 1"), wrapping modulo 26.
    ///
    /// Zero and negative values wrap backwards, so `0` is `Z` and `27` is `A`.
    pub fn from_number(number: i32) -> Self {
        let len = ALPHABET_LEN as i32;
        Letter(((number.rem_euclid(len) + len - 1) % len) as u8)
    }

    /// Builds a letter from a character, ignoring case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedCharacter`] for anything outside A-Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').unwrap().to_char(), 'Q');
    /// assert!(Letter::from_char('7').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        if is_supported(c) {
            Ok(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(EnigmaError::UnsupportedCharacter(c))
        }
    }

    /// Returns the 0-based index of the letter.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 1-based number of the letter ("A = 1").
    pub const fn number(self) -> i32 {
        self.0 as i32 + 1
    }

    /// Returns the uppercase character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Shifts the letter forward by `offset` places, wrapping around `Z`.
    pub const fn shift(self, offset: usize) -> Self {
        Letter::from_index(self.0 as usize + offset % ALPHABET_LEN)
    }

    /// Shifts the letter backward by `offset` places, wrapping around `A`.
    pub const fn unshift(self, offset: usize) -> Self {
        Letter::from_index(self.0 as usize + ALPHABET_LEN - offset % ALPHABET_LEN)
    }

    /// Iterates over all 26 letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(c: char) -> Result<Self> {
        Letter::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

/// Returns `true` if `c` is a letter the machine can encode (A-Z, any case).
pub fn is_supported(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Parses a 26-letter wiring string into a table of 0-based indices.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] unless `wiring` contains every
/// letter A-Z exactly once.
pub fn parse_permutation(wiring: &str) -> Result<[u8; ALPHABET_LEN]> {
    let invalid = || EnigmaError::InvalidWiring(wiring.to_string());
    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    let mut count = 0;
    for c in wiring.chars() {
        if count == ALPHABET_LEN {
            return Err(invalid());
        }
        let letter = Letter::from_char(c).map_err(|_| invalid())?;
        if seen[letter.index()] {
            return Err(invalid());
        }
        seen[letter.index()] = true;
        table[count] = letter.0;
        count += 1;
    }
    if count != ALPHABET_LEN {
        return Err(invalid());
    }
    Ok(table)
}

/// Computes the inverse of a permutation table.
///
/// `table` must be a permutation of `0..26`; the static tables are checked
/// by tests and custom wirings by [`parse_permutation`].
pub const fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}
