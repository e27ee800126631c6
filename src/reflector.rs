//! Reflector: the fixed wheel that sends the signal back through the rotors.

use std::borrow::Cow;

use crate::alphabet::{self, Letter, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};
use crate::tables;

/// Immutable reflector wiring.
///
/// Every reflector is a fixed-point-free involution: it swaps letters in 13
/// pairs, which is what makes the whole machine self-reciprocal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectorSpec {
    name: Cow<'static, str>,
    wiring: [u8; ALPHABET_LEN],
}

impl ReflectorSpec {
    pub(crate) const fn historical(name: &'static str, wiring: &[u8; ALPHABET_LEN]) -> Self {
        ReflectorSpec {
            name: Cow::Borrowed(name),
            wiring: tables::letters(wiring),
        }
    }

    /// Builds a custom reflector from 26 wiring letters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not a
    /// permutation of A-Z, or [`EnigmaError::NonReciprocalReflector`] if
    /// some letter maps to itself or the mapping is not symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::ReflectorSpec;
    ///
    /// assert!(ReflectorSpec::custom("swap", "BADCFEHGJILKNMPORQTSVUXWZY").is_ok());
    /// assert!(ReflectorSpec::custom("rot1", "BCDEFGHIJKLMNOPQRSTUVWXYZA").is_err());
    /// ```
    pub fn custom(name: impl Into<String>, wiring: &str) -> Result<Self> {
        let table = alphabet::parse_permutation(wiring)?;
        let reciprocal = table
            .iter()
            .enumerate()
            .all(|(i, &out)| out as usize != i && table[out as usize] as usize == i);
        if !reciprocal {
            return Err(EnigmaError::NonReciprocalReflector(wiring.to_string()));
        }
        Ok(ReflectorSpec {
            name: Cow::Owned(name.into()),
            wiring: table,
        })
    }

    /// Returns the reflector identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passes a letter through the wiring.
    pub fn wire(&self, letter: Letter) -> Letter {
        Letter::from_index(self.wiring[letter.index()] as usize)
    }

    /// Returns the wiring as 26 letters, the form [`ReflectorSpec::custom`]
    /// takes.
    pub fn wiring_string(&self) -> String {
        Letter::all().map(|letter| self.wire(letter).to_char()).collect()
    }
}

/// The reflector mounted in a machine. Stateless: it never rotates and has
/// no ring setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    spec: ReflectorSpec,
}

impl Reflector {
    /// Mounts a reflector.
    pub fn new(spec: ReflectorSpec) -> Self {
        Reflector { spec }
    }

    /// Mounts a historical reflector by identifier.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] if `name` is not in
    /// [`tables::REFLECTORS`].
    pub fn from_table(name: &str) -> Result<Self> {
        Ok(Reflector::new(tables::reflector(name)?.clone()))
    }

    /// Returns the reflector type.
    pub fn spec(&self) -> &ReflectorSpec {
        &self.spec
    }

    /// Returns the reflector identifier.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Reflects a letter.
    pub fn map(&self, letter: Letter) -> Letter {
        self.spec.wire(letter)
    }
}
