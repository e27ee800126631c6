//! Error types for the enigma-machine library.

use thiserror::Error;

/// Errors produced by the enigma-machine library.
///
/// Every variant except [`UnsupportedCharacter`](EnigmaError::UnsupportedCharacter)
/// is a configuration error raised while a component is being built; once a
/// [`Machine`](crate::Machine) exists, encoding cannot fail on letters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// An M4 machine was configured without its fourth rotor.
    #[error("M4 machine requires a fourth rotor")]
    MissingFourthRotor,

    /// An M3 machine was configured with a fourth rotor.
    #[error("M3 machine does not take a fourth rotor (got '{0}')")]
    UnexpectedFourthRotor(String),

    /// No rotor with this identifier exists in the rotor table.
    #[error("unknown rotor '{0}'")]
    UnknownRotor(String),

    /// No reflector with this identifier exists in the reflector table.
    #[error("unknown reflector '{0}'")]
    UnknownReflector(String),

    /// A plugboard pair is not exactly two characters.
    #[error("plugboard pair '{0}' must be exactly two letters")]
    MalformedPair(String),

    /// A plugboard pair contains a character outside A-Z.
    #[error("plugboard pair '{0}' contains a non-alphabetic character")]
    NonAlphabeticPair(String),

    /// A letter appears in more than one plugboard pair.
    #[error("plugboard letter '{0}' is already paired")]
    LetterAlreadyPaired(char),

    /// A plugboard pair connects a letter to itself.
    #[error("plugboard letter '{0}' cannot be paired with itself")]
    SelfPairing(char),

    /// A custom wiring is not a permutation of A-Z.
    #[error("wiring '{0}' is not a permutation of A-Z")]
    InvalidWiring(String),

    /// A custom reflector wiring is not a fixed-point-free involution.
    #[error("reflector wiring '{0}' is not a fixed-point-free involution")]
    NonReciprocalReflector(String),

    /// A custom notch letter is outside A-Z.
    #[error("notch '{0}' is not a letter A-Z")]
    InvalidNotch(char),

    /// A character outside A-Z was passed to a single-letter operation.
    #[error("character '{0}' is not supported by the machine")]
    UnsupportedCharacter(char),
}

impl EnigmaError {
    /// Returns `true` for errors raised while validating a configuration.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, EnigmaError::UnsupportedCharacter(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;
