//! Historical wiring tables for the M3/M4 rotors and reflectors.
//!
//! The wirings are reproduced letter for letter from the naval machine
//! documentation; machine output only matches historical traffic if these
//! are bit-exact. Entry `i` of a wiring is the letter the contact for
//! letter `i` is wired to.

use crate::error::{EnigmaError, Result};
use crate::reflector::ReflectorSpec;
use crate::rotor::RotorSpec;

/// Rotors I to VIII plus the M4 Greek rotors beta (`b`) and gamma (`g`).
///
/// | Rotor | Notch |
/// |-------|-------|
/// | I     | Q     |
/// | II    | E     |
/// | III   | V     |
/// | IV    | J     |
/// | V     | Z     |
/// | VI    | Z, M  |
/// | VII   | Z, M  |
/// | VIII  | Z, M  |
/// | b, g  | none  |
#[rustfmt::skip]
pub static ROTORS: [RotorSpec; 10] = [
    RotorSpec::historical("I",    b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b"Q"),
    RotorSpec::historical("II",   b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b"E"),
    RotorSpec::historical("III",  b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b"V"),
    RotorSpec::historical("IV",   b"ESOVPZJAYQUIRHXLNFTGKDCMWB", b"J"),
    RotorSpec::historical("V",    b"VZBRGITYUPSDNHLXAWMJQOFECK", b"Z"),
    RotorSpec::historical("VI",   b"JPGVOUMFYQBENHZRDKASXLICTW", b"ZM"),
    RotorSpec::historical("VII",  b"NZJHGRCXMYSWBOUFAIVLPEKQDT", b"ZM"),
    RotorSpec::historical("VIII", b"FKQHTLXOCBJSPDZRAMEWNIUYGV", b"ZM"),
    RotorSpec::historical("b",    b"LEYJVCNIXWPBQMDRTAKZGFUHOS", b""),
    RotorSpec::historical("g",    b"FSOKANUERHMBTIYCWLQPZXVGJD", b""),
];

/// Wide reflectors B and C (M3) and the thin reflectors used beside the
/// fourth rotor of the M4.
#[rustfmt::skip]
pub static REFLECTORS: [ReflectorSpec; 4] = [
    ReflectorSpec::historical("B",      b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ReflectorSpec::historical("C",      b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    ReflectorSpec::historical("b_thin", b"ENKQAUYWJICOPBLMDXZVFTHRGS"),
    ReflectorSpec::historical("c_thin", b"RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
];

/// Looks up a rotor by its historical identifier.
///
/// Identifiers are case-sensitive: `"b"` is the beta rotor, `"B"` is not a
/// rotor at all.
///
/// # Errors
/// Returns [`EnigmaError::UnknownRotor`] if no rotor has that name.
pub fn rotor(name: &str) -> Result<&'static RotorSpec> {
    ROTORS
        .iter()
        .find(|spec| spec.name() == name)
        .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))
}

/// Looks up a reflector by its historical identifier.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflector`] if no reflector has that name.
pub fn reflector(name: &str) -> Result<&'static ReflectorSpec> {
    REFLECTORS
        .iter()
        .find(|spec| spec.name() == name)
        .ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))
}

/// Identifiers of every rotor in [`ROTORS`], in table order.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|spec| spec.name())
}

/// Identifiers of every reflector in [`REFLECTORS`], in table order.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|spec| spec.name())
}

/// Converts an uppercase ASCII wiring literal to 0-based indices.
///
/// Only used on the literals above; a character outside A-Z fails const
/// evaluation.
pub(crate) const fn letters(wiring: &[u8; 26]) -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        assert!(wiring[i].is_ascii_uppercase(), "wiring literal must be A-Z");
        table[i] = wiring[i] - b'A';
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Letter, ALPHABET_LEN};

    #[test]
    fn test_rotor_wirings_are_permutations() {
        for spec in ROTORS.iter() {
            let mut seen = [false; ALPHABET_LEN];
            for letter in Letter::all() {
                let out = spec.wire(letter).index();
                assert!(!seen[out], "rotor {} maps two contacts to {}", spec.name(), out);
                seen[out] = true;
            }
        }
    }

    #[test]
    fn test_rotor_inverse_tables() {
        for spec in ROTORS.iter() {
            for letter in Letter::all() {
                assert_eq!(spec.unwire(spec.wire(letter)), letter, "rotor {}", spec.name());
            }
        }
    }

    #[test]
    fn test_reflectors_are_fixed_point_free_involutions() {
        for spec in REFLECTORS.iter() {
            for letter in Letter::all() {
                let out = spec.wire(letter);
                assert_ne!(out, letter, "reflector {} has a fixed point", spec.name());
                assert_eq!(spec.wire(out), letter, "reflector {}", spec.name());
            }
        }
    }

    #[test]
    fn test_lookup_known_names() {
        for name in ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "b", "g"] {
            assert_eq!(rotor(name).unwrap().name(), name);
        }
        for name in ["B", "C", "b_thin", "c_thin"] {
            assert_eq!(reflector(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_lookup_unknown_names() {
        assert_eq!(rotor("IX"), Err(EnigmaError::UnknownRotor("IX".to_string())));
        assert_eq!(rotor("i").unwrap_err(), EnigmaError::UnknownRotor("i".to_string()));
        assert_eq!(
            reflector("A"),
            Err(EnigmaError::UnknownReflector("A".to_string()))
        );
    }

    #[test]
    fn test_notch_counts() {
        let counts: Vec<usize> = ROTORS.iter().map(|spec| spec.notches().count()).collect();
        assert_eq!(counts, vec![1, 1, 1, 1, 1, 2, 2, 2, 0, 0]);
        let notches: String = rotor("VI").unwrap().notches().map(char::from).collect();
        assert_eq!(notches, "MZ");
    }

    #[test]
    fn test_first_contacts_match_literals() {
        assert_eq!(rotor("I").unwrap().wire(Letter::A).to_char(), 'E');
        assert_eq!(rotor("g").unwrap().wire(Letter::A).to_char(), 'F');
        assert_eq!(reflector("c_thin").unwrap().wire(Letter::A).to_char(), 'R');
    }

    #[test]
    fn test_names_listed_in_order() {
        assert_eq!(rotor_names().count(), 10);
        assert_eq!(
            reflector_names().collect::<Vec<_>>(),
            vec!["B", "C", "b_thin", "c_thin"]
        );
    }
}
