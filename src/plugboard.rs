//! Plugboard: swaps up to 13 pairs of letters on the way in and out.

use tracing::debug;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};

/// Maximum number of cables: every letter used exactly once.
pub const MAX_PAIRS: usize = ALPHABET_LEN / 2;

/// Symmetric letter substitution built from disjoint pairs.
///
/// Letters that are not cabled map to themselves. The mapping is its own
/// inverse, so the same plugboard is applied on entry and on exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [u8; ALPHABET_LEN],
    pairs: Vec<(Letter, Letter)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables.
    pub fn empty() -> Self {
        let mut wiring = [0u8; ALPHABET_LEN];
        for (i, slot) in wiring.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            wiring,
            pairs: Vec::new(),
        }
    }

    /// Builds a plugboard from two-letter pairs such as `"AB"`.
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedPair`] if a pair is not exactly two characters.
    /// - [`EnigmaError::NonAlphabeticPair`] if a pair contains a non-letter.
    /// - [`EnigmaError::SelfPairing`] if both sides are the same letter.
    /// - [`EnigmaError::LetterAlreadyPaired`] if a letter is used twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Letter, Plugboard};
    ///
    /// let plugboard = Plugboard::new(["AB", "cd"]).unwrap();
    /// assert_eq!(plugboard.map(Letter::A).to_char(), 'B');
    /// assert!(Plugboard::new(["AB", "BC"]).is_err());
    /// ```
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut plugboard = Plugboard::empty();
        for pair in pairs {
            let pair = pair.as_ref();
            let mut chars = pair.chars();
            let (a, b) = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => return Err(EnigmaError::MalformedPair(pair.to_string())),
            };
            let a = Letter::from_char(a)
                .map_err(|_| EnigmaError::NonAlphabeticPair(pair.to_string()))?;
            let b = Letter::from_char(b)
                .map_err(|_| EnigmaError::NonAlphabeticPair(pair.to_string()))?;
            plugboard.connect(a, b)?;
        }
        debug!(pairs = plugboard.pairs.len(), "plugboard wired");
        Ok(plugboard)
    }

    fn connect(&mut self, a: Letter, b: Letter) -> Result<()> {
        if a == b {
            return Err(EnigmaError::SelfPairing(a.to_char()));
        }
        for letter in [a, b] {
            if self.map(letter) != letter {
                return Err(EnigmaError::LetterAlreadyPaired(letter.to_char()));
            }
        }
        self.wiring[a.index()] = b.index() as u8;
        self.wiring[b.index()] = a.index() as u8;
        self.pairs.push((a, b));
        Ok(())
    }

    /// Maps a letter through the plugboard.
    pub fn map(&self, letter: Letter) -> Letter {
        Letter::from_index(self.wiring[letter.index()] as usize)
    }

    /// Returns the number of cables in use.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no cables are in use.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs in the order they were cabled, as two-letter strings.
    pub fn pairs(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|&(a, b)| [a.to_char(), b.to_char()].iter().collect())
            .collect()
    }
}
