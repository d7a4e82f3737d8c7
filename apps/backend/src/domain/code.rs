//! Two-digit codes: the round's secret and the guesses made against it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Number of positions in a code.
pub const CODE_LENGTH: usize = 2;

/// Digits are drawn from `0..=MAX_DIGIT`.
pub const MAX_DIGIT: u8 = 9;

/// A sequence of [`CODE_LENGTH`] decimal digits.
///
/// Serialized as a plain array (`[4, 7]`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Build a code from digits, rejecting anything above [`MAX_DIGIT`].
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, DomainError> {
        if digits.iter().any(|d| *d > MAX_DIGIT) {
            return Err(DomainError::invalid_guess("guess must be digits 0-9"));
        }
        Ok(Self(digits))
    }

    /// Draw each position independently and uniformly from `0..=9`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for d in digits.iter_mut() {
            *d = rng.random_range(0..=MAX_DIGIT);
        }
        Self(digits)
    }

    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.0
    }
}

impl FromStr for Code {
    type Err = DomainError;

    /// Parse a guess: exactly two characters, each a decimal digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODE_LENGTH {
            return Err(DomainError::invalid_guess(format!(
                "guess must be exactly {CODE_LENGTH} digits"
            )));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, c) in digits.iter_mut().zip(chars) {
            let d = c
                .to_digit(10)
                .ok_or_else(|| DomainError::invalid_guess("guess must be digits 0-9"))?;
            *slot = d as u8;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
