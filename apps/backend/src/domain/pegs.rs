//! Black/white peg feedback for a guess.

use serde::Serialize;

use super::code::{Code, CODE_LENGTH};

/// Feedback for one guess: `black` digits in the right position, `white`
/// digits present elsewhere in the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pegs {
    pub black: u8,
    pub white: u8,
}

impl Pegs {
    /// Every position matched.
    pub fn is_solved(&self) -> bool {
        self.black as usize == CODE_LENGTH
    }
}

/// Score `guess` against `secret`.
///
/// Exact matches are taken first and consume both positions. Each
/// remaining guess position then claims the first unconsumed secret
/// position holding the same digit, so a secret digit is never counted
/// twice.
pub fn evaluate(secret: &Code, guess: &Code) -> Pegs {
    let secret = secret.digits();
    let guess = guess.digits();

    let mut used_secret = [false; CODE_LENGTH];
    let mut used_guess = [false; CODE_LENGTH];
    let mut pegs = Pegs::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            pegs.black += 1;
            used_secret[i] = true;
            used_guess[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if used_guess[i] {
            continue;
        }
        for j in 0..CODE_LENGTH {
            if !used_secret[j] && guess[i] == secret[j] {
                pegs.white += 1;
                used_secret[j] = true;
                break;
            }
        }
    }

    pegs
}
