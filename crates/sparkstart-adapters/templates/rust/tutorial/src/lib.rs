//! Game logic for the number guessing tutorial.

use std::cmp::Ordering;

pub const LOW: u32 = 1;
pub const HIGH: u32 = 100;

/// How a guess compares with the secret.
#[derive(Debug, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

pub fn check_guess(guess: u32, secret: u32) -> Hint {
    match guess.cmp(&secret) {
        Ordering::Less => Hint::TooLow,
        Ordering::Greater => Hint::TooHigh,
        Ordering::Equal => Hint::Correct,
    }
}

/// Parse one line of input into a guess within `LOW..=HIGH`.
pub fn parse_guess(input: &str) -> Option<u32> {
    input
        .trim()
        .parse()
        .ok()
        .filter(|n| (LOW..=HIGH).contains(n))
}
