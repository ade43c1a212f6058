//! Keypad input for the calculator.
//!
//! Turns a typed line such as `12+5=` or `c` into the key presses a
//! calculator keypad would produce.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::engine::ExpressionEngine;
use super::token::Operator;

lazy_static! {
    /// Splits input into digit runs, words and single symbols.
    /// Whitespace matches nothing and is skipped.
    static ref KEY_PATTERN: Regex = Regex::new(
        r"(?P<digits>[0-9]+)|(?P<word>[A-Za-z]+)|(?P<symbol>\S)"
    ).unwrap();
}

/// Input that does not map to a key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unrecognized input '{0}'")]
    Unrecognized(String),
}

/// A single press on the calculator keypad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// One or more digits entered together.
    Digits(String),
    Operator(Operator),
    Equals,
    /// Remove the last entry.
    Delete,
    /// Clear the whole expression.
    Clear,
}

impl Key {
    /// Apply this key press to the engine.
    pub fn apply(&self, engine: &mut ExpressionEngine) {
        match self {
            Self::Digits(digits) => engine.append_number(digits),
            Self::Operator(op) => engine.append_operator(*op),
            Self::Equals => engine.append_result(),
            Self::Delete => engine.cancel(false),
            Self::Clear => engine.cancel(true),
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "x" => Some(Self::Operator(Operator::Multiply)),
            "c" | "ac" | "clear" => Some(Self::Clear),
            "del" | "back" | "bs" => Some(Self::Delete),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Equals),
            "<" => Some(Self::Delete),
            _ => Operator::from_symbol(symbol).map(Self::Operator),
        }
    }
}

/// Parse a line of input into key presses.
///
/// The whole line is rejected if any part of it is not a key.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyError> {
    KEY_PATTERN
        .captures_iter(input)
        .map(|caps| {
            if let Some(digits) = caps.name("digits") {
                return Ok(Key::Digits(digits.as_str().to_string()));
            }

            let (fragment, key) = match (caps.name("word"), caps.name("symbol")) {
                (Some(word), _) => (word.as_str(), Key::from_word(word.as_str())),
                (None, Some(symbol)) => (symbol.as_str(), Key::from_symbol(symbol.as_str())),
                (None, None) => ("", None),
            };

            key.ok_or_else(|| KeyError::Unrecognized(fragment.to_string()))
        })
        .collect()
}

/// Check if the input ends with an equals key.
pub fn ends_with_equals(keys: &[Key]) -> bool {
    matches!(keys.last(), Some(Key::Equals))
}
