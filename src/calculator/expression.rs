//! The token sequence edited by the calculator.
//!
//! An expression is never empty: removing its last token snaps it back to the
//! default `0`. Rendering is derived from the tokens on demand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::token::{DEFAULT_VALUE, Operator, Token};

/// Minimum token count for one binary operation (operand, operator, operand).
const MIN_ELEMENTS: usize = 3;

/// Errors from parsing a display string back into an expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseExpressionError {
    #[error("'=' must be followed by a result")]
    MissingResult,

    #[error("unexpected '{token}' at position {position}")]
    Misplaced { token: String, position: usize },
}

/// An ordered sequence of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// Create the default expression holding a single `0`.
    pub fn new() -> Self {
        Self {
            tokens: vec![Token::number(DEFAULT_VALUE)],
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the expression holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Check if the expression is exactly the default value.
    pub fn is_default(&self) -> bool {
        self.tokens.len() == 1 && self.tokens[0].is_default()
    }

    /// Return true if there are enough tokens for a calculation.
    pub fn has_enough_elements(&self) -> bool {
        self.tokens.len() >= MIN_ELEMENTS
    }

    /// Return true if the last token is an operator.
    pub fn last_is_operator(&self) -> bool {
        self.last().is_some_and(Token::is_operator)
    }

    /// Return true if the expression contains a result.
    pub fn has_result(&self) -> bool {
        self.tokens.contains(&Token::Equals)
    }

    /// The tokens before the equals sign.
    pub fn operands(&self) -> &[Token] {
        match self.tokens.iter().position(|t| *t == Token::Equals) {
            Some(idx) => &self.tokens[..idx],
            None => &self.tokens,
        }
    }

    /// The result text, if the expression has been evaluated.
    pub fn result(&self) -> Option<&str> {
        match self.tokens.as_slice() {
            [.., Token::Equals, Token::Result(text)] => Some(text),
            _ => None,
        }
    }

    /// Replace the whole expression with a single number.
    ///
    /// An empty number falls back to the default value.
    pub(crate) fn replace_with_number(&mut self, text: &str) {
        self.tokens.clear();
        if !text.is_empty() {
            self.tokens.push(Token::number(text));
        }
        self.normalize();
    }

    /// Append digits to the trailing number, or start a new one after an operator.
    pub(crate) fn push_digits(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.tokens.last_mut() {
            Some(Token::Number(current)) => current.push_str(text),
            _ => self.tokens.push(Token::number(text)),
        }
    }

    pub(crate) fn push_operator(&mut self, op: Operator) {
        self.tokens.push(Token::Operator(op));
    }

    pub(crate) fn push_result(&mut self, value: String) {
        self.tokens.push(Token::Equals);
        self.tokens.push(Token::Result(value));
    }

    /// Remove the last token without resetting an emptied expression.
    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Remove the last edit unit: a whole operator or one character of a number.
    pub(crate) fn remove_last_entry(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Number(text)) => {
                text.pop();
                if text.is_empty() {
                    self.tokens.pop();
                }
            }
            Some(_) => {
                self.tokens.pop();
            }
            None => {}
        }
        self.normalize();
    }

    /// Reset to the default value.
    pub(crate) fn reset(&mut self) {
        self.tokens.clear();
        self.normalize();
    }

    /// Restore the default value if the expression became empty.
    pub(crate) fn normalize(&mut self) {
        if self.tokens.is_empty() {
            self.tokens.push(Token::number(DEFAULT_VALUE));
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Expression {
    type Err = ParseExpressionError;

    /// Parse a display string such as `"2 + 2 = 4"`.
    ///
    /// Everything after `=` is taken as the result text, so error markers
    /// containing spaces survive the trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut words = s.split_whitespace().enumerate();

        while let Some((position, word)) = words.next() {
            let previous = tokens.last();
            let misplaced = || ParseExpressionError::Misplaced {
                token: word.to_string(),
                position,
            };

            if word == "=" {
                if !matches!(previous, Some(Token::Number(_))) {
                    return Err(misplaced());
                }
                let rest: Vec<&str> = words.by_ref().map(|(_, w)| w).collect();
                if rest.is_empty() {
                    return Err(ParseExpressionError::MissingResult);
                }
                tokens.push(Token::Equals);
                tokens.push(Token::Result(rest.join(" ")));
                break;
            }

            if let Some(op) = Operator::from_symbol(word) {
                if !matches!(previous, Some(Token::Number(_))) {
                    return Err(misplaced());
                }
                tokens.push(Token::Operator(op));
            } else {
                if matches!(previous, Some(Token::Number(_))) {
                    return Err(misplaced());
                }
                tokens.push(Token::number(word));
            }
        }

        let mut expression = Self { tokens };
        expression.normalize();
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Expression {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_expression() {
        let expr = Expression::new();
        assert!(expr.is_default());
        assert!(!expr.is_empty());
        assert_eq!(expr.len(), 1);
        assert_eq!(expr.to_string(), "0");
        assert!(!expr.has_enough_elements());
        assert!(!expr.has_result());
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(parse("3 + 4").to_string(), "3 + 4");
        assert_eq!(parse("12 +").to_string(), "12 + ");
        assert_eq!(parse("2 + 2 = 4").to_string(), "2 + 2 = 4");
    }

    #[test]
    fn test_parse_result_with_spaces() {
        let expr = parse("1 + a = Bad operation");
        assert_eq!(expr.result(), Some("Bad operation"));
        assert_eq!(expr.to_string(), "1 + a = Bad operation");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "+ 2".parse::<Expression>(),
            Err(ParseExpressionError::Misplaced { position: 0, .. })
        ));
        assert!(matches!(
            "2 + + 3".parse::<Expression>(),
            Err(ParseExpressionError::Misplaced { position: 2, .. })
        ));
        assert!(matches!(
            "2 3".parse::<Expression>(),
            Err(ParseExpressionError::Misplaced { position: 1, .. })
        ));
        assert_eq!(
            "2 + 2 =".parse::<Expression>(),
            Err(ParseExpressionError::MissingResult)
        );
    }

    #[test]
    fn test_empty_string_is_default() {
        assert!(parse("   ").is_default());
    }

    #[test]
    fn test_predicates() {
        let expr = parse("12 + 5");
        assert!(expr.has_enough_elements());
        assert!(!expr.last_is_operator());

        let expr = parse("12 x");
        assert!(!expr.has_enough_elements());
        assert!(expr.last_is_operator());

        let expr = parse("6 ÷ 3 = 2");
        assert!(expr.has_result());
        assert_eq!(expr.operands().len(), 3);
        assert_eq!(expr.result(), Some("2"));
    }

    #[test]
    fn test_remove_last_entry() {
        let mut expr = parse("12 + 5");
        expr.remove_last_entry();
        assert_eq!(expr.to_string(), "12 + ");
        expr.remove_last_entry();
        assert_eq!(expr.to_string(), "12");
        expr.remove_last_entry();
        assert_eq!(expr.to_string(), "1");
        expr.remove_last_entry();
        assert!(expr.is_default());
    }

    #[test]
    fn test_push_digits() {
        let mut expr = parse("12 +");
        expr.push_digits("3");
        expr.push_digits("4");
        assert_eq!(expr.tokens().last(), Some(&Token::number("34")));
        assert_eq!(expr.len(), 3);
    }
}
