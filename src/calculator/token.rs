//! Tokens that make up a calculator expression.

use std::fmt;

/// Default value of an expression with nothing entered yet.
pub const DEFAULT_VALUE: &str = "0";

/// Binary operators available on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol used when rendering this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator from its display symbol or a common alias.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "x" | "X" | "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Whether this operator belongs to the tier evaluated first.
    pub fn binds_tighter(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Apply the operator to two operands.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single element of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Decimal text, parsed only when the expression is evaluated.
    Number(String),
    /// A binary operator between two numbers.
    Operator(Operator),
    /// Marks the end of the operands; always followed by a `Result`.
    Equals,
    /// The value (or error marker) produced by evaluation.
    Result(String),
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Get the number text if this is a number token.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::Number(text) => Some(text),
            _ => None,
        }
    }

    /// Get the operator if this is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Check if this token is the untouched default number.
    pub fn is_default(&self) -> bool {
        self.as_number() == Some(DEFAULT_VALUE)
    }
}

impl fmt::Display for Token {
    /// Operators and the equals sign carry their own padding so that
    /// concatenating tokens gives the display string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Result(text) => f.write_str(text),
            Self::Operator(op) => write!(f, " {} ", op),
            Self::Equals => f.write_str(" = "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_symbol_aliases() {
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("%"), None);
    }

    #[test]
    fn test_token_padding() {
        assert_eq!(Token::number("12").to_string(), "12");
        assert_eq!(Token::Operator(Operator::Divide).to_string(), " ÷ ");
        assert_eq!(Token::Equals.to_string(), " = ");
    }

    #[test]
    fn test_tiers() {
        assert!(Operator::Multiply.binds_tighter());
        assert!(Operator::Divide.binds_tighter());
        assert!(!Operator::Add.binds_tighter());
        assert!(!Operator::Subtract.binds_tighter());
    }
}
