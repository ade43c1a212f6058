//! Two-tier expression evaluation.
//!
//! Multiplication and division are reduced first, wherever they occur, then
//! addition and subtraction from left to right. Each step replaces an
//! `operand operator operand` triple with the formatted intermediate result.

use thiserror::Error;
use tracing::trace;

use super::token::{Operator, Token};

/// Evaluation failures. The display text is what the calculator shows in
/// place of a result.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// An operator is missing or has a non-numeric neighbour.
    #[error("Bad operation")]
    BadOperation,

    /// The arithmetic produced infinity or NaN (division by zero, overflow).
    #[error("Error")]
    Arithmetic,
}

/// A single binary operation taken out of the expression.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Operation {
    left: f64,
    operator: Operator,
    right: f64,
}

impl Operation {
    /// Compute the operation, rejecting infinite and NaN results.
    fn calculate(self) -> Result<f64, EvalError> {
        let value = self.operator.apply(self.left, self.right);
        if value.is_nan() || value.is_infinite() {
            return Err(EvalError::Arithmetic);
        }
        Ok(value)
    }
}

/// Evaluate a sequence of number and operator tokens to a result string.
pub fn evaluate(tokens: &[Token]) -> Result<String, EvalError> {
    let mut elements = tokens.to_vec();
    let mut last_value = None;

    while elements.len() > 1 {
        let index = operator_index(&elements);
        let operation = operation_at(&elements, index)?;
        let value = operation.calculate()?;
        trace!(
            left = operation.left,
            operator = %operation.operator,
            right = operation.right,
            result = value,
            "Reduced operation"
        );
        reduce(&mut elements, index, format_number(value));
        last_value = Some(value);
    }

    match (elements.pop(), last_value) {
        (Some(Token::Number(_)), Some(value)) => Ok(format_result(value)),
        (Some(Token::Number(text)), None) => Ok(text),
        _ => Err(EvalError::BadOperation),
    }
}

/// Pick the index of the next operator to reduce.
///
/// The first multiplication or division wins; otherwise the first operator,
/// which sits at index 1 in a well-formed sequence.
fn operator_index(elements: &[Token]) -> usize {
    elements
        .iter()
        .position(|t| t.as_operator().is_some_and(Operator::binds_tighter))
        .unwrap_or(1)
}

/// Read the operation centred on `index`.
fn operation_at(elements: &[Token], index: usize) -> Result<Operation, EvalError> {
    let operator = elements
        .get(index)
        .and_then(Token::as_operator)
        .ok_or(EvalError::BadOperation)?;

    let left = index
        .checked_sub(1)
        .and_then(|i| elements.get(i))
        .ok_or(EvalError::BadOperation)
        .and_then(parse_operand)?;
    let right = elements
        .get(index + 1)
        .ok_or(EvalError::BadOperation)
        .and_then(parse_operand)?;

    Ok(Operation {
        left,
        operator,
        right,
    })
}

fn parse_operand(token: &Token) -> Result<f64, EvalError> {
    token
        .as_number()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or(EvalError::BadOperation)
}

/// Replace the operation at `index` with its result.
fn reduce(elements: &mut Vec<Token>, index: usize, result: String) {
    elements.splice(index - 1..=index + 1, [Token::Number(result)]);
}

/// Significant digits kept in a displayed result.
const RESULT_DIGITS: usize = 15;

/// Format a number as an integer when it is integral, as its shortest
/// round-trip decimal otherwise.
///
/// Intermediate results use this form so that parsing them back loses nothing.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        if value.abs() < 1e15 {
            return format!("{}", value as i64);
        }
        return format!("{:.0}", value);
    }

    value.to_string()
}

/// Format the final result of an evaluation.
///
/// The value is rounded to 15 significant digits first, which drops binary
/// noise such as the tail of `0.1 + 0.2` and keeps results like
/// `1.00000000001` intact.
pub fn format_result(value: f64) -> String {
    let rounded = format!("{:.*e}", RESULT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    format_number(rounded)
}
