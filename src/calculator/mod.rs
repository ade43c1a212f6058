//! Calculator module: the expression engine and its input.
//!
//! This module provides functionality to:
//! - Edit an expression key by key with `ExpressionEngine`
//! - Evaluate expressions with two-tier precedence
//! - Parse typed input into keypad presses
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod evaluation;
mod expression;
mod keypad;
mod token;

#[cfg(test)]
mod proptests;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{ExpressionChanged, ExpressionEngine};
pub use evaluation::{EvalError, evaluate, format_number, format_result};
pub use expression::{Expression, ParseExpressionError};
pub use keypad::{Key, KeyError, ends_with_equals, parse_keys};
pub use token::{DEFAULT_VALUE, Operator, Token};
