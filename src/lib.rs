//! zcalc: a keypad-style calculator.
//!
//! The heart of the crate is [`calculator::ExpressionEngine`], which edits an
//! expression one key at a time and evaluates it with multiplication and
//! division taking priority over addition and subtraction. The `ui` module
//! wraps it in a terminal front-end.

pub mod calculator;
pub mod config;
pub mod items;
pub mod logging;
pub mod ui;
