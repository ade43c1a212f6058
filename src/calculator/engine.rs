//! The calculator's expression state machine.
//!
//! Every edit mutates the token sequence in place and then notifies the
//! registered observer, if any. Edits never fail: input that cannot apply to
//! the current state is either absorbed (an operator replacing an operator) or
//! ignored (equals on an incomplete expression).

use std::sync::Arc;

use tracing::debug;

use super::evaluation::evaluate;
use super::expression::Expression;
use super::token::{DEFAULT_VALUE, Operator, Token};

/// Zero-payload signal sent after the expression changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpressionChanged;

type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Owns the current expression and applies keypad edits to it.
pub struct ExpressionEngine {
    expression: Expression,
    on_change: Option<ChangeCallback>,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Create an engine holding the default expression and no observer.
    pub fn new() -> Self {
        Self {
            expression: Expression::new(),
            on_change: None,
        }
    }

    /// Set the callback for when the expression changes.
    ///
    /// Replaces any previously registered observer.
    pub fn set_on_change(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_change = Some(Arc::new(callback));
    }

    /// Register a channel observer and return its receiving end.
    ///
    /// Replaces any previously registered observer. Notifications sent after
    /// the receiver is dropped are discarded.
    pub fn subscribe(&mut self) -> flume::Receiver<ExpressionChanged> {
        let (tx, rx) = flume::unbounded();
        self.set_on_change(move || {
            let _ = tx.send(ExpressionChanged);
        });
        rx
    }

    /// Remove the registered observer.
    pub fn clear_observer(&mut self) {
        self.on_change = None;
    }

    // Accessors for rendering/testing

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn tokens(&self) -> &[Token] {
        self.expression.tokens()
    }

    /// The display string, e.g. `"12 + 5"` or `"2 + 2 = 4"`.
    pub fn display(&self) -> String {
        self.expression.to_string()
    }

    pub fn result(&self) -> Option<&str> {
        self.expression.result()
    }

    /// Check if the expression holds an error marker instead of a value.
    pub fn is_error(&self) -> bool {
        self.result().is_some_and(|r| !is_numeric(r))
    }

    pub fn has_enough_elements(&self) -> bool {
        self.expression.has_enough_elements()
    }

    pub fn last_is_operator(&self) -> bool {
        self.expression.last_is_operator()
    }

    pub fn has_result(&self) -> bool {
        self.expression.has_result()
    }

    /// Add a digit or digit group to the expression.
    ///
    /// After a result, or on the untouched default, the digits start a new
    /// expression. A lone trailing `0` is replaced instead of extended.
    pub fn append_number(&mut self, text: &str) {
        if text.is_empty() {
            // Nothing to add
        } else if self.expression.has_result() || self.expression.is_default() {
            self.expression.replace_with_number(text);
        } else {
            if self.expression.last().is_some_and(Token::is_default) {
                self.expression.pop();
            }
            self.expression.push_digits(text);
        }

        debug!(digits = text, expression = %self.expression, "Appended number");
        self.refresh();
    }

    /// Add an operator to the expression.
    ///
    /// After a result the calculation continues from the result value. An
    /// operator directly after another one replaces it.
    pub fn append_operator(&mut self, operator: Operator) {
        if self.expression.has_result() {
            let value = self
                .expression
                .result()
                .filter(|r| is_numeric(r))
                .unwrap_or(DEFAULT_VALUE)
                .to_string();
            self.expression.replace_with_number(&value);
        } else if self.expression.last_is_operator() {
            self.expression.pop();
        }
        self.expression.push_operator(operator);

        debug!(%operator, expression = %self.expression, "Appended operator");
        self.refresh();
    }

    /// Evaluate the expression and append `= result`.
    ///
    /// Does nothing, and sends no notification, unless the expression holds a
    /// complete operation without a result yet.
    pub fn append_result(&mut self) {
        if !self.expression.has_enough_elements()
            || self.expression.last_is_operator()
            || self.expression.has_result()
        {
            debug!(expression = %self.expression, "Ignored equals on incomplete expression");
            return;
        }

        let value = match evaluate(self.expression.operands()) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = ?e, expression = %self.expression, "Evaluation failed");
                e.to_string()
            }
        };
        self.expression.push_result(value);

        debug!(expression = %self.expression, "Appended result");
        self.refresh();
    }

    /// Remove the last entry, or everything when `fully` is set or a result
    /// is shown.
    pub fn cancel(&mut self, fully: bool) {
        if fully || self.expression.has_result() {
            self.expression.reset();
        } else {
            self.expression.remove_last_entry();
        }

        debug!(fully, expression = %self.expression, "Cancelled");
        self.refresh();
    }

    /// Notify the observer that the expression has changed.
    fn refresh(&self) {
        if let Some(callback) = &self.on_change {
            callback();
        }
    }
}

fn is_numeric(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}
