//! Calculator item representing the engine's current display.

use serde::Serialize;

use crate::calculator::ExpressionEngine;

/// A snapshot of the calculator display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculatorItem {
    /// The expression being edited, without the `= result` part.
    pub expression: String,
    /// The result, or error message, once the expression was evaluated.
    #[serde(rename = "result")]
    pub display_result: Option<String>,
    /// Whether the result is an error marker.
    #[serde(rename = "error")]
    pub is_error: bool,
}

impl CalculatorItem {
    /// Create a new calculator item from the engine's current state.
    pub fn from_engine(engine: &ExpressionEngine) -> Self {
        let expression = engine
            .expression()
            .operands()
            .iter()
            .map(ToString::to_string)
            .collect::<String>();

        Self {
            expression,
            display_result: engine.result().map(str::to_string),
            is_error: engine.is_error(),
        }
    }

    /// Check if this item holds a successful result.
    pub fn is_success(&self) -> bool {
        self.display_result.is_some() && !self.is_error
    }

    /// Get the text to copy to clipboard.
    /// Returns the result when there is one (so the user can still copy an
    /// error message), or the expression otherwise.
    pub fn text_for_clipboard(&self) -> &str {
        self.display_result.as_deref().unwrap_or(&self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::parse_keys;

    fn item_after(input: &str) -> CalculatorItem {
        let mut engine = ExpressionEngine::new();
        for key in parse_keys(input).unwrap() {
            key.apply(&mut engine);
        }
        CalculatorItem::from_engine(&engine)
    }

    #[test]
    fn test_item_with_result() {
        let item = item_after("6÷3=");
        assert_eq!(item.expression, "6 ÷ 3");
        assert_eq!(item.display_result.as_deref(), Some("2"));
        assert!(item.is_success());
        assert_eq!(item.text_for_clipboard(), "2");
    }

    #[test]
    fn test_item_in_progress() {
        let item = item_after("12+");
        assert_eq!(item.expression, "12 + ");
        assert_eq!(item.display_result, None);
        assert!(!item.is_success());
        assert_eq!(item.text_for_clipboard(), "12 + ");
    }

    #[test]
    fn test_item_with_error() {
        let item = item_after("5÷0=");
        assert!(item.is_error);
        assert!(!item.is_success());
        assert_eq!(item.text_for_clipboard(), "Error");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(item_after("1+1=")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "expression": "1 + 1", "result": "2", "error": false })
        );
    }
}
