//! Calculator item rendering.
//!
//! Renders the calculator display for the terminal.

use colored::Colorize;

use crate::items::CalculatorItem;

/// Render a calculator item.
///
/// While an expression is being edited it is shown as-is. Once evaluated the
/// output has two lines:
/// - The expression, dimmed
/// - The result (or error) with a "= " prefix, bold green or red
pub fn render_calculator(calc: &CalculatorItem) -> String {
    let Some(result) = calc.display_result.as_deref() else {
        return calc.expression.clone();
    };

    let result_text = format!("= {}", result);
    let result_element = if calc.is_error {
        result_text.red()
    } else {
        result_text.green().bold()
    };

    format!("{}\n{}", calc.expression.dimmed(), result_element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(expression: &str, result: Option<&str>, is_error: bool) -> CalculatorItem {
        CalculatorItem {
            expression: expression.to_string(),
            display_result: result.map(str::to_string),
            is_error,
        }
    }

    #[test]
    fn test_render_in_progress() {
        colored::control::set_override(false);
        assert_eq!(render_calculator(&item("12 + ", None, false)), "12 + ");
    }

    #[test]
    fn test_render_result() {
        colored::control::set_override(false);
        assert_eq!(
            render_calculator(&item("2 + 2", Some("4"), false)),
            "2 + 2\n= 4"
        );
        assert_eq!(
            render_calculator(&item("5 ÷ 0", Some("Error"), true)),
            "5 ÷ 0\n= Error"
        );
    }
}
