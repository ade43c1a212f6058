pub mod calculator;
pub mod repl;

pub use calculator::render_calculator;
pub use repl::{Flow, Repl, evaluate_input};
