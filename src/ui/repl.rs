//! Interactive calculator loop.
//!
//! Each input line is either a REPL command (`help`, `copy`, `quit`) or a run
//! of keypad presses applied to the engine. The display is re-rendered once
//! per line whenever the engine reported a change.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::calculator::{
    ExpressionChanged, ExpressionEngine, Key, KeyError, copy_to_clipboard, ends_with_equals,
    parse_keys,
};
use crate::config::Config;
use crate::items::CalculatorItem;
use crate::ui::render_calculator;

const HELP: &str = "\
Keys:
  0-9          enter digits
  + - x ÷      operators (* and / also work)
  =            compute the result
  < del        remove the last entry
  c ac clear   clear everything
Commands:
  copy         copy the result to the clipboard
  help         show this help
  quit exit    leave";

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Keys(Vec<Key>),
    Copy,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, KeyError> {
        match line.trim().to_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => parse_keys(line).map(Self::Keys),
        }
    }
}

/// The interactive calculator.
pub struct Repl {
    engine: ExpressionEngine,
    changes: flume::Receiver<ExpressionChanged>,
    prompt: String,
    copy_on_equals: bool,
}

impl Repl {
    pub fn new(config: &Config) -> Self {
        let mut engine = ExpressionEngine::new();
        let changes = engine.subscribe();

        Self {
            engine,
            changes,
            prompt: config.prompt.clone(),
            copy_on_equals: config.copy_on_equals,
        }
    }

    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        self.render(&mut output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                break;
            };

            if self.handle_line(&line, &mut output)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one line of input.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, line, "Rejected input");
                writeln!(output, "{} (type 'help' for keys)", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Keys(keys) => {
                for key in &keys {
                    key.apply(&mut self.engine);
                }

                if self.changes.try_iter().count() > 0 {
                    self.render(output)?;
                }

                if self.copy_on_equals && ends_with_equals(&keys) && self.engine.has_result() {
                    self.copy(output)?;
                }
            }
            Command::Copy => self.copy(output)?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let item = CalculatorItem::from_engine(&self.engine);
        writeln!(output, "{}", render_calculator(&item))
    }

    fn copy<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let item = CalculatorItem::from_engine(&self.engine);
        let text = item.text_for_clipboard();

        match copy_to_clipboard(text) {
            Ok(()) => writeln!(output, "Copied {}", text),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                writeln!(output, "{}", e)
            }
        }
    }
}

/// Apply a line of keypad input to a fresh engine and compute its result.
///
/// An `=` is pressed at the end unless the input already ends with one.
pub fn evaluate_input(input: &str) -> Result<ExpressionEngine, KeyError> {
    let keys = parse_keys(input)?;

    let mut engine = ExpressionEngine::new();
    for key in &keys {
        key.apply(&mut engine);
    }
    if !ends_with_equals(&keys) {
        engine.append_result();
    }

    Ok(engine)
}
