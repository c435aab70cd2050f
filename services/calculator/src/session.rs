use log::warn;

use expression::EvalError;
use telemetry::Measure;

use crate::render::{ErrorResponse, Frame};

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("session", "evaluate");
}

const KEYPAD: &str = "0123456789.+-*/%()";
const OPERATORS: &[char] = &['+', '-', '*', '/', '%'];

/// Shown in place of the expression after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Equals,
    Clear,
    Backspace,
}

impl Input {
    pub fn from_char(c: char) -> Option<Input> {
        match c {
            '=' => Some(Input::Equals),
            c if KEYPAD.contains(c) => Some(Input::Char(c)),
            _ => None,
        }
    }

    /// Keys that are spelled out rather than typed as a single character
    pub fn from_name(name: &str) -> Option<Input> {
        match name {
            "Enter" => Some(Input::Equals),
            "AC" | "Escape" => Some(Input::Clear),
            "Backspace" => Some(Input::Backspace),
            _ => None,
        }
    }

    /// Maps a key name as reported by a keyboard or keypad button
    pub fn from_key(key: &str) -> Option<Input> {
        Input::from_name(key).or_else(|| {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Input::from_char(c),
                _ => None,
            }
        })
    }
}

/// Converts a line of terminal input into keypad inputs
///
/// A line holding a spelled out key name (`Enter`, `AC`, `Escape`,
/// `Backspace`) is that key, otherwise every keypad character is a key press
/// and the end of the line presses `=`.
pub fn keys(line: &str) -> Vec<Input> {
    if let Some(input) = Input::from_name(line) {
        return vec![input];
    }

    let mut inputs: Vec<_> = line.chars().filter_map(Input::from_char).collect();
    if inputs.last() != Some(&Input::Equals) {
        inputs.push(Input::Equals);
    }
    inputs
}

/// State of a calculator keypad: the expression being typed and the outcome
/// of the last evaluation
#[derive(Debug, Clone)]
pub struct Session {
    expression: String,
    last_result: Option<String>,
    last_error: Option<EvalError>,
    // Set after an evaluation or clear, the next operand starts a new expression
    fresh: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            expression: String::new(),
            last_result: None,
            last_error: None,
            fresh: true,
        }
    }
}

impl Session {
    pub fn new() -> Session {
        Default::default()
    }

    pub fn display(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            display: self.display().to_string(),
            result: self.last_result.clone(),
            error: self.last_error.as_ref().map(ErrorResponse::from),
        }
    }

    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Char(c) => self.push(c),
            Input::Equals => self.calculate(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
        }
    }

    fn backspace(&mut self) {
        // There is nothing to edit in an error message
        if self.fresh && self.last_error.is_some() {
            self.expression.clear();
            self.last_error = None;
        } else {
            self.expression.pop();
        }
    }

    fn push(&mut self, c: char) {
        if self.fresh {
            // An operator continues from the previous result, anything else replaces it
            if !is_operator(c) || self.last_error.is_some() {
                self.expression.clear();
                self.last_error = None;
            }
        }

        if self.accepts(c) {
            self.expression.push(c);
            self.fresh = false;
        }
    }

    /// The digits typed since the last operator
    fn current_number(&self) -> &str {
        self.expression.rsplit(OPERATORS).next().unwrap_or("")
    }

    fn accepts(&self, c: char) -> bool {
        if is_operator(c) && self.expression.chars().last().map_or(false, is_operator) {
            return false;
        }

        let current = self.current_number();
        match c {
            '.' => !current.contains('.'),
            '0' => current != "0",
            _ => true,
        }
    }

    fn calculate(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let text = &self.expression;
        match EVALUATE_MEASURE.observe(|| expression::calculate(text)) {
            Ok(result) => {
                self.expression = result.clone();
                self.last_result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                warn!("Calculator error: {}", e);
                self.expression = ERROR_DISPLAY.to_string();
                self.last_error = Some(e);
            }
        }
        self.fresh = true;
    }

    pub fn clear(&mut self) {
        *self = Session::new();
    }
}
