//! Turns tokens typed on the keypad into commands for the board.
//!
//! A token is everything typed before hitting enter. Tokens that do
//! not mean anything are dropped without telling the operator.
use crate::config::Config;
use crate::strategies::Strategy;

use winnow::ascii::digit1;
use winnow::combinator::preceded;
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::one_of;

/// A token that was understood.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start over with the placeholders.
    Reset,
    /// Show a pit position, holds the digits after the slash.
    Position(String),
    /// Flash the instruction with the given text.
    Instruction(String),
    /// Show an already formatted lap time like `42.1`.
    LapTime(String),
    /// Restart the whole system.
    Reboot,
}

/// The words the keypad understands.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub reset_token: String,
    pub reboot_token: String,
    pub instructions: Vec<String>,
    pub placeholders: Vec<String>,
}

impl Vocabulary {
    pub fn from_config(config: &Config) -> Self {
        Vocabulary {
            reset_token: config.reset_token.clone(),
            reboot_token: config.reboot_token.clone(),
            instructions: config.instructions.clone(),
            placeholders: config.placeholders(),
        }
    }

    /// Looks up an instruction by the digit typed after `*`, counting
    /// from one.
    fn instruction(&self, digit: char) -> Option<&String> {
        let number = digit.to_digit(10)? as usize;
        number
            .checked_sub(1)
            .and_then(|idx| self.instructions.get(idx))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::from_config(&Config::default())
    }
}

impl Command {
    /// The strategy to activate for this command, `None` for commands
    /// that do not change the sign.
    pub fn strategy(&self, vocabulary: &Vocabulary) -> Option<Strategy> {
        match self {
            Command::Reset => Some(Strategy::initial(vocabulary.placeholders.clone())),
            Command::Position(digits) => Some(Strategy::fixed(format!("P{}", digits))),
            Command::Instruction(text) => Some(Strategy::blinking(text.as_str())),
            Command::LapTime(lap_time) => Some(Strategy::fixed(lap_time.as_str())),
            Command::Reboot => None,
        }
    }
}

/// Classifies a complete token, first match wins.
///
/// Returns `None` for anything that is not understood, including
/// instruction numbers without a matching instruction.
pub fn classify(token: &str, vocabulary: &Vocabulary) -> Option<Command> {
    if token == vocabulary.reset_token {
        return Some(Command::Reset);
    }

    if let Ok(digits) = position.parse(token) {
        return Some(Command::Position(digits.to_string()));
    }

    if let Ok(digit) = instruction_number.parse(token) {
        return vocabulary
            .instruction(digit)
            .map(|text| Command::Instruction(text.clone()));
    }

    if let Ok(formatted) = lap_time.parse(token) {
        return Some(Command::LapTime(formatted.to_string()));
    }

    if token == vocabulary.reboot_token {
        return Some(Command::Reboot);
    }

    None
}

/// `/` followed by digits.
fn position<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('/', digit1).parse_next(input)
}

/// `*` followed by exactly one digit.
fn instruction_number(input: &mut &str) -> ModalResult<char> {
    preceded('*', one_of(|c: char| c.is_ascii_digit())).parse_next(input)
}

/// Seconds below sixty, a dot and tenths, e.g. `42.1`.
fn lap_time<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        one_of('0'..='5'),
        one_of(|c: char| c.is_ascii_digit()),
        '.',
        one_of(|c: char| c.is_ascii_digit()),
    )
        .take()
        .parse_next(input)
}
