//! Two-prompt mode for driving the board from a terminal.
//!
//! The first prompt takes either `*<n>` to pick one of the configured
//! commands, followed by a second prompt for the timing, or a timing
//! right away, which is then shown under the team name. Both lines go
//! to the sign together.
use crate::config::InteractiveConfig;
use crate::timing::{parse_timing, TimingError};

use crossbeam_channel::{bounded, Receiver};
use failure::Fail;
use log::debug;

use std::io::{self, BufRead};
use std::thread;

pub const FIRST_PROMPT: &str = "1? ";
pub const SECOND_PROMPT: &str = "2? ";

#[derive(Debug, Fail, PartialEq)]
pub enum PromptError {
    #[fail(display = "{:?} does not name a command", _0)]
    Command(String),
    #[fail(display = "{}", _0)]
    Timing(#[cause] TimingError),
}

/// Outcome of feeding one line to the prompter.
#[derive(Debug, PartialEq)]
pub enum Step {
    /// A command was picked, the timing comes next.
    AwaitTiming,
    /// Both lines are complete, separated by a newline.
    Show(String),
    /// The input was discarded, starting over at the first prompt.
    Rejected(PromptError),
}

enum Stage {
    First,
    Timing { first_line: String },
}

pub struct Prompter {
    config: InteractiveConfig,
    stage: Stage,
}

impl Prompter {
    pub fn new(config: InteractiveConfig) -> Self {
        Prompter {
            config,
            stage: Stage::First,
        }
    }

    /// What to ask for next.
    pub fn prompt(&self) -> &'static str {
        match self.stage {
            Stage::First => FIRST_PROMPT,
            Stage::Timing { .. } => SECOND_PROMPT,
        }
    }

    /// Takes the answer to the current prompt, without line ending.
    pub fn feed(&mut self, line: &str) -> Step {
        match std::mem::replace(&mut self.stage, Stage::First) {
            Stage::First => match line.strip_prefix('*') {
                Some(index) => match self.command(index) {
                    Some(command) => {
                        self.stage = Stage::Timing {
                            first_line: format!("{}{}", self.config.prefix, command),
                        };
                        Step::AwaitTiming
                    }
                    None => Step::Rejected(PromptError::Command(line.to_string())),
                },
                None => {
                    let first_line = format!("{}{}", self.config.prefix, self.config.team);
                    show_with_timing(first_line, line)
                }
            },
            Stage::Timing { first_line } => show_with_timing(first_line, line),
        }
    }

    fn command(&self, index: &str) -> Option<&String> {
        index
            .parse::<usize>()
            .ok()
            .and_then(|idx| self.config.commands.get(idx))
    }
}

fn show_with_timing(first_line: String, raw_timing: &str) -> Step {
    match parse_timing(raw_timing) {
        Ok(timing) => Step::Show(format!("{}\n{}", first_line, timing)),
        Err(e) => Step::Rejected(PromptError::Timing(e)),
    }
}

/// Reads lines on a detached thread so waiting for them can be
/// interrupted. Line endings are stripped.
///
/// The channel disconnects after the last line.
pub fn spawn_line_reader<R>(reader: R) -> Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() {
                debug!("Terminating line reader, remote end hung up");
                break;
            }
            if failed {
                break;
            }
        }
    });
    rx
}
