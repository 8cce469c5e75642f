use crate::board::Board;
use crate::interactive::{Prompter, Step};
use crate::keypad::{Error, InputBuffer, Keypad};
use crate::result::Result;
use crate::strategies::Strategy;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{debug, info};

use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

/// How long to wait for input before checking for termination again.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Where submitted input comes from.
pub enum Input {
    /// Keys collected into tokens, enter submits.
    Keypad {
        keypad: Box<dyn Keypad + Send>,
        buffer: InputBuffer,
    },
    /// Answers to the two prompts, read line by line.
    Interactive {
        prompter: Prompter,
        lines: Receiver<io::Result<String>>,
        prompt_out: Box<dyn Write + Send>,
    },
}

impl Input {
    /// Feeds input to the board until `should_stop` returns `true`
    /// or the input ends.
    pub fn run<F>(self, board: &Board, should_stop: F) -> Result<()>
    where
        F: FnMut() -> bool,
    {
        match self {
            Input::Keypad {
                mut keypad,
                mut buffer,
            } => ingest_keys(keypad.as_mut(), &mut buffer, board, should_stop),
            Input::Interactive {
                mut prompter,
                lines,
                mut prompt_out,
            } => ingest_lines(&mut prompter, &lines, prompt_out.as_mut(), board, should_stop),
        }
    }
}

pub fn ingest_keys<F>(
    keypad: &mut dyn Keypad,
    buffer: &mut InputBuffer,
    board: &Board,
    mut should_stop: F,
) -> Result<()>
where
    F: FnMut() -> bool,
{
    while !should_stop() {
        match keypad.poll() {
            Ok(key) => {
                if let Some(token) = buffer.push(key) {
                    board.submit(&token);
                }
            }
            Err(Error::WouldBlock) => sleep(INPUT_POLL_INTERVAL),
            Err(Error::Fatal(err)) => return Err(err),
        }
    }

    Ok(())
}

pub fn ingest_lines<F>(
    prompter: &mut Prompter,
    lines: &Receiver<io::Result<String>>,
    prompt_out: &mut dyn Write,
    board: &Board,
    mut should_stop: F,
) -> Result<()>
where
    F: FnMut() -> bool,
{
    show_prompt(prompt_out, prompter)?;

    while !should_stop() {
        let line = match lines.recv_timeout(INPUT_POLL_INTERVAL) {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                info!("end of input, stopping");
                return Ok(());
            }
        };

        match prompter.feed(&line) {
            Step::AwaitTiming => (),
            Step::Show(text) => {
                info!("showing {:?}", text);
                board.set_strategy(Strategy::fixed(text));
            }
            Step::Rejected(reason) => debug!("discarding input: {}", reason),
        }
        show_prompt(prompt_out, prompter)?;
    }

    Ok(())
}

fn show_prompt(prompt_out: &mut dyn Write, prompter: &Prompter) -> io::Result<()> {
    prompt_out.write_all(prompter.prompt().as_bytes())?;
    prompt_out.flush()
}
