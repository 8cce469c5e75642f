use crate::classify::{classify, Command, Vocabulary};
use crate::config::Config;
use crate::reboot::Reboot;
use crate::strategies::Strategy;

use derivative::Derivative;
use failure::Fail;
use log::{debug, info};

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Where the text for the sign goes, usually stdin of the driver.
pub type Sink = Box<dyn Write + Send>;

#[derive(Debug, Fail)]
pub enum BoardError {
    #[fail(
        display = "cannot show {:?}, no output stream attached to the board",
        _0
    )]
    UninitializedSink(String),
    #[fail(display = "failed to write to the output stream: {}", _0)]
    Write(#[cause] io::Error),
}

/// Shared handle to what the sign is currently doing.
///
/// Clones refer to the same board, so one clone can take input while
/// another one renders. The active strategy and the output stream sit
/// behind one lock, which is held across both deciding on new text
/// and writing it, so a strategy can never be swapped in the middle
/// of a write.
#[derive(Debug, Clone)]
pub struct Board {
    display: Arc<Mutex<Display>>,
    vocabulary: Arc<Vocabulary>,
    reboot: Reboot,
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Display {
    strategy: Strategy,
    #[derivative(Debug = "ignore")]
    sink: Option<Sink>,
}

impl Board {
    /// Makes a board without an output stream, showing the given
    /// strategy until the first accepted input.
    pub fn new(initial: Strategy, vocabulary: Vocabulary, reboot: Reboot) -> Self {
        Board {
            display: Arc::new(Mutex::new(Display {
                strategy: initial,
                sink: None,
            })),
            vocabulary: Arc::new(vocabulary),
            reboot,
        }
    }

    /// Board cycling the configured placeholders, rebooting with the
    /// configured command.
    pub fn from_config(config: &Config) -> Self {
        Board::new(
            Strategy::initial(config.placeholders()),
            Vocabulary::from_config(config),
            Reboot::command(config.reboot_command.clone()),
        )
    }

    /// Sets the stream where text will be written to from now on.
    pub fn attach_sink(&self, sink: impl Write + Send + 'static) {
        self.display().sink = Some(Box::new(sink));
    }

    /// Takes away the output stream, returning it if there was one.
    ///
    /// Dropping the returned stream closes it.
    pub fn detach_sink(&self) -> Option<Sink> {
        self.display().sink.take()
    }

    /// Replaces the active strategy, dropping the old one.
    pub fn set_strategy(&self, strategy: Strategy) {
        self.display().strategy = strategy;
    }

    /// Interprets a complete token typed on the keypad.
    ///
    /// Returns the command if the token was understood, `None`
    /// if it was ignored.
    pub fn submit(&self, token: &str) -> Option<Command> {
        let command = classify(token, &self.vocabulary);

        match command {
            None => debug!("ignoring input {:?}", token),
            Some(Command::Reboot) => {
                self.reboot.trigger();
            }
            Some(ref command) => {
                if let Some(strategy) = command.strategy(&self.vocabulary) {
                    info!("switching to {:?}", command);
                    self.set_strategy(strategy);
                }
            }
        }

        command
    }

    /// Lets the active strategy decide whether the sign needs new text
    /// at `now` and writes it out as a line if so.
    ///
    /// Returns the text that was written.
    pub fn tick(&self, now: Instant) -> Result<Option<String>, BoardError> {
        let mut display = self.display();
        let display = &mut *display;

        let text = match display.strategy.update(now) {
            Some(text) => text,
            None => return Ok(None),
        };

        let sink = match display.sink.as_mut() {
            Some(sink) => sink,
            None => return Err(BoardError::UninitializedSink(text)),
        };

        writeln!(sink, "{}", text)
            .and_then(|_| sink.flush())
            .map_err(BoardError::Write)?;

        Ok(Some(text))
    }

    /// The lock is never held across a panic-prone section that would
    /// leave the display half-updated, so a poisoned lock is used as is.
    fn display(&self) -> MutexGuard<Display> {
        self.display.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
