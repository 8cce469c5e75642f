use super::{App, Input};

use crate::board::Board;
use crate::config::Config;
use crate::driver::Driver;
use crate::interactive::{spawn_line_reader, Prompter};
use crate::keypad::{BackgroundKeypad, InputBuffer, Keypad, StdinKeypad};
use crate::result::Result;

use failure::bail;
use log::error;

use std::io::{self, BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::Arc;
use std::time::Duration;

#[cfg(target_os = "linux")]
use crate::keypad::EvdevKeypad;
#[cfg(target_os = "linux")]
use std::path::Path;

/// Blocking keypads are polled this often from their background thread
/// when they have nothing to report.
const BACKGROUND_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct Builder {
    config: Config,
    input: Option<Input>,
    driver: Option<Driver>,
    sink: Option<Box<dyn Write + Send>>,
    termination_flag: Arc<AtomicBool>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            config: Config::default(),
            input: None,
            driver: None,
            sink: None,
            // if never set up, termination flag never changes to true
            termination_flag: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Builder {
    pub fn new() -> Builder {
        Default::default()
    }

    /// Replaces the configuration. Call before setting up input or the
    /// driver, which read from it.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Takes keys from a keypad that never blocks.
    pub fn keypad(&mut self, keypad: impl Keypad + Send + 'static) -> &mut Self {
        self.input = Some(Input::Keypad {
            keypad: Box::new(keypad),
            buffer: InputBuffer::new(self.config.max_input_len),
        });
        self
    }

    /// Takes keys from a keypad that may block, polling it from a
    /// background thread.
    pub fn background_keypad(&mut self, keypad: impl Keypad + Send + 'static) -> &mut Self {
        let keypad = BackgroundKeypad::spawn(Box::new(keypad), Some(BACKGROUND_POLL_INTERVAL));
        self.keypad(keypad)
    }

    /// Takes keys typed on stdin, enter submits.
    pub fn stdin_keypad(&mut self) -> &mut Self {
        self.background_keypad(StdinKeypad::new())
    }

    /// Takes keys from the USB keypad at the given input device.
    #[cfg(target_os = "linux")]
    pub fn evdev_keypad(&mut self, device: impl AsRef<Path>) -> Result<&mut Self> {
        let keypad = EvdevKeypad::open(device)?;
        Ok(self.background_keypad(keypad))
    }

    /// Asks for two lines at a time on stdout and reads them from stdin.
    pub fn interactive(&mut self) -> &mut Self {
        self.interactive_with(BufReader::new(io::stdin()), io::stdout())
    }

    /// Like `interactive`, reading answers from `lines` and writing
    /// prompts to `prompt_out`.
    pub fn interactive_with(
        &mut self,
        lines: impl BufRead + Send + 'static,
        prompt_out: impl Write + Send + 'static,
    ) -> &mut Self {
        self.input = Some(Input::Interactive {
            prompter: Prompter::new(self.config.interactive.clone()),
            lines: spawn_line_reader(lines),
            prompt_out: Box::new(prompt_out),
        });
        self
    }

    /// Starts the configured driver process, text is written to its
    /// stdin.
    pub fn driver(&mut self) -> Result<&mut Self> {
        self.driver = Some(Driver::spawn(&self.config.driver)?);
        Ok(self)
    }

    /// Writes text to the given stream instead of a driver.
    pub fn sink(&mut self, sink: impl Write + Send + 'static) -> &mut Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sets  a custom termination flag.
    pub fn termination_flag(&mut self, flag: &Arc<AtomicBool>) -> &mut Self {
        self.termination_flag = Arc::clone(flag);
        self
    }

    pub fn terminate_on_ctrlc_and_sigterm(&mut self) -> &mut Self {
        let termination_requested = Arc::new(AtomicBool::new(false));

        let termination_requested_handler_reference = Arc::clone(&termination_requested);
        let result = ctrlc::set_handler(move || {
            termination_requested_handler_reference.store(true, SeqCst);
        });

        match result {
            Ok(()) => self.termination_flag(&termination_requested),
            Err(e) => {
                error!(
                    "Failed to set up signal handler for safe termination. \
                     The driver may keep running after termination. \
                     Error: {:?}",
                    e
                );
                self
            }
        }
    }

    /// Consumes the builder and tries to create an app from it.
    ///
    /// Fails if no input was set up.
    pub fn build(self) -> Result<App> {
        let Builder {
            config,
            input,
            driver,
            sink,
            termination_flag,
        } = self;

        let input = match input {
            Some(input) => input,
            None => bail!("no keypad or prompt set up for input"),
        };

        let board = Board::from_config(&config);
        if let Some(sink) = sink {
            board.attach_sink(sink);
        }

        let app = App {
            board,
            input,
            driver,
            termination_flag,
            poll_interval: config.poll_interval(),
            shutdown_timeout: config.shutdown_timeout(),
        };

        Ok(app)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keypad::QueueKeypad;

    #[test]
    fn build_without_input_fails() {
        assert!(App::builder().build().is_err());
    }

    #[test]
    fn build_with_default_settings() {
        // given
        let mut builder = App::builder();
        let (keypad, _input) = QueueKeypad::new();
        builder.keypad(keypad);

        // when
        let app = builder.build().unwrap();

        // then
        assert!(app.driver.is_none());
        assert_eq!(app.poll_interval, Duration::from_millis(100));
        assert_eq!(app.shutdown_timeout, Duration::from_secs(2));
        assert_eq!(app.termination_flag.load(SeqCst), false);
    }

    #[test]
    fn custom_termination_flag() {
        // given
        let flag = Arc::new(AtomicBool::new(true));
        let mut builder = App::builder();
        let (keypad, _input) = QueueKeypad::new();
        builder.keypad(keypad).termination_flag(&flag);

        // when
        let app = builder.build().unwrap();

        // then
        assert!(app.termination_flag.load(SeqCst));
    }
}
