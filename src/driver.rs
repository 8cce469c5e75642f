//! The external process rendering text lines on the LED matrix.
use crate::config::DriverConfig;
use crate::result::Result;

use failure::format_err;
use log::{debug, info, warn};

use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Child process reading lines to show from its stdin.
pub struct Driver {
    child: Child,
    program: String,
}

impl Driver {
    /// Starts the driver with stdin piped, stdout and stderr are
    /// inherited.
    pub fn spawn(config: &DriverConfig) -> Result<Self> {
        let child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| format_err!("failed to start driver {}: {}", config.program, e))?;

        info!("started driver {} with pid {}", config.program, child.id());

        Ok(Driver {
            child,
            program: config.program.clone(),
        })
    }

    /// Takes the stream to write lines for the sign to.
    ///
    /// Only returns something on the first call.
    pub fn take_stdin(&mut self) -> Option<ChildStdin> {
        self.child.stdin.take()
    }

    /// Checks without blocking whether the driver is gone.
    pub fn has_exited(&mut self) -> bool {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                warn!("driver {} exited with {}", self.program, status);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("failed to check on driver {}: {}", self.program, e);
                true
            }
        }
    }

    /// Closes stdin if still open and waits for the driver to exit on
    /// its own, killing it if it takes longer than `timeout`.
    ///
    /// Returns the exit status, if the driver could be reaped at all.
    pub fn shutdown(mut self, timeout: Duration) -> Option<ExitStatus> {
        drop(self.child.stdin.take());

        let deadline = Instant::now() + timeout;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    debug!("driver {} exited with {}", self.program, status);
                    return Some(status);
                }
                Ok(None) if Instant::now() < deadline => sleep(EXIT_POLL_INTERVAL),
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to wait for driver {}: {}", self.program, e);
                    return None;
                }
            }
        }

        warn!(
            "driver {} did not exit within {:?}, killing it",
            self.program, timeout
        );
        if let Err(e) = self.child.kill() {
            warn!("failed to kill driver {}: {}", self.program, e);
        }
        self.child.wait().ok()
    }
}
