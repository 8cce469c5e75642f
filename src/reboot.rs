use log::{debug, info, warn};

use std::process::Command;
use std::thread;

/// Restarts the system when requested from the keypad.
///
/// The command is started from a detached thread, nobody waits for it
/// and its outcome is only logged.
#[derive(Debug, Clone)]
pub struct Reboot {
    argv: Vec<String>,
}

impl Reboot {
    /// Runs the given program with arguments on trigger.
    ///
    /// An empty `argv` behaves like `disabled`.
    pub fn command(argv: Vec<String>) -> Self {
        Reboot { argv }
    }

    /// Only logs when triggered.
    pub fn disabled() -> Self {
        Reboot { argv: vec![] }
    }

    /// Starts the reboot in the background and returns immediately.
    ///
    /// Returns the handle of the background thread, if any was
    /// started, mostly useful in tests.
    pub fn trigger(&self) -> Option<thread::JoinHandle<()>> {
        let (program, args) = match self.argv.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            None => {
                info!("reboot requested, but rebooting is disabled");
                return None;
            }
        };

        info!("reboot requested, running {:?}", self.argv);
        let spawned = thread::Builder::new()
            .name("reboot".to_string())
            .spawn(move || match Command::new(&program).args(&args).status() {
                Ok(status) => debug!("{} exited with {}", program, status),
                Err(err) => warn!("failed to run {}: {}", program, err),
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("failed to start reboot thread: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::log::init_test_logging;

    #[test]
    fn disabled_does_nothing() {
        assert!(Reboot::disabled().trigger().is_none());
    }

    #[test]
    fn missing_program_does_not_reach_caller() {
        // given
        init_test_logging();
        let reboot = Reboot::command(vec!["/this/program/does/not/exist".to_string()]);

        // when
        let handle = reboot.trigger().expect("expected background thread");

        // then
        assert!(handle.join().is_ok(), "reboot thread panicked");
    }
}
