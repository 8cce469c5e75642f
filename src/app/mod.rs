mod builder;
mod ingest;
mod render;

use crate::board::Board;
use crate::driver::Driver;
use crate::log::log_activity_failure;
use crate::result::Result;

use failure::format_err;
use log::{debug, info};

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub use builder::Builder;
pub use ingest::{ingest_keys, ingest_lines, Input};

/// Runs the two activities of the board: taking input on a background
/// thread and rendering on the calling thread.
///
/// Both end when the termination flag is set, when the input ends,
/// when the driver exits or when either of them fails. Whatever the
/// reason, the other one is stopped too and the driver is shut down.
pub struct App {
    board: Board,
    input: Input,
    driver: Option<Driver>,
    termination_flag: Arc<AtomicBool>,
    poll_interval: Duration,
    shutdown_timeout: Duration,
}

impl App {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// A handle on the board shown by this app.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Keeps the board running until terminated, the input ends or
    /// something fails, then shuts down in order.
    ///
    /// Returns the first error of either activity.
    pub fn run(self) -> Result<()> {
        let App {
            board,
            input,
            mut driver,
            termination_flag,
            poll_interval,
            shutdown_timeout,
        } = self;

        if let Some(stdin) = driver.as_mut().and_then(Driver::take_stdin) {
            board.attach_sink(stdin);
        }

        let ingest = {
            let board = board.clone();
            let flag = Arc::clone(&termination_flag);
            thread::Builder::new()
                .name("ingest".to_string())
                .spawn(move || {
                    let result =
                        panic::catch_unwind(AssertUnwindSafe(|| {
                            input.run(&board, || flag.load(SeqCst))
                        }))
                        .unwrap_or_else(|_| Err(format_err!("ingest activity panicked")));
                    if let Err(ref err) = result {
                        log_activity_failure("ingest", err);
                    }
                    flag.store(true, SeqCst);
                    result
                })?
        };

        let mut driver_exited = false;
        let rendered = render::run(&board, poll_interval, || {
            if let Some(driver) = driver.as_mut() {
                driver_exited = driver.has_exited();
            }
            driver_exited || termination_flag.load(SeqCst)
        });
        let rendered = rendered.and_then(|_| {
            if driver_exited {
                Err(format_err!("driver exited while the board was running"))
            } else {
                Ok(())
            }
        });
        if let Err(ref err) = rendered {
            log_activity_failure("render", err);
        }
        termination_flag.store(true, SeqCst);

        debug!("waiting for input to stop");
        let ingested = ingest
            .join()
            .unwrap_or_else(|_| Err(format_err!("ingest thread panicked")));

        // input may have ended after the last tick, show what it left
        let rendered = rendered.and_then(|_| match board.tick(Instant::now()) {
            Ok(_) => Ok(()),
            Err(err) => {
                let err = err.into();
                log_activity_failure("render", &err);
                Err(err)
            }
        });

        drop(board.detach_sink());
        if let Some(driver) = driver {
            driver.shutdown(shutdown_timeout);
        }
        info!("shutdown complete");

        rendered.and(ingested)
    }
}
