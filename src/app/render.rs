use crate::board::Board;
use crate::result::Result;

use log::trace;

use std::thread::sleep;
use std::time::{Duration, Instant};

/// Ticks the board every `interval` until `should_stop` returns
/// `true`.
///
/// Returns early with an error if the board cannot write to its
/// output stream, which is fatal for rendering.
pub fn run<F>(board: &Board, interval: Duration, mut should_stop: F) -> Result<()>
where
    F: FnMut() -> bool,
{
    while !should_stop() {
        if let Some(text) = board.tick(Instant::now())? {
            trace!("showing {:?}", text);
        }
        sleep(interval);
    }

    Ok(())
}
