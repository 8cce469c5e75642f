use crate::keypad::{Error, Key, Keypad};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use failure::format_err;
use log::debug;
use std::thread;
use std::time::Duration;

/// Runs a keypad that may block on its own thread, making it
/// possible to poll it without blocking.
///
/// The thread is detached. It ends when this end is dropped and the
/// next key arrives, or when the keypad fails.
pub struct BackgroundKeypad(Receiver<Result<Key, Error>>);

impl Keypad for BackgroundKeypad {
    fn poll(&mut self) -> Result<Key, Error> {
        match self.0.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => Err(Error::WouldBlock),
            Err(TryRecvError::Disconnected) => {
                Err(Error::Fatal(format_err!("Keypad thread has terminated")))
            }
        }
    }
}

impl BackgroundKeypad {
    pub fn spawn(keypad: Box<dyn Keypad + Send>, poll_interval: Option<Duration>) -> Self {
        // Block when four unconsumed keys are in the queue
        let (tx, rx) = bounded(4);
        thread::spawn(move || {
            keep_polling(keypad, poll_interval, tx);
        });
        BackgroundKeypad(rx)
    }
}

fn keep_polling(
    mut keypad: Box<dyn Keypad + Send>,
    poll_interval: Option<Duration>,
    sender: Sender<Result<Key, Error>>,
) {
    loop {
        match keypad.poll() {
            Ok(key) => match sender.send(Ok(key)) {
                Ok(_) => (),
                Err(e) => {
                    debug!("Terminating keypad thread, remote end hung up: {:?}", e);
                    break;
                }
            },
            Err(Error::WouldBlock) => match poll_interval {
                Some(interval) => thread::sleep(interval),
                None => thread::yield_now(),
            },
            fatal => {
                match sender.send(fatal) {
                    Ok(_) => (),
                    Err(e) => debug!("Terminating keypad thread, remote end hung up: {:?}", e),
                }
                break;
            }
        }
    }
}
