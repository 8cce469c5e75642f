use crate::keypad::{Error, Key, Keypad};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use failure::format_err;

pub type QueueInput = Sender<Key>;

/// FIFO keypad where keys from other places can be injected, e.g.
/// from tests, and are then emitted one per poll.
pub struct QueueKeypad(Receiver<Key>);

impl QueueKeypad {
    pub fn new() -> (Self, QueueInput) {
        let (tx, rx) = unbounded();
        (QueueKeypad(rx), tx)
    }
}

impl Keypad for QueueKeypad {
    fn poll(&mut self) -> Result<Key, Error> {
        self.0.try_recv().map_err(|e| match e {
            TryRecvError::Empty => Error::WouldBlock,
            TryRecvError::Disconnected => {
                Error::Fatal(format_err!("Remote end disconnected from queue keypad"))
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn emits_in_order_then_blocks() {
        // given
        let (mut keypad, input) = QueueKeypad::new();

        // when
        input.send(Key::Char('0')).unwrap();
        input.send(Key::Enter).unwrap();

        // then
        assert_eq!(keypad.poll().unwrap(), Key::Char('0'));
        assert_eq!(keypad.poll().unwrap(), Key::Enter);
        assert!(match keypad.poll() {
            Err(Error::WouldBlock) => true,
            _ => false,
        });
    }

    #[test]
    fn dropped_input_is_fatal() {
        let (mut keypad, input) = QueueKeypad::new();
        drop(input);

        assert!(match keypad.poll() {
            Err(Error::Fatal(_)) => true,
            _ => false,
        });
    }
}
