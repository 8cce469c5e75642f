use crate::keypad::{Error, Key, Keypad};
use crate::result::Result;

use evdev::{Device, EventType, InputEvent, Key as Code};
use log::debug;

use std::collections::VecDeque;
use std::io;
use std::path::Path;

const KEY_DOWN: i32 = 1;

/// USB numeric keypad read from its Linux input event device, e.g.
/// `/dev/input/by-id/usb-HCT_USB_Keyboard-event-kbd`.
///
/// Only key-down events of keys on the numeric block are reported,
/// the rest of the event stream is skipped.
pub struct EvdevKeypad {
    device: Device,
    pending: VecDeque<Key>,
}

impl EvdevKeypad {
    pub fn open(device: impl AsRef<Path>) -> Result<Self> {
        let device = Device::open(device.as_ref())?;
        debug!(
            "opened keypad {}",
            device.name().unwrap_or("without a name")
        );
        Ok(EvdevKeypad {
            device,
            pending: VecDeque::new(),
        })
    }
}

impl Keypad for EvdevKeypad {
    /// Blocks until a keypad key is pressed.
    fn poll(&mut self) -> std::result::Result<Key, Error> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(key);
            }

            match self.device.fetch_events() {
                Ok(events) => self.pending.extend(events.filter_map(|e| key_for_event(&e))),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => {
                    debug!("keypad device failed: {}", e);
                    return Err(Error::fatal(e));
                }
            }
        }
    }
}

fn key_for_event(event: &InputEvent) -> Option<Key> {
    if event.event_type() != EventType::KEY || event.value() != KEY_DOWN {
        return None;
    }

    let c = match Code::new(event.code()) {
        Code::KEY_KPENTER => return Some(Key::Enter),
        Code::KEY_KPSLASH => '/',
        Code::KEY_KPASTERISK => '*',
        Code::KEY_KPMINUS => '-',
        Code::KEY_KPPLUS => '+',
        Code::KEY_KPDOT => '.',
        Code::KEY_KP0 => '0',
        Code::KEY_KP1 => '1',
        Code::KEY_KP2 => '2',
        Code::KEY_KP3 => '3',
        Code::KEY_KP4 => '4',
        Code::KEY_KP5 => '5',
        Code::KEY_KP6 => '6',
        Code::KEY_KP7 => '7',
        Code::KEY_KP8 => '8',
        Code::KEY_KP9 => '9',
        _ => return None,
    };
    Some(Key::Char(c))
}
