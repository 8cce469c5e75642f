use led_timing_board::keypad::{Error, Key, Keypad, QueueKeypad};
use led_timing_board::{App, Board, BoardError, Config};

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::{Arc, Mutex};
use std::thread::{sleep, spawn};
use std::time::{Duration, Instant};

/// Collects what the board writes while it keeps running elsewhere.
#[derive(Clone, Default)]
struct Lines(Arc<Mutex<Vec<u8>>>);

impl Lines {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn wait_for(&self, expected: &str) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if self.text().contains(expected) {
                return true;
            }
            sleep(Duration::from_millis(5));
        }
        false
    }
}

impl Write for Lines {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fast_config() -> Config {
    Config {
        poll_interval_ms: 5,
        reboot_command: vec![],
        ..Config::default()
    }
}

fn type_in(input: &led_timing_board::keypad::QueueInput, text: &str) {
    for c in text.chars() {
        input.send(Key::from_char(c).unwrap()).unwrap();
    }
}

#[test]
fn typed_position_reaches_the_sink() {
    // given
    let lines = Lines::default();
    let flag = Arc::new(AtomicBool::new(false));
    let (keypad, input) = QueueKeypad::new();
    let mut app = App::builder();
    app.config(fast_config())
        .keypad(keypad)
        .sink(lines.clone())
        .termination_flag(&flag);
    let app = app.build().unwrap();

    // when
    let running = spawn(move || app.run());
    let placeholder_shown = lines.wait_for("#???\n");
    type_in(&input, "/12\n");
    let position_shown = lines.wait_for("P12\n");
    flag.store(true, SeqCst);
    let result = running.join().unwrap();

    // then
    assert!(placeholder_shown, "expected placeholder before any input");
    assert!(position_shown, "expected position, got {:?}", lines.text());
    assert_eq!(lines.text().matches("P12").count(), 1);
    assert!(result.is_ok(), "expected clean shutdown");
}

#[test]
fn lost_keypad_shuts_everything_down() {
    // given
    let (keypad, input) = QueueKeypad::new();
    let mut app = App::builder();
    app.config(fast_config()).keypad(keypad).sink(io::sink());
    let app = app.build().unwrap();

    // when
    drop(input);
    let result = app.run();

    // then
    assert!(result.is_err(), "expected disconnected keypad to be fatal");
}

#[test]
fn missing_sink_shuts_everything_down() {
    // given
    let (keypad, _input) = QueueKeypad::new();
    let mut app = App::builder();
    app.config(fast_config()).keypad(keypad);
    let app = app.build().unwrap();

    // when
    let result = app.run();

    // then
    let err = result.expect_err("expected rendering without sink to fail");
    assert!(match err.downcast_ref::<BoardError>() {
        Some(BoardError::UninitializedSink(text)) => text == "#???",
        _ => false,
    });
}

#[test]
fn interactive_lines_are_shown_together() {
    // given
    let lines = Lines::default();
    let prompts = Lines::default();
    let mut app = App::builder();
    app.config(fast_config())
        .interactive_with(io::Cursor::new("*1\n456789\n"), prompts.clone())
        .sink(lines.clone());
    let app = app.build().unwrap();
    let board = app.board().clone();

    // when
    let result = app.run();

    // then
    assert!(result.is_ok(), "end of prompt input is a normal exit");
    assert_eq!(prompts.text(), "1? 2? 1? ");
    assert!(board.detach_sink().is_none(), "sink is closed on shutdown");
    assert!(
        lines.text().ends_with("#44 BOX\n4:56.789\n"),
        "expected both lines in one write, got {:?}",
        lines.text()
    );
}

/// Keypad that breaks on first use.
struct BrokenKeypad;

impl Keypad for BrokenKeypad {
    fn poll(&mut self) -> Result<Key, Error> {
        panic!("keypad driver bug")
    }
}

#[test]
fn panicking_keypad_shuts_everything_down() {
    // given
    let mut app = App::builder();
    app.config(fast_config()).keypad(BrokenKeypad).sink(io::sink());
    let app = app.build().unwrap();
    let (done_tx, done_rx) = crossbeam_channel::bounded(1);

    // when
    spawn(move || done_tx.send(app.run().is_err()));
    let outcome = done_rx.recv_timeout(Duration::from_secs(5)).ok();

    // then
    assert_eq!(outcome, Some(true), "expected app to stop with an error");
}

#[test]
fn board_is_driven_directly() {
    // given
    let lines = Lines::default();
    let board = Board::from_config(&fast_config());
    board.attach_sink(lines.clone());
    let start = Instant::now();
    let at = |millis| start + Duration::from_millis(millis);

    // when
    board.submit("*2");
    let shown = board.tick(at(0)).unwrap();
    let blanked = board.tick(at(1000)).unwrap();
    board.submit("*9");
    let still_blinking = board.tick(at(1100)).unwrap();
    board.submit("0");
    let reset = board.tick(at(1150)).unwrap();

    // then
    assert_eq!(shown.as_ref().map(String::as_str), Some("FEUX"));
    assert_eq!(blanked.as_ref().map(String::as_str), Some(""));
    assert_eq!(still_blinking.as_ref().map(String::as_str), Some("FEUX"));
    assert_eq!(reset.as_ref().map(String::as_str), Some("#???"));
    assert_eq!(lines.text(), "FEUX\n\nFEUX\n#???\n");
}
