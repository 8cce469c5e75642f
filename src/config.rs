//! YAML configuration of the board, the keypad vocabulary and the
//! driver process.
//!
//! Every field has a default, so an empty document is a valid config
//! and matches the deployment at the track.
use crate::result::Result;

use serde::Deserialize;

use std::env;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Overrides the "unknown" placeholder shown before any input.
pub const INITIAL_MARKER_ENV: &str = "LED_TIMING_BOARD_INITIAL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shown first while waiting for input, e.g. the car number.
    pub initial_marker: String,
    /// Shown in turn with the initial marker.
    pub ready_marker: String,
    /// Instructions selected with `*1`, `*2` and so on.
    pub instructions: Vec<String>,
    pub reset_token: String,
    pub reboot_token: String,
    /// Program and arguments run when the reboot token is entered.
    pub reboot_command: Vec<String>,
    /// Partially typed input is dropped when it grows longer than this.
    pub max_input_len: usize,
    pub poll_interval_ms: u64,
    /// How long to wait for the driver to exit on shutdown before
    /// killing it.
    pub shutdown_timeout_ms: u64,
    pub keyboard: String,
    pub driver: DriverConfig,
    pub interactive: InteractiveConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub program: String,
    pub args: Vec<String>,
}

/// Texts for the two-prompt mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractiveConfig {
    pub prefix: String,
    pub team: String,
    /// Selected with `*0`, `*1`, ... on the first prompt, zero-based.
    pub commands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_marker: "#???".to_string(),
            ready_marker: "RDY".to_string(),
            instructions: strings(&["BOX", "FEUX"]),
            reset_token: "0".to_string(),
            reboot_token: "*9999".to_string(),
            reboot_command: strings(&["reboot"]),
            max_input_len: 20,
            poll_interval_ms: 100,
            shutdown_timeout_ms: 2000,
            keyboard: "/dev/input/by-id/usb-HCT_USB_Keyboard-event-kbd".to_string(),
            driver: DriverConfig::default(),
            interactive: InteractiveConfig::default(),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            program: "bin/stdin-text-driver".to_string(),
            args: strings(&[
                "--led-rows=16",
                "--led-cols=32",
                "--led-chain=2",
                "--led-parallel=2",
                "--led-multiplexing=19",
                "--led-row-addr-type=2",
                "--led-slowdown-gpio=4",
                "-f",
                "ter-u32b.bdf",
                "-C",
                "255,255,255",
            ]),
        }
    }
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        InteractiveConfig {
            prefix: "#44 ".to_string(),
            team: "PG72".to_string(),
            commands: strings(&["", "BOX", "FUEL"]),
        }
    }
}

impl Config {
    /// Placeholders for the initial strategy, in display order.
    pub fn placeholders(&self) -> Vec<String> {
        vec![self.initial_marker.clone(), self.ready_marker.clone()]
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(marker) = env::var(INITIAL_MARKER_ENV) {
            self.initial_marker = marker;
        }
        self
    }
}

pub fn from_path(source_file: impl AsRef<Path>) -> Result<Config> {
    let mut source_file = File::open(source_file.as_ref())?;
    let config = serde_yaml::from_reader(&mut source_file)?;
    Ok(config)
}

pub fn from_str(source_string: impl AsRef<str>) -> Result<Config> {
    let config = serde_yaml::from_str(source_string.as_ref())?;
    Ok(config)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
