//! Timer-driven renderers deciding what the sign shows.
//!
//! Exactly one strategy is active on a board at a time. Each one is
//! polled with the current time and either leaves the sign as it is
//! or yields new text for it.
mod blinking;
mod fixed;
mod initial;
mod strategy;

pub use blinking::Blinking;
pub use fixed::Fixed;
pub use initial::Initial;
pub use strategy::Strategy;
