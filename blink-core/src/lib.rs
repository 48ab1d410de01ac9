//! Chip-independent parts of the semaphore blink demo: the console integer
//! scanner, the binary semaphore used for the parameter hand-off, the LED
//! toggle loop and the compile-time configuration.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod blink;
pub mod config;
pub mod console;
pub mod log_utils;
pub mod semaphore;

pub use blink::{BlinkPeriod, Blinker};
pub use console::{IntParser, Scan, read_int};
pub use semaphore::BinarySemaphore;
