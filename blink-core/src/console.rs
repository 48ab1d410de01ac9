//! Reading an integer from the serial console.

use embassy_time::{Duration, with_timeout};
use embedded_io_async::Read;
use log::debug;

/// Result of feeding one byte to an [`IntParser`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scan {
    Pending,
    Done(i32),
}

/// Incremental decimal scanner.
///
/// Leading garbage is skipped until a digit or a `-` shows up, digits are
/// then accumulated until the first byte that is not a digit. The number
/// wraps on overflow, like a 32-bit `long`.
#[derive(Debug, Default)]
pub struct IntParser {
    value: i32,
    negative: bool,
    started: bool,
}

impl IntParser {
    pub const fn new() -> Self {
        Self {
            value: 0,
            negative: false,
            started: false,
        }
    }

    /// Feeds one byte. The byte that ends the number is swallowed.
    pub fn push(&mut self, byte: u8) -> Scan {
        match byte {
            b'0'..=b'9' => {
                self.started = true;
                self.value = self
                    .value
                    .wrapping_mul(10)
                    .wrapping_add((byte - b'0') as i32);
                Scan::Pending
            }
            b'-' if !self.started => {
                self.started = true;
                self.negative = true;
                Scan::Pending
            }
            _ if self.started => Scan::Done(self.result()),
            _ => Scan::Pending,
        }
    }

    /// Value scanned so far, for when the input stops.
    pub fn finish(self) -> i32 {
        self.result()
    }

    fn result(&self) -> i32 {
        if self.negative {
            self.value.wrapping_neg()
        } else {
            self.value
        }
    }
}

/// Reads one integer from `rx`.
///
/// The first byte is awaited without any limit. Every following byte has to
/// arrive within `timeout`, otherwise the number ends there. Nothing but a
/// digit or a sign before the timeout gives `0`.
pub async fn read_int<R: Read>(rx: &mut R, timeout: Duration) -> Result<i32, R::Error> {
    let mut parser = IntParser::new();
    let mut buf = [0u8; 1];

    if rx.read(&mut buf).await? == 0 {
        return Ok(parser.finish());
    }
    if let Scan::Done(value) = parser.push(buf[0]) {
        return Ok(value);
    }

    loop {
        let n = match with_timeout(timeout, rx.read(&mut buf)).await {
            Ok(read) => read?,
            Err(_) => {
                debug!("Console timeout, ending number");
                return Ok(parser.finish());
            }
        };
        if n == 0 {
            return Ok(parser.finish());
        }
        if let Scan::Done(value) = parser.push(buf[0]) {
            return Ok(value);
        }
    }
}
