//! Build-time configuration. Every value can be overridden by setting the
//! environment variable of the same name when building the firmware.

pub const fn or_str(opt: Option<&'static str>, default: &'static str) -> &'static str {
    if let Some(val) = opt {
        val
    } else {
        default
    }
}

/// Parses a decimal `u32`, falling back to `default` when `s` is empty,
/// contains anything but digits or does not fit.
pub const fn parse_u32_or(s: &str, default: u32) -> u32 {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return default;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return default;
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u32) {
                Some(v) => v,
                None => return default,
            },
            None => return default,
        };
        i += 1;
    }
    value
}

pub const DEMO_TITLE: &str = or_str(option_env!("DEMO_TITLE"), "Semaphore demo");

pub const CONSOLE_BAUDRATE: u32 = parse_u32_or(or_str(option_env!("CONSOLE_BAUDRATE"), ""), 115_200);

/// Inter-byte timeout while scanning the delay from the console.
pub const PARSE_TIMEOUT_MS: u32 = parse_u32_or(or_str(option_env!("PARSE_TIMEOUT_MS"), ""), 1000);

pub const STARTUP_PAUSE_MS: u32 = parse_u32_or(or_str(option_env!("STARTUP_PAUSE_MS"), ""), 1000);
