use core::fmt::Write;
use heapless::String;
use log::info;

const WIDTH: usize = 50;

pub fn banner(msg: &str) -> String<128> {
    let mut s: String<128> = String::new();
    let msg_len = msg.len() + 2;
    let stars = (WIDTH.saturating_sub(msg_len)) / 2;

    for _ in 0..stars {
        s.push('*').ok();
    }
    write!(s, " {} ", msg).ok();
    while s.len() < WIDTH {
        s.push('*').ok();
    }
    s
}

pub fn log_banner(msg: &str) {
    info!("{}", banner(msg));
}

#[cfg(test)]
mod tests {
    use super::banner;

    #[test]
    fn test_banner_is_centred() {
        let line = banner("Semaphore demo");
        assert_eq!(line.len(), 50);
        let expected = format!("{} Semaphore demo {}", "*".repeat(17), "*".repeat(17));
        assert_eq!(line.as_str(), expected);
    }

    #[test]
    fn test_banner_long_message_has_no_padding() {
        let msg = "a message that is definitely longer than fifty columns";
        let line = banner(msg);
        assert_eq!(line.as_str(), " a message that is definitely longer than fifty columns ");
    }
}
