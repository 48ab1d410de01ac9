/// Logs the error of a `Result` and carries on.
#[macro_export]
macro_rules! try_log {
    ($expr:expr, $context:literal) => {
        if let Err(e) = $expr {
            ::log::error!(concat!("Blink error (", $context, "): {:?}"), e);
        }
    };
}
