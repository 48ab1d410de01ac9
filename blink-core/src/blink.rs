use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

/// Duration of each LED phase, on and off alike.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkPeriod(u32);

impl BlinkPeriod {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Takes the raw value typed on the console. A negative delay is
    /// reinterpreted as unsigned, so `-1` waits `u32::MAX` ms.
    pub const fn from_arg(arg: i32) -> Self {
        Self(arg as u32)
    }

    pub const fn as_millis(&self) -> u32 {
        self.0
    }
}

pub struct Blinker<P: OutputPin, D: DelayNs> {
    led: P,
    delay: D,
    period: BlinkPeriod,
}

impl<P: OutputPin, D: DelayNs> Blinker<P, D> {
    pub fn new(led: P, delay: D, period: BlinkPeriod) -> Self {
        Self { led, delay, period }
    }

    /// One on/off cycle.
    pub async fn cycle(&mut self) -> Result<(), P::Error> {
        let ms = self.period.as_millis();
        self.led.set_high()?;
        self.delay.delay_ms(ms).await;
        self.led.set_low()?;
        self.delay.delay_ms(ms).await;
        Ok(())
    }

    pub async fn run(mut self) -> ! {
        loop {
            try_log!(self.cycle().await, "cycle");
        }
    }
}
