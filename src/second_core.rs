use embassy_executor::task;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;
use esp_hal::gpio::Output;
use esp_hal::system::Cpu;
use esp_println::println;
use log::info;

use blink_core::{BinarySemaphore, BlinkPeriod, Blinker};

/// Confirms receipt of `delay_arg` through `received`, then blinks the LED
/// with `delay_arg` milliseconds on and the same off, forever.
#[task]
pub async fn blink_led(
    led: Output<'static>,
    delay_arg: i32,
    received: &'static BinarySemaphore<CriticalSectionRawMutex>,
) {
    received.give();

    println!("Received: {}", delay_arg);
    info!("Starting blink_led() on core {}", Cpu::current() as usize);

    Blinker::new(led, Delay, BlinkPeriod::from_arg(delay_arg)).run().await
}
