//! Semaphore demo for the dual-core ESP32.
//!
//! Reads a delay from the serial console, hands it to a blink task running
//! on the APP core and waits on a binary semaphore until the task confirms
//! that it got the value.

//% CHIPS: esp32
//% FEATURES: embassy esp-hal/unstable

#![no_std]
#![no_main]
#![feature(impl_trait_in_assoc_type)]

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[allow(unused_imports)]
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use log::error;

use blink_core::BinarySemaphore;

mod main_core;
mod second_core;

use main_core::setup;

/// Given by the blink task once it holds its own copy of the delay.
pub(crate) static PARAM_RECEIVED: BinarySemaphore<CriticalSectionRawMutex> =
    BinarySemaphore::new();

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Dropping the guard parks the APP core, so it lives as long as main.
    let _guard = match setup(peripherals, &PARAM_RECEIVED).await {
        Ok(guard) => Some(guard),
        Err(e) => {
            error!("Setup failed: {}", e);
            None
        }
    };

    core::future::pending::<()>().await;
}
