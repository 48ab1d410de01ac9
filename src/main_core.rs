use core::fmt;
use core::ptr::addr_of_mut;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::Peripherals;
use esp_hal::system::{AppCoreGuard, Cpu, CpuControl, Stack};
use esp_hal::timer::{timg::TimerGroup, AnyTimer};
use esp_hal::uart::{self, UartRx};
use esp_hal_embassy::Executor;
use esp_println::println;
use log::{error, info};
use static_cell::StaticCell;

use blink_core::config::{CONSOLE_BAUDRATE, DEMO_TITLE, PARSE_TIMEOUT_MS, STARTUP_PAUSE_MS};
use blink_core::log_utils::log_banner;
use blink_core::{read_int, BinarySemaphore};

use crate::second_core::blink_led;

static mut APP_CORE_STACK: Stack<8192> = Stack::new();

#[derive(Debug)]
pub enum InitError {
    Uart(uart::ConfigError),
    AppCore(esp_hal::system::Error),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Uart(e) => write!(f, "Console UART error: {:?}", e),
            InitError::AppCore(e) => write!(f, "APP core start error: {:?}", e),
        }
    }
}

impl From<uart::ConfigError> for InitError {
    fn from(e: uart::ConfigError) -> Self {
        InitError::Uart(e)
    }
}

impl From<esp_hal::system::Error> for InitError {
    fn from(e: esp_hal::system::Error) -> Self {
        InitError::AppCore(e)
    }
}

/// Asks for the blink delay, starts the blink task on the APP core and
/// blocks until the task has taken the value.
///
/// The returned guard must outlive the program.
pub async fn setup(
    peripherals: Peripherals,
    received: &'static BinarySemaphore<CriticalSectionRawMutex>,
) -> Result<AppCoreGuard<'static>, InitError> {
    let timer_g1 = TimerGroup::new(peripherals.TIMG1);
    let timer0: AnyTimer = timer_g1.timer0.into();
    let timer1: AnyTimer = timer_g1.timer1.into();
    esp_hal_embassy::init([timer0, timer1]);

    let uart_config = uart::Config::default().with_baudrate(CONSOLE_BAUDRATE);
    let mut console = UartRx::new(peripherals.UART0, uart_config)?
        .with_rx(peripherals.GPIO3)
        .into_async();
    let led = Output::new(peripherals.GPIO23, Level::Low, OutputConfig::default());
    let mut cpu_control = CpuControl::new(peripherals.CPU_CTRL);

    Timer::after(Duration::from_millis(STARTUP_PAUSE_MS as u64)).await;
    println!();
    log_banner(DEMO_TITLE);
    info!("Setup running on core {}", Cpu::current() as usize);
    println!("Enter the blink delay in milliseconds");

    let timeout = Duration::from_millis(PARSE_TIMEOUT_MS as u64);
    let delay_arg = loop {
        match read_int(&mut console, timeout).await {
            Ok(value) => break value,
            Err(e) => error!("Console read failed: {:?}", e),
        }
    };
    println!("Sent: {}", delay_arg);

    let guard = cpu_control.start_app_core(unsafe { &mut *addr_of_mut!(APP_CORE_STACK) }, move || {
        static EXECUTOR: StaticCell<Executor> = StaticCell::new();
        let executor = EXECUTOR.init(Executor::new());
        executor.run(|spawner| {
            if let Err(e) = spawner.spawn(blink_led(led, delay_arg, received)) {
                error!("Could not spawn the blink task: {:?}", e);
            }
        });
    })?;

    // No timeout: without the blink task there is nothing left to do.
    received.take().await;
    println!("Value sent");

    Ok(guard)
}
