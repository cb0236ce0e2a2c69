//! desm0 - Tilt Monitor Firmware
//!
//! Main firmware binary for the DES Cortex-M0 SoC.
//!
//! - UART receive interrupt feeds the line receiver; the main loop drains
//!   finished lines, inverts their case and prints them back
//! - SysTick counts ticks; every `REFRESH_TICKS` the main loop reads the
//!   accelerometer axis picked on the switches and shows it on the LEDs and
//!   the numeric display
//! - Holding button D stops the tick interrupt, which freezes the display
//!   and shows the last received byte on the low LEDs instead

#![no_std]
#![no_main]

use core::fmt::Write as _;

use cortex_m_rt::{entry, exception};
use defmt::{debug, info, warn};
use embedded_hal::delay::DelayNs;
use portable_atomic::{AtomicU32, Ordering};
use {defmt_rtt as _, panic_probe as _};

use desm0_core::console::Console;
use desm0_core::line::{invert_case, LineReceiver};
use desm0_core::monitor::TiltMonitor;
use desm0_core::pause::{PauseChange, RefreshPause};
use desm0_drivers::accel::Adxl362;
use desm0_drivers::spi::BitBangSpi;
use desm0_hal::{countdown_elapsed, Interrupt, InterruptControl, OutputPort, TickTimer, UartRx};
use desm0_hal_soc::{
    AclLines, BusyDelay, Button, Buttons, Display, Leds, Nvic, SocInterrupt, Switches,
    SysTickTimer, Uart,
};

mod config;

use crate::config::{
    ACCEL_INIT, CALIBRATION_WAITS, CORE_CLOCK_HZ, REFRESH_PERIOD_MS, REFRESH_TICKS, RX_CAPACITY,
    SPI_HALF_BIT_NS, SYSTICK_RELOAD, TICK_RATE_MHZ,
};

/// Line buffer shared between the UART interrupt and the main loop
static RECEIVER: LineReceiver<RX_CAPACITY> = LineReceiver::new();

/// SysTick overflows since start-up
static TICKS: AtomicU32 = AtomicU32::new(0);

/// Main entry point
#[entry]
fn main() -> ! {
    info!("desm0 tilt monitor starting");

    let Some(cp) = cortex_m::Peripherals::take() else {
        defmt::panic!("core peripherals already taken");
    };

    // Console first so start-up messages have somewhere to go
    let mut uart = Uart::new();
    uart.enable_rx_interrupt();
    let mut console = Console::new(uart);
    let _ = writeln!(console, "\n\nWelcome to Cortex-M0 SoC");

    // Accelerometer on the bit-banged port
    let spi = BitBangSpi::new(
        AclLines::new(),
        BusyDelay::new(CORE_CLOCK_HZ),
        SPI_HALF_BIT_NS,
    );
    let mut accel = Adxl362::new(spi);
    if accel.identify() {
        info!("ADXL362 found");
    } else {
        warn!("ADXL362 ID mismatch, readings may be garbage");
    }
    accel.apply(ACCEL_INIT);
    info!("Accelerometer configured ({} writes)", ACCEL_INIT.len());

    // Tick timer
    let mut tick = SysTickTimer::new(cp.SYST);
    tick.start(SYSTICK_RELOAD);
    info!(
        "SysTick: reload {}, {} mHz, refresh every {} ticks ({} ms)",
        SYSTICK_RELOAD, TICK_RATE_MHZ, REFRESH_TICKS, REFRESH_PERIOD_MS
    );

    calibrate_delay(&tick);

    // Receive interrupt last: nothing above drains the line receiver
    let mut nvic = Nvic::new();
    nvic.enable(Interrupt::UartRx);
    info!("UART receive interrupt enabled, {} byte buffer", RX_CAPACITY);

    let mut monitor = TiltMonitor::new(accel, Leds::new(), Switches::new(), Display::new());
    let buttons = Buttons::new();

    let _ = write!(console, "\nType some characters: ");

    let mut last_refresh = TICKS.load(Ordering::Relaxed);
    let mut pause = RefreshPause::new();
    let mut overruns_seen = 0;

    loop {
        if let Some(line) = RECEIVER.drain_map(&mut nvic, invert_case) {
            let _ = write!(console, "\n:--> |");
            console.put_bytes(&line);
            let _ = write!(console, "|\n\nType some characters: ");
            debug!("Line of {} bytes", line.len());
        }

        let overruns = RECEIVER.echo_overruns();
        if overruns != overruns_seen {
            warn!("Echo overrun: {} bytes may be lost", overruns - overruns_seen);
            overruns_seen = overruns;
        }

        match pause.update(buttons.is_pressed(Button::Down), &mut tick) {
            Some(PauseChange::Paused) => info!("Refresh paused"),
            Some(PauseChange::Resumed) => info!("Refresh resumed"),
            None => {}
        }

        if pause.is_paused() {
            if let Some(byte) = RECEIVER.last_byte() {
                monitor.leds_mut().write_low(byte);
            }
        } else {
            let now = TICKS.load(Ordering::Relaxed);
            if now.wrapping_sub(last_refresh) >= REFRESH_TICKS {
                last_refresh = now;
                let reading = monitor.refresh();
                debug!("{}: raw {} leds {=u16:#x}", reading.axis, reading.raw, reading.leds);
            }
        }

        // A pending interrupt still wakes wfi with PRIMASK set, so a line
        // closing after the check is handled on the next pass. While paused
        // the button has to be polled.
        cortex_m::interrupt::free(|_| {
            if pause.may_sleep() && !RECEIVER.is_ready() {
                cortex_m::asm::wfi();
            }
        });
    }
}

/// Measure the busy-wait delay against SysTick and log it
fn calibrate_delay(tick: &SysTickTimer) {
    let mut delay = BusyDelay::new(CORE_CLOCK_HZ);

    let start = tick.current();
    for _ in 0..CALIBRATION_WAITS {
        delay.delay_ns(SPI_HALF_BIT_NS);
    }
    let end = tick.current();

    let measured = countdown_elapsed(start, end, SYSTICK_RELOAD);
    let expected = delay
        .cycles(SPI_HALF_BIT_NS)
        .saturating_mul(CALIBRATION_WAITS);
    info!(
        "Half-bit delay: {} ns requested, {} cycles expected, {} measured over {} waits",
        SPI_HALF_BIT_NS, expected, measured, CALIBRATION_WAITS
    );
}

#[exception]
fn SysTick() {
    TICKS.fetch_add(1, Ordering::Relaxed);
}

/// External interrupts; the UART is the only one enabled
#[exception]
unsafe fn DefaultHandler(irqn: i16) {
    if SocInterrupt::from_irqn(irqn) == Some(SocInterrupt::Uart) {
        let mut uart = Uart::new();
        let byte = uart.read_byte();
        RECEIVER.on_byte_received(byte, &mut uart);
    }
}
