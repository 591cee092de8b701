//! Serial console behind the debug print macros.
//!
//! On the device text goes out through `esp-println`. Host builds have no
//! UART, so text is kept in a fixed buffer that can be drained with
//! [`take_captured`]; anything past its capacity is dropped.
//!
//! `heapless` and `critical-section` are only needed by that host buffer,
//! the `esp32` backend writes straight to the UART.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

pub use log::LevelFilter;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Starts the console and installs the logger at `level`.
///
/// Returns `false` if the console was already started.
pub fn begin(level: LevelFilter) -> bool {
    if STARTED.swap(true, Ordering::AcqRel) {
        return false;
    }
    backend::init(level);
    log::info!("Console started, log level {}", level);
    true
}

pub fn is_started() -> bool {
    STARTED.load(Ordering::Acquire)
}

pub fn write_fmt(args: fmt::Arguments<'_>) {
    backend::write_fmt(args);
}

#[cfg(feature = "esp32")]
mod backend {
    use core::fmt::{self, Write};

    use esp_println::{logger::init_logger, Printer};

    use super::LevelFilter;

    pub fn init(level: LevelFilter) {
        init_logger(level);
    }

    pub fn write_fmt(args: fmt::Arguments<'_>) {
        Printer.write_fmt(args).ok();
    }
}

#[cfg(not(feature = "esp32"))]
mod backend {
    use core::cell::RefCell;
    use core::fmt::{self, Write};

    use critical_section::Mutex;
    use heapless::String;

    use super::LevelFilter;
    use crate::constants::CONSOLE_CAPTURE_SIZE;

    pub(super) static CAPTURE: Mutex<RefCell<String<CONSOLE_CAPTURE_SIZE>>> =
        Mutex::new(RefCell::new(String::new()));

    // No logger is installed on the host, the caller's own one stays in charge
    pub fn init(level: LevelFilter) {
        log::set_max_level(level);
    }

    pub fn write_fmt(args: fmt::Arguments<'_>) {
        critical_section::with(|cs| {
            // a full buffer keeps what fitted
            CAPTURE.borrow_ref_mut(cs).write_fmt(args).ok();
        });
    }
}

/// Drains the text written so far (host builds only).
#[cfg(not(feature = "esp32"))]
pub fn take_captured() -> heapless::String<{ crate::constants::CONSOLE_CAPTURE_SIZE }> {
    critical_section::with(|cs| core::mem::take(&mut *backend::CAPTURE.borrow_ref_mut(cs)))
}

// Tests touching the shared console take this lock first
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
