//! Debug print macros.
//!
//! With the `debug` feature `dprint!`, `dprintln!` and `dbegin!` talk to the
//! serial console. Without it they expand to a branch that never runs: the
//! arguments are still type-checked but nothing is evaluated or printed.
//!
//! ```ignore
//! dbegin!();
//! dprintln!("door {} changed to {}", DEVICE_NAME, state);
//! ```

/// Whether the debug macros produce output in this build
pub const ENABLED: bool = cfg!(feature = "debug");

#[cfg(feature = "debug")]
#[macro_export]
macro_rules! dprint {
    ($($arg:tt)*) => {
        $crate::console::write_fmt(format_args!($($arg)*))
    };
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! dprint {
    ($($arg:tt)*) => {
        if false {
            $crate::console::write_fmt(format_args!($($arg)*))
        }
    };
}

#[cfg(feature = "debug")]
#[macro_export]
macro_rules! dprintln {
    () => {
        $crate::console::write_fmt(format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::console::write_fmt(format_args!("{}\n", format_args!($($arg)*)))
    };
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! dprintln {
    () => {
        ()
    };
    ($($arg:tt)*) => {
        if false {
            $crate::console::write_fmt(format_args!($($arg)*))
        }
    };
}

#[cfg(feature = "debug")]
#[macro_export]
macro_rules! dbegin {
    () => {
        $crate::dbegin!($crate::console::LevelFilter::Info)
    };
    ($level:expr) => {{
        $crate::console::begin($level);
    }};
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! dbegin {
    () => {
        ()
    };
    ($level:expr) => {
        if false {
            $crate::console::begin($level);
        }
    };
}
