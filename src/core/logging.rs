//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (tm4c129x): Uses defmt over RTT
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! The console UART carries the sensor report lines only; diagnostics never
//! go there.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tm4c129x")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "tm4c129x"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tm4c129x")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "tm4c129x"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tm4c129x")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "tm4c129x"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tm4c129x")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "tm4c129x"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tm4c129x")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "tm4c129x"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
