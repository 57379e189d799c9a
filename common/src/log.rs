//! Status macros on top of `tracing`.
//!
//! Library crates only emit; installing a subscriber is left to the binary.
//! The terminal formatter keys its prefixes off these targets.

#[doc(hidden)]
pub use tracing;

pub const PRINT_TARGET: &str = "sweepr::print";
pub const SUCCESS_TARGET: &str = "sweepr::success";

/// A milestone worth highlighting, e.g. the end of a sweep.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}
