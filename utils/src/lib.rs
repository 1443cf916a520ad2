//! Leverage common functionality shared by small tools and services.
//!
//! Each module is independent:
//! - [format]: binary and hexadecimal rendering of integers and byte slices
//! - [math]: angle constants, tolerant comparisons, angle and unit conversions
//! - [random]: seedable random number generation over inclusive ranges
//! - [time]: monotonic time meters and timeout events
//! - [platform]: identification of the compilation target

pub mod format;
pub use format::{from_hex, from_hex_formatted, hex};
pub mod math;
pub mod platform;
pub mod random;
pub mod time;
