//! Angle constants, tolerant comparisons, and angle and unit conversions.
//!
//! Comparisons treat values within [Float::EPSILON] of each other as equal. Use the `f32`
//! instantiation for `f32` data: mixing precisions defeats the tolerance.
//!
//! Thousandths ("mils") divide a full turn into 6000 parts, so `π rad = 180° = 3000 mil`.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Meters in one nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Seconds in one hour.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Mils in half a turn.
const MILS_PER_HALF_TURN: f64 = 3000.0;

/// Degrees in half a turn.
const DEGREES_PER_HALF_TURN: f64 = 180.0;

/// A floating point type supported by this module.
pub trait Float:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Tolerance used by comparisons.
    const EPSILON: Self;
    /// Zero.
    const ZERO: Self;
    /// π.
    const PI: Self;
    /// 2π.
    const TWO_PI: Self;
    /// π/2.
    const HALF_PI: Self;

    /// Convert a constant to this type, rounding if needed.
    fn from_f64(value: f64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
}

macro_rules! impl_float {
    ($($t:ident),*) => {
        $(
            impl Float for $t {
                const EPSILON: Self = $t::EPSILON;
                const ZERO: Self = 0.0;
                const PI: Self = std::$t::consts::PI;
                const TWO_PI: Self = std::$t::consts::TAU;
                const HALF_PI: Self = std::$t::consts::FRAC_PI_2;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    $t::abs(self)
                }

                #[inline]
                fn atan2(self, x: Self) -> Self {
                    $t::atan2(self, x)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Returns true if `value` is within epsilon of zero.
pub fn is_zero<T: Float>(value: T) -> bool {
    value.abs() <= T::EPSILON
}

/// Returns true if `value` is further than epsilon from zero.
pub fn is_non_zero<T: Float>(value: T) -> bool {
    value.abs() > T::EPSILON
}

/// Returns true if `a` and `b` are within epsilon of each other.
pub fn is_equal<T: Float>(a: T, b: T) -> bool {
    (a - b).abs() <= T::EPSILON
}

/// Returns `-1` for values below `-EPSILON` and `1` otherwise (including values near zero).
pub fn sign<T: Float>(value: T) -> i32 {
    if value < -T::EPSILON {
        -1
    } else {
        1
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [Ord::clamp], this does not panic when `min > max`: `max` is checked first.
pub fn bound<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        return max;
    }
    if value < min {
        return min;
    }
    value
}

/// Four-quadrant arc tangent of `y / x` with the axes snapped exactly.
///
/// When either coordinate is within epsilon of zero the result is exactly `π/2` (positive `y`),
/// `-π/2` (negative `y`), `π` (negative `x`) or `0`.
pub fn arc_tan<T: Float>(y: T, x: T) -> T {
    if is_zero(x) || is_zero(y) {
        if y > T::EPSILON {
            return T::HALF_PI;
        }
        if -y > T::EPSILON {
            return -T::HALF_PI;
        }
        if -x > T::EPSILON {
            return T::PI;
        }
        return T::ZERO;
    }
    y.atan2(x)
}

/// Reduce an angle in radians into `[0, 2π)`.
pub fn mod_2pi<T: Float>(angle: T) -> T {
    let mut angle = angle % T::TWO_PI;
    if angle < T::ZERO {
        angle = angle + T::TWO_PI;
    }
    // Adding 2π to a tiny negative remainder can round up to 2π itself
    if angle >= T::TWO_PI {
        angle = T::ZERO;
    }
    angle
}

/// Reduce an angle in radians into `(-π, π]`.
pub fn mod_pi<T: Float>(angle: T) -> T {
    let angle = mod_2pi(angle);
    if angle > T::PI {
        angle - T::TWO_PI
    } else {
        angle
    }
}

/// [arc_tan] reduced into `[0, 2π)`.
pub fn arc_tan_2pi<T: Float>(y: T, x: T) -> T {
    mod_2pi(arc_tan(y, x))
}

/// Radians to degrees.
pub fn rad_to_deg<T: Float>(rad: T) -> T {
    rad * T::from_f64(DEGREES_PER_HALF_TURN) / T::PI
}

/// Degrees to radians.
pub fn deg_to_rad<T: Float>(deg: T) -> T {
    deg * T::PI / T::from_f64(DEGREES_PER_HALF_TURN)
}

/// Degrees and arc minutes to radians.
///
/// `minutes` is added to `degrees` as-is, so negative angles need negative minutes.
pub fn deg_min_to_rad(degrees: i32, minutes: f64) -> f64 {
    deg_to_rad(degrees as f64 + minutes / 60.0)
}

/// Radians to mils.
pub fn rad_to_mil<T: Float>(rad: T) -> T {
    rad * T::from_f64(MILS_PER_HALF_TURN) / T::PI
}

/// Mils to radians.
pub fn mil_to_rad<T: Float>(mil: T) -> T {
    mil * T::PI / T::from_f64(MILS_PER_HALF_TURN)
}

/// Mils to degrees.
pub fn mil_to_deg<T: Float>(mil: T) -> T {
    mil * T::from_f64(DEGREES_PER_HALF_TURN) / T::from_f64(MILS_PER_HALF_TURN)
}

/// Degrees to mils.
pub fn deg_to_mil<T: Float>(deg: T) -> T {
    deg * T::from_f64(MILS_PER_HALF_TURN) / T::from_f64(DEGREES_PER_HALF_TURN)
}

/// Nautical miles to meters.
pub fn nautical_mile_to_meter<T: Float>(nmi: T) -> T {
    nmi * T::from_f64(METERS_PER_NAUTICAL_MILE)
}

/// Meters to nautical miles.
pub fn meter_to_nautical_mile<T: Float>(m: T) -> T {
    m / T::from_f64(METERS_PER_NAUTICAL_MILE)
}

/// Knots to meters per second.
pub fn knot_to_meter_sec<T: Float>(kn: T) -> T {
    kn * T::from_f64(METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR)
}

/// Meters per second to knots.
pub fn meter_sec_to_knot<T: Float>(ms: T) -> T {
    ms * T::from_f64(SECONDS_PER_HOUR / METERS_PER_NAUTICAL_MILE)
}
