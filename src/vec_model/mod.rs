mod arith;
mod assign;
mod convert;
mod geometry;
mod swizzle;

pub use self::convert::*;

/// equality tolerance used by [`Vector::equals`]
pub const EPSILON: f64 = f64::EPSILON;

/// mathmatic 2d vector
///
/// plain value, copied freely; methods taking `self` never modify the
/// receiver, `i` prefixed methods write into the operand they name
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Create vector from angle (radians) and magnitude
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        Vector {
            x: angle.cos() * magnitude,
            y: angle.sin() * magnitude,
        }
    }
}
