//! 2D point/vector type used for positions, sizes, translations and scales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An `(x, y)` pair of `f32`s.
///
/// `Pointf` is an immutable-style value type: arithmetic produces new values,
/// and equality is exact field comparison. Use [`Pointf::equals_epsilon`] for
/// tolerance-based comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointf {
    pub x: f32,
    pub y: f32,
}

impl Pointf {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Pointf = Pointf { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A point with both coordinates set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Sets both coordinates back to zero.
    pub fn reset(&mut self) {
        *self = Pointf::ORIGIN;
    }

    /// Compares two points coordinate-wise within `epsilon`.
    pub fn equals_epsilon(self, other: Pointf, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn distance_to(self, other: Pointf) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Pointf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Pointf {
    type Output = Pointf;

    fn add(self, rhs: Pointf) -> Pointf {
        Pointf::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f32> for Pointf {
    type Output = Pointf;

    fn add(self, rhs: f32) -> Pointf {
        Pointf::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Pointf {
    type Output = Pointf;

    fn sub(self, rhs: Pointf) -> Pointf {
        Pointf::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f32> for Pointf {
    type Output = Pointf;

    fn sub(self, rhs: f32) -> Pointf {
        Pointf::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul for Pointf {
    type Output = Pointf;

    fn mul(self, rhs: Pointf) -> Pointf {
        Pointf::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Pointf {
    type Output = Pointf;

    fn mul(self, rhs: f32) -> Pointf {
        Pointf::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Pointf {
    type Output = Pointf;

    fn div(self, rhs: Pointf) -> Pointf {
        Pointf::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Pointf {
    type Output = Pointf;

    fn div(self, rhs: f32) -> Pointf {
        Pointf::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Pointf {
    type Output = Pointf;

    fn neg(self) -> Pointf {
        Pointf::new(-self.x, -self.y)
    }
}

impl AddAssign for Pointf {
    fn add_assign(&mut self, rhs: Pointf) {
        *self = *self + rhs;
    }
}

impl SubAssign for Pointf {
    fn sub_assign(&mut self, rhs: Pointf) {
        *self = *self - rhs;
    }
}

impl MulAssign for Pointf {
    fn mul_assign(&mut self, rhs: Pointf) {
        *self = *self * rhs;
    }
}

impl DivAssign for Pointf {
    fn div_assign(&mut self, rhs: Pointf) {
        *self = *self / rhs;
    }
}
