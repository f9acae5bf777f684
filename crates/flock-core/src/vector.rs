//! 2-D vector arithmetic used by every steering computation.
//!
//! `Vec2` uses `f32` components: world coordinates are a few thousand units
//! at most, so single precision keeps the per-agent state small without any
//! visible drift over interactive run lengths.
//!
//! All operations are pure.  [`Vec2::normalize`] is the only fallible one:
//! it refuses zero-length input instead of silently returning a default, so
//! callers must decide what a degenerate direction means for them.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::DegenerateVectorError;

/// A 2-D vector (or point) in world coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).norm()
    }

    /// Squared distance — cheaper than [`distance`](Self::distance) for
    /// threshold comparisons.
    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (other - self).norm_squared()
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// # Errors
    /// [`DegenerateVectorError`] when the norm is zero or not finite.
    pub fn normalize(self) -> Result<Vec2, DegenerateVectorError> {
        let n = self.norm();
        if n > 0.0 && n.is_finite() {
            Ok(self / n)
        } else {
            Err(DegenerateVectorError { x: self.x, y: self.y })
        }
    }

    /// Direction angle in radians, `atan2(y, x)`, in `(-π, π]`.
    #[inline]
    pub fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rescale to at most `max` length.  Zero vectors pass through.
    pub fn clamp_length(self, max: f32) -> Vec2 {
        let n = self.norm();
        if n > max && n > 0.0 {
            self * (max / n)
        } else {
            self
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl std::iter::Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
