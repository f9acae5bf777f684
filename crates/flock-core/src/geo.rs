//! Axis-aligned rectangles for cell bounds.
//!
//! World coordinates run from `(0, 0)` at the top-left to
//! `(world_width, world_height)`.  A cell's `Rect` is only consulted when its
//! agents are first placed; agents are free to drift outside it afterwards.

use crate::Vec2;

/// Half-open axis-aligned rectangle `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size.
    #[inline]
    pub fn from_origin_size(origin: Vec2, width: f32, height: f32) -> Self {
        Self { min: origin, max: origin + Vec2::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
