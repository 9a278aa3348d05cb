//! Planar vector math on the ground plane.
//!
//! Agents move on a 2D plane spanned by the `x` and `z` axes (the renderer
//! owns `y`).  `Vec2` uses `f32` throughout — positions stay within a few
//! hundred world units of the origin, so single precision is plenty and
//! halves memory traffic in the O(n²) separation scan.
//!
//! Distance comparisons should use [`Vec2::distance_sq`] — no square roots
//! on the hot path.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Squared length below which a vector is treated as degenerate.
///
/// Normalizing a vector this short would amplify float noise into a random
/// heading; callers substitute [`Vec2::FALLBACK`] instead so NaN can never
/// enter position state.
pub const DEGENERATE_SQ: f32 = 1.0e-4;

/// A point or direction on the ground plane, stored as `(x, z)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, z: 0.0 };

    /// The defined fallback heading (+z) substituted for degenerate vectors.
    pub const FALLBACK: Vec2 = Vec2 { x: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Squared distance to `other` — the only distance form used in hot loops.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        (self - other).length_sq()
    }

    /// `true` if this vector is too short to yield a meaningful direction.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.length_sq() < DEGENERATE_SQ
    }

    /// Unit vector in the direction of `self`, or `fallback` when degenerate.
    ///
    /// Two agents at the exact same point still get a well-defined mutual
    /// facing through the fallback.
    #[inline]
    pub fn normalized_or(self, fallback: Vec2) -> Vec2 {
        let len_sq = self.length_sq();
        if len_sq < DEGENERATE_SQ {
            fallback
        } else {
            self * (1.0 / len_sq.sqrt())
        }
    }

    /// Rescale to exactly `speed` units, or `fallback * speed` when degenerate.
    ///
    /// Flocking agents are constant-speed: after force accumulation the
    /// velocity is always brought back to the configured base speed.
    #[inline]
    pub fn with_speed(self, speed: f32, fallback: Vec2) -> Vec2 {
        self.normalized_or(fallback) * speed
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.z += rhs.z;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.z * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.z)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.z)
    }
}
