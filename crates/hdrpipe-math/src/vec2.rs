//! 2D point type for chromaticity coordinates.
//!
//! [`Vec2`] represents a point on a chromaticity diagram, either 1931 xy
//! or 1976 u'v' depending on context. The gamut geometry engine works
//! entirely in this type.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A 2D point, used for chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use hdrpipe_math::Vec2;
///
/// // Rec.709 red primary in 1931 xy
/// let red = Vec2::new(0.640, 0.330);
/// assert_eq!(red.x, 0.640);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2 {
    /// X component (x for 1931, u' for 1976)
    pub x: f32,
    /// Y component (y for 1931, v' for 1976)
    pub y: f32,
}

impl Vec2 {
    /// Zero point (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (wedge product).
    ///
    /// Returns the signed area of the parallelogram spanned by the two
    /// vectors. The sign encodes orientation: negative for a clockwise
    /// turn from `self` to `other`.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to glam.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from glam.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {}", i),
        }
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_orientation() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert!(a.cross(b) > 0.0);
        assert!(b.cross(a) < 0.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(0.3, 0.6);
        let b = Vec2::new(0.1, 0.2);
        assert_eq!(a - b, Vec2::new(0.2, 0.4));
        assert_eq!(b * 2.0, Vec2::new(0.2, 0.4));
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec2::new(0.3127, 0.3290);
        assert_eq!(Vec2::from_glam(v.to_glam()), v);
    }
}
