//! Immutable 2D vector used for every logical-space coordinate.
//!
//! All arithmetic returns a fresh value. Each operator accepts either another
//! [`Vector2`] (component-wise) or an `f64` (applied to both components).
//! Division by zero is left to IEEE semantics.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::Deserialize;

/// A point or direction in logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Unit vector pointing at `angle` radians from the +x axis.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between `self` and `other`.
    #[must_use]
    pub fn distance_from(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Smaller of the two components.
    #[must_use]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y)
    }
}

macro_rules! vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vector2 {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self { x: self.x $op rhs.x, y: self.y $op rhs.y }
            }
        }

        impl $trait<f64> for Vector2 {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                Self { x: self.x $op rhs, y: self.y $op rhs }
            }
        }
    };
}

vector_op!(Add, add, +);
vector_op!(Sub, sub, -);
vector_op!(Mul, mul, *);
vector_op!(Div, div, /);

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
