use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 2D point or direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction.
    ///
    /// Produces NaN components for the zero vector; callers must guard against that.
    pub fn unit(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Counter-clockwise rotation by 90 degrees: `(-y, x)`.
    pub fn left_normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Clockwise rotation by 90 degrees: `(y, -x)`.
    pub fn right_normal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product, positive when `other` is counter-clockwise of `self`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// `(1 - t) * self + t * other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Polar angle in `(-PI, PI]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}
