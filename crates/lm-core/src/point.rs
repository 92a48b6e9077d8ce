//! Cartesian point type and angle utilities.
//!
//! The map frame is a locally projected plane (east-x, north-y, metres), so
//! plain Euclidean math is exact for our purposes.  `f64` throughout: lane
//! projections feed lateral offsets of a few centimetres into downstream
//! prediction, and `f32` would visibly quantise them.

/// A 2-D point (or vector) in the projected map frame, metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector in direction `heading` (radians, CCW from +x).
    #[inline]
    pub fn from_heading(heading: f64) -> Self {
        Self { x: heading.cos(), y: heading.sin() }
    }

    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3-D cross product. Positive when `other` lies to
    /// the left of `self`.
    #[inline]
    pub fn cross(self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (other - self).norm()
    }

    #[inline]
    pub fn distance_sq(self, other: Point2) -> f64 {
        (other - self).norm_sq()
    }

    #[inline]
    pub fn scale(self, k: f64) -> Point2 {
        Point2 { x: self.x * k, y: self.y * k }
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Wrap an angle into `(-π, π]`.
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut a = theta % two_pi;
    if a <= -std::f64::consts::PI {
        a += two_pi;
    } else if a > std::f64::consts::PI {
        a -= two_pi;
    }
    a
}

/// Signed shortest angular difference `a - b`, in `(-π, π]`.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    normalize_angle(a - b)
}

/// Linear interpolation between two angles along the shortest arc.
///
/// `t` in `[0, 1]` maps `from` → `to`; values outside the range extrapolate.
#[inline]
pub fn lerp_angle(from: f64, to: f64, t: f64) -> f64 {
    normalize_angle(from + angle_diff(to, from) * t)
}
