//! The raw integer triple every resolution decomposes to.

use glam::DVec3;

/// An explicit `(x, y, z)` integer triple.
///
/// No range validation is performed; negative and zero components are kept
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Raw {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Raw {
    /// Creates a new triple.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Creates a triple with all three components equal to `value`.
    pub const fn splat(value: i64) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the components as a float vector.
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Truncates each component of `vector` toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes zero.
    pub fn truncated(vector: DVec3) -> Self {
        Self::new(vector.x as i64, vector.y as i64, vector.z as i64)
    }

    /// Rounds each component of `vector` to the nearest integer, with halfway
    /// cases rounded away from zero.
    pub fn rounded(vector: DVec3) -> Self {
        Self::truncated(vector.round())
    }

    /// Applies `f` to each component.
    pub fn map(self, f: impl Fn(i64) -> i64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines two triples componentwise.
    pub fn zip_with(self, other: Self, f: impl Fn(i64, i64) -> i64) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }
}

impl From<[i64; 3]> for Raw {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
