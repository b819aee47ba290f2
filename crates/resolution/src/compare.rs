//! Componentwise partial-order comparisons.
//!
//! Each comparison evaluates its relation on `x`, `y`, and `z` independently
//! and returns a tri-state result:
//! - `Some(true)` if the relation holds for all three components
//! - `Some(false)` if it holds for none of them
//! - `None` if the components disagree, i.e. the two resolutions are
//!   incomparable under that relation
//!
//! [`Resolution3D`] intentionally does not implement [`PartialOrd`], since these
//! relations are not derived from a single `partial_cmp`.

use crate::Resolution3D;

fn all_or_none(x: bool, y: bool, z: bool) -> Option<bool> {
    match (x, y, z) {
        (true, true, true) => Some(true),
        (false, false, false) => Some(false),
        _ => None,
    }
}

impl Resolution3D {
    fn compare_with(self, other: Self, relation: impl Fn(i64, i64) -> bool) -> Option<bool> {
        let (lhs, rhs) = (self.raw(), other.raw());
        all_or_none(
            relation(lhs.x, rhs.x),
            relation(lhs.y, rhs.y),
            relation(lhs.z, rhs.z),
        )
    }

    /// Componentwise `>`.
    pub fn greater_than(self, other: Self) -> Option<bool> {
        self.compare_with(other, |a, b| a > b)
    }

    /// Componentwise `<`.
    pub fn less_than(self, other: Self) -> Option<bool> {
        self.compare_with(other, |a, b| a < b)
    }

    /// Componentwise `>=`.
    pub fn greater_or_equal(self, other: Self) -> Option<bool> {
        self.compare_with(other, |a, b| a >= b)
    }

    /// Componentwise `<=`.
    pub fn less_or_equal(self, other: Self) -> Option<bool> {
        self.compare_with(other, |a, b| a <= b)
    }

    /// Returns whether `other` fits inside `self` on every axis.
    ///
    /// This is [`Self::greater_or_equal`] with incomparable pairs treated as
    /// not fitting.
    pub fn contains(self, other: Self) -> bool {
        self.greater_or_equal(other) == Some(true)
    }
}
