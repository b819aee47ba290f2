//! The [`Resolution3D`] value type.
//!
//! A resolution is either one of the canonical power-of-two cubes, a custom
//! extent, a cube shorthand, or a raw triple. Every case reduces to a [`Raw`]
//! triple via [`Resolution3D::raw`], which is the only place the cases are
//! matched on.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::texture::TextureExtent;
use crate::{Raw, ResolutionError};

/// The width, height, and depth of a volume.
///
/// Equality and hashing are structural: `Resolution3D::Cube8`,
/// `Resolution3D::cube(8)`, and `Resolution3D::custom(8, 8, 8)` are all equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Record", into = "Record")]
pub enum Resolution3D {
    /// 8×8×8.
    Cube8,
    /// 16×16×16.
    Cube16,
    /// 32×32×32.
    Cube32,
    /// 64×64×64.
    Cube64,
    /// 128×128×128.
    Cube128,
    /// 256×256×256.
    Cube256,
    /// 512×512×512.
    Cube512,
    /// 1024×1024×1024.
    Cube1024,
    /// Three independent components.
    Custom { x: i64, y: i64, z: i64 },
    /// A cube with all three sides equal.
    Cube(i64),
    /// An explicit triple. Arithmetic results are always of this case.
    Raw(Raw),
}

impl Resolution3D {
    /// The canonical cubes, in ascending order of side length.
    pub const CUBE_CASES: [Self; 8] = [
        Self::Cube8,
        Self::Cube16,
        Self::Cube32,
        Self::Cube64,
        Self::Cube128,
        Self::Cube256,
        Self::Cube512,
        Self::Cube1024,
    ];

    /// The value used when construction input is malformed.
    pub const DEFAULT_CUBE: Self = Self::Cube128;

    /// Creates a resolution with three independent components.
    pub const fn custom(x: i64, y: i64, z: i64) -> Self {
        Self::Custom { x, y, z }
    }

    /// Creates a cube with side `side`.
    pub const fn cube(side: i64) -> Self {
        Self::Cube(side)
    }

    /// Wraps an explicit triple. Never snaps onto a canonical cube.
    pub const fn from_raw(raw: Raw) -> Self {
        Self::Raw(raw)
    }

    /// Creates a resolution from float components, truncating each toward zero.
    ///
    /// Any slice that doesn't have exactly three components yields
    /// [`Self::DEFAULT_CUBE`].
    pub fn from_floats(floats: &[f64]) -> Self {
        match *floats {
            [x, y, z] => Self::custom(x as i64, y as i64, z as i64),
            _ => {
                log::debug!(
                    "expected 3 resolution components, got {}; falling back to {}",
                    floats.len(),
                    Self::DEFAULT_CUBE,
                );
                Self::DEFAULT_CUBE
            }
        }
    }

    /// Creates a resolution from a float vector.
    ///
    /// A vector exactly equal to one of the canonical cubes yields that cube.
    /// Anything else is truncated into a [`Self::Custom`].
    pub fn from_vector(vector: DVec3) -> Self {
        Self::CUBE_CASES
            .into_iter()
            .find(|case| case.vector() == vector)
            .unwrap_or_else(|| {
                let Raw { x, y, z } = Raw::truncated(vector);
                Self::custom(x, y, z)
            })
    }

    /// Creates a resolution from the size of a texture.
    ///
    /// Depth is passed through unchecked, so a 2D texture yields a
    /// resolution with a depth of one.
    pub fn from_texture<T: TextureExtent + ?Sized>(texture: &T) -> Self {
        let depth = texture.depth();
        if depth <= 1 {
            log::trace!("creating 3D resolution from texture with depth {depth}");
        }
        Self::custom(
            i64::from(texture.width()),
            i64::from(texture.height()),
            i64::from(depth),
        )
    }

    /// Returns the `(x, y, z)` triple this resolution describes.
    pub const fn raw(self) -> Raw {
        match self {
            Self::Cube8 => Raw::splat(8),
            Self::Cube16 => Raw::splat(16),
            Self::Cube32 => Raw::splat(32),
            Self::Cube64 => Raw::splat(64),
            Self::Cube128 => Raw::splat(128),
            Self::Cube256 => Raw::splat(256),
            Self::Cube512 => Raw::splat(512),
            Self::Cube1024 => Raw::splat(1024),
            Self::Custom { x, y, z } => Raw::new(x, y, z),
            Self::Cube(side) => Raw::splat(side),
            Self::Raw(raw) => raw,
        }
    }

    pub const fn x(self) -> i64 {
        self.raw().x
    }

    pub const fn y(self) -> i64 {
        self.raw().y
    }

    pub const fn z(self) -> i64 {
        self.raw().z
    }

    /// Same as [`Self::x`].
    pub const fn width(self) -> i64 {
        self.x()
    }

    /// Same as [`Self::y`].
    pub const fn height(self) -> i64 {
        self.y()
    }

    /// Same as [`Self::z`].
    pub const fn depth(self) -> i64 {
        self.z()
    }

    /// Returns the number of voxels, `x * y * z`, saturating at the `i64`
    /// bounds.
    pub const fn count(self) -> i64 {
        let Raw { x, y, z } = self.raw();
        x.saturating_mul(y).saturating_mul(z)
    }

    /// Returns a human-readable name such as `"128x128x64"`.
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Returns the components as a float vector, for scaling math.
    pub fn vector(self) -> DVec3 {
        self.raw().as_dvec3()
    }

    /// Returns the components as float values.
    pub fn floats(self) -> [f64; 3] {
        self.vector().to_array()
    }
}

impl Default for Resolution3D {
    fn default() -> Self {
        Self::DEFAULT_CUBE
    }
}

impl PartialEq for Resolution3D {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for Resolution3D {}

impl Hash for Resolution3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl fmt::Display for Resolution3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Raw { x, y, z } = self.raw();
        write!(f, "{x}x{y}x{z}")
    }
}

impl FromStr for Resolution3D {
    type Err = ResolutionError;

    /// Parses a name such as `"64x64x32"` into a [`Resolution3D::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolutionError::InvalidName(s.to_string());
        let components = s
            .split(['x', 'X'])
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match components[..] {
            [x, y, z] => Ok(Self::custom(x, y, z)),
            _ => Err(invalid()),
        }
    }
}

impl From<Raw> for Resolution3D {
    fn from(raw: Raw) -> Self {
        Self::from_raw(raw)
    }
}

impl From<DVec3> for Resolution3D {
    fn from(vector: DVec3) -> Self {
        Self::from_vector(vector)
    }
}

impl From<Vec3> for Resolution3D {
    fn from(vector: Vec3) -> Self {
        Self::from_vector(vector.as_dvec3())
    }
}

impl From<Resolution3D> for [i64; 3] {
    fn from(resolution: Resolution3D) -> Self {
        resolution.raw().to_array()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(resolution: Resolution3D) -> u64 {
        let mut hasher = DefaultHasher::new();
        resolution.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_cube_cases_decompose() {
        let sides = [8, 16, 32, 64, 128, 256, 512, 1024];
        for (case, side) in Resolution3D::CUBE_CASES.into_iter().zip(sides) {
            assert_eq!(case.raw(), Raw::splat(side));
            assert_eq!(case.count(), side * side * side);
        }
    }

    #[test]
    fn test_derived_attributes() {
        let res = Resolution3D::custom(4, 5, 6);
        assert_eq!((res.x(), res.y(), res.z()), (4, 5, 6));
        assert_eq!((res.width(), res.height(), res.depth()), (4, 5, 6));
        assert_eq!(res.count(), 120);
        assert_eq!(res.name(), "4x5x6");
        assert_eq!(res.vector(), DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(res.floats(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_structural_equality() {
        let custom = Resolution3D::custom(4, 4, 4);
        let cube = Resolution3D::cube(4);
        let raw = Resolution3D::from_raw(Raw::splat(4));
        assert_eq!(custom, cube);
        assert_eq!(cube, raw);
        assert_eq!(custom, raw);
        assert_eq!(Resolution3D::Cube8, Resolution3D::cube(8));
        assert_ne!(Resolution3D::Cube8, Resolution3D::custom(8, 8, 9));
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(
            hash_of(Resolution3D::Cube256),
            hash_of(Resolution3D::custom(256, 256, 256)),
        );
        assert_eq!(
            hash_of(Resolution3D::cube(3)),
            hash_of(Resolution3D::from_raw(Raw::splat(3))),
        );
    }

    #[test]
    fn test_from_floats() {
        assert_eq!(
            Resolution3D::from_floats(&[1.9, 2.5, 3.0]),
            Resolution3D::custom(1, 2, 3),
        );
        assert!(matches!(
            Resolution3D::from_floats(&[1.0, 2.0, 3.0]),
            Resolution3D::Custom { .. }
        ));
    }

    #[test]
    fn test_from_floats_wrong_length_falls_back() {
        assert!(matches!(
            Resolution3D::from_floats(&[1.0, 2.0]),
            Resolution3D::Cube128
        ));
        assert!(matches!(
            Resolution3D::from_floats(&[]),
            Resolution3D::Cube128
        ));
        assert!(matches!(
            Resolution3D::from_floats(&[1.0, 2.0, 3.0, 4.0]),
            Resolution3D::Cube128
        ));
    }

    #[test]
    fn test_from_vector_snaps_exact_cubes() {
        for case in Resolution3D::CUBE_CASES {
            let snapped = Resolution3D::from_vector(case.vector());
            assert_eq!(
                std::mem::discriminant(&snapped),
                std::mem::discriminant(&case)
            );
        }
        assert!(matches!(
            Resolution3D::from(DVec3::splat(128.0)),
            Resolution3D::Cube128
        ));
    }

    #[test]
    fn test_from_vector_inexact_is_custom() {
        let res = Resolution3D::from_vector(DVec3::new(128.0, 128.1, 128.0));
        assert!(matches!(
            res,
            Resolution3D::Custom {
                x: 128,
                y: 128,
                z: 128
            }
        ));
        let res = Resolution3D::from_vector(DVec3::new(10.7, 20.2, 30.9));
        assert!(matches!(
            res,
            Resolution3D::Custom {
                x: 10,
                y: 20,
                z: 30
            }
        ));
    }

    #[test]
    fn test_from_f32_vector() {
        assert!(matches!(
            Resolution3D::from(Vec3::splat(64.0)),
            Resolution3D::Cube64
        ));
        assert!(matches!(
            Resolution3D::from(Vec3::new(64.0, 32.0, 16.0)),
            Resolution3D::Custom { .. }
        ));
    }

    #[test]
    fn test_from_raw_never_snaps() {
        let res = Resolution3D::from(Raw::splat(128));
        assert!(matches!(res, Resolution3D::Raw(_)));
        assert_eq!(res, Resolution3D::Cube128);
    }

    #[test]
    fn test_degenerate_components_pass_through() {
        let res = Resolution3D::custom(-2, 3, 0);
        assert_eq!(res.count(), 0);
        assert_eq!(Resolution3D::custom(-2, 3, 4).count(), -24);
        assert_eq!(res.name(), "-2x3x0");
    }

    #[test]
    fn test_count_saturates() {
        let res = Resolution3D::cube(10) / Resolution3D::cube(0);
        assert_eq!(res.count(), i64::MAX);
        assert_eq!(Resolution3D::custom(i64::MIN, 2, 1).count(), i64::MIN);
        assert_eq!(Resolution3D::cube(1 << 22).count(), i64::MAX);
    }

    #[test]
    fn test_default() {
        assert!(matches!(Resolution3D::default(), Resolution3D::Cube128));
    }

    #[test]
    fn test_parse_name() {
        let res: Resolution3D = "64x32x16".parse().unwrap();
        assert!(matches!(
            res,
            Resolution3D::Custom {
                x: 64,
                y: 32,
                z: 16
            }
        ));
        assert_eq!(
            " 8 X 8 x 8 ".parse::<Resolution3D>().unwrap(),
            Resolution3D::Cube8
        );
        assert_eq!(
            "-3x-3x-3".parse::<Resolution3D>().unwrap(),
            Resolution3D::cube(-3)
        );
    }

    #[test]
    fn test_parse_invalid_name() {
        for name in ["", "8x8", "8x8x8x8", "8xAx8", "8.5x8x8"] {
            assert!(matches!(
                name.parse::<Resolution3D>(),
                Err(ResolutionError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_into_array() {
        let array: [i64; 3] = Resolution3D::Cube16.into();
        assert_eq!(array, [16, 16, 16]);
    }
}
