//! Volumetric resolutions for 3D textures and buffers.
//!
//! This crate provides a single value type, [`Resolution3D`], describing the
//! width, height, and depth of a volume:
//! - Canonical power-of-two cubes ([`Resolution3D::CUBE_CASES`], 8³ through 1024³)
//! - Arbitrary custom extents, cube shorthands, and raw triples
//! - Tri-state partial-order comparisons (see [`compare`])
//! - Arithmetic with other resolutions and with integer or float scalars
//! - A flat `{ x, y, z }` serde encoding
//!
//! All cases reduce to a single [`Raw`] triple via [`Resolution3D::raw`], and
//! everything else is derived from that.

// Documentation lints - conversion helpers don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
// Accessors are trivially pure; must_use on each adds noise
#![allow(clippy::must_use_candidate)]
// Float <-> integer casts are the documented truncation and rounding semantics
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Componentwise equality on float vectors is exact on purpose
#![allow(clippy::float_cmp)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod ops;
pub mod raw;
pub mod resolution3d;
pub mod texture;
pub mod uniforms;

pub use error::{ResolutionError, Result};
pub use raw::Raw;
pub use resolution3d::Resolution3D;
pub use texture::TextureExtent;
pub use uniforms::ResolutionUniforms;

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3, Vec3};
