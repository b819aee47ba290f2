//! Serialization of resolutions.
//!
//! A resolution is encoded as a flat `{ "x": .., "y": .., "z": .. }` record.
//! Decoding always produces [`Resolution3D::Custom`], so the originating case
//! (canonical cube, cube shorthand, raw) is not preserved across a round trip.
//! The components are.

use serde::{Deserialize, Serialize};

use crate::{Resolution3D, Result};

/// The wire form of a [`Resolution3D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Record {
    x: i64,
    y: i64,
    z: i64,
}

impl From<Record> for Resolution3D {
    fn from(Record { x, y, z }: Record) -> Self {
        Resolution3D::custom(x, y, z)
    }
}

impl From<Resolution3D> for Record {
    fn from(resolution: Resolution3D) -> Self {
        let raw = resolution.raw();
        Self {
            x: raw.x,
            y: raw.y,
            z: raw.z,
        }
    }
}

impl Resolution3D {
    /// Encodes this resolution as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a resolution from a JSON object with integer `x`, `y`, and `z`
    /// fields. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
