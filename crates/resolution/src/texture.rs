//! Conversions between resolutions and texture sizes.

use glam::UVec3;

use crate::{Resolution3D, ResolutionError, Result};

/// Anything with a texture-like width, height, and depth.
pub trait TextureExtent {
    /// Size along X, in texels.
    fn width(&self) -> u32;

    /// Size along Y, in texels.
    fn height(&self) -> u32;

    /// Size along Z, in texels. For 2D textures this is usually 1.
    fn depth(&self) -> u32;
}

impl TextureExtent for UVec3 {
    fn width(&self) -> u32 {
        self.x
    }

    fn height(&self) -> u32 {
        self.y
    }

    fn depth(&self) -> u32 {
        self.z
    }
}

#[cfg(feature = "wgpu")]
impl TextureExtent for wgpu::Extent3d {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn depth(&self) -> u32 {
        self.depth_or_array_layers
    }
}

#[cfg(feature = "wgpu")]
impl TextureExtent for wgpu::Texture {
    fn width(&self) -> u32 {
        wgpu::Texture::width(self)
    }

    fn height(&self) -> u32 {
        wgpu::Texture::height(self)
    }

    fn depth(&self) -> u32 {
        self.depth_or_array_layers()
    }
}

fn dimension_to_u32(axis: char, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ResolutionError::NegativeDimension { axis, value });
    }
    u32::try_from(value).map_err(|_| ResolutionError::DimensionOverflow { axis, value })
}

impl Resolution3D {
    /// Converts to an unsigned vector, failing on negative or oversized
    /// components.
    pub fn to_uvec3(self) -> Result<UVec3> {
        let raw = self.raw();
        Ok(UVec3::new(
            dimension_to_u32('x', raw.x)?,
            dimension_to_u32('y', raw.y)?,
            dimension_to_u32('z', raw.z)?,
        ))
    }

    /// Converts to a wgpu texture size, suitable for a `TextureDimension::D3`
    /// texture descriptor.
    #[cfg(feature = "wgpu")]
    pub fn to_extent3d(self) -> Result<wgpu::Extent3d> {
        let size = self.to_uvec3()?;
        Ok(wgpu::Extent3d {
            width: size.x,
            height: size.y,
            depth_or_array_layers: size.z,
        })
    }
}
