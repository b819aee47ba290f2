//! GPU uniform block describing a volume's size.

use crate::{Resolution3D, ResolutionError};

/// GPU-compatible resolution uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ResolutionUniforms {
    /// Size of the volume in voxels along X, Y, and Z.
    pub size: [u32; 3],
    /// Total voxel count. Also pads the block to 16 bytes.
    pub count: u32,
}

impl TryFrom<Resolution3D> for ResolutionUniforms {
    type Error = ResolutionError;

    fn try_from(resolution: Resolution3D) -> Result<Self, Self::Error> {
        let size = resolution.to_uvec3()?;
        let count = u64::from(size.x)
            .checked_mul(u64::from(size.y))
            .and_then(|count| count.checked_mul(u64::from(size.z)))
            .and_then(|count| u32::try_from(count).ok())
            .ok_or(ResolutionError::VolumeOverflow(resolution))?;
        Ok(Self {
            size: size.to_array(),
            count,
        })
    }
}
