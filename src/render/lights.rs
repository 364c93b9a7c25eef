//! Scene lighting
//!
//! The shader loops over a fixed array of four light slots every
//! fragment, so all four are always uploaded; unused slots are zeroed
//! and contribute nothing.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Number of light slots the shader iterates, whether used or not
pub const LIGHT_COUNT: usize = 4;

/// One light source
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    /// Specular focus; higher values tighten the highlight
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl Light {
    /// A zeroed slot that contributes nothing
    pub const fn off() -> Self {
        Self {
            position: Vec3::ZERO,
            ambient_color: Vec3::ZERO,
            diffuse_color: Vec3::ZERO,
            specular_color: Vec3::ZERO,
            focal_strength: 1.0,
            specular_intensity: 0.0,
        }
    }
}

/// The fixed four-slot rig lighting the tabletop scene
#[derive(Debug, Clone)]
pub struct LightRig {
    pub lights: [Light; LIGHT_COUNT],
}

impl LightRig {
    /// Scene rig: a neutral white back light for separation and rim
    /// highlights, a red front light to make the color tint obvious,
    /// and two disabled slots.
    pub fn tabletop() -> Self {
        Self {
            lights: [
                // White back light
                Light {
                    position: Vec3::new(0.0, 7.0, -12.0),
                    ambient_color: Vec3::splat(0.008),
                    diffuse_color: Vec3::splat(0.120),
                    specular_color: Vec3::splat(0.070),
                    focal_strength: 28.0,
                    specular_intensity: 0.60,
                },
                // Red front light
                Light {
                    position: Vec3::new(0.0, 4.0, 9.0),
                    ambient_color: Vec3::new(0.004, 0.000, 0.000),
                    diffuse_color: Vec3::new(0.420, 0.010, 0.010),
                    specular_color: Vec3::new(0.120, 0.010, 0.010),
                    focal_strength: 20.0,
                    specular_intensity: 0.85,
                },
                Light::off(),
                Light::off(),
            ],
        }
    }

    /// Pack the rig for the uniform buffer
    pub fn to_uniform(&self) -> LightsUniform {
        let mut sources = [GpuLight::zeroed(); LIGHT_COUNT];
        for (gpu, light) in sources.iter_mut().zip(self.lights.iter()) {
            *gpu = GpuLight {
                position: light.position.into(),
                focal_strength: light.focal_strength,
                ambient_color: light.ambient_color.into(),
                specular_intensity: light.specular_intensity,
                diffuse_color: light.diffuse_color.into(),
                _pad0: 0.0,
                specular_color: light.specular_color.into(),
                _pad1: 0.0,
            };
        }
        LightsUniform { sources }
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::tabletop()
    }
}

/// GPU layout of a single light slot (vec3s padded to 16 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuLight {
    position: [f32; 3],
    focal_strength: f32,
    ambient_color: [f32; 3],
    specular_intensity: f32,
    diffuse_color: [f32; 3],
    _pad0: f32,
    specular_color: [f32; 3],
    _pad1: f32,
}

/// Uniform buffer contents for the whole rig
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    pub sources: [GpuLight; LIGHT_COUNT],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_has_all_slots() {
        let rig = LightRig::tabletop();
        assert_eq!(rig.lights.len(), LIGHT_COUNT);

        // Slots 2 and 3 are disabled but still uploaded
        assert_eq!(rig.lights[2].diffuse_color, Vec3::ZERO);
        assert_eq!(rig.lights[3].specular_intensity, 0.0);
    }

    #[test]
    fn test_gpu_light_stride() {
        // Each slot must match the WGSL struct stride
        assert_eq!(std::mem::size_of::<GpuLight>(), 64);
        assert_eq!(
            std::mem::size_of::<LightsUniform>(),
            64 * LIGHT_COUNT
        );
    }

    #[test]
    fn test_front_light_is_red() {
        let rig = LightRig::tabletop();
        let front = rig.lights[1];
        assert!(front.diffuse_color.x > 10.0 * front.diffuse_color.y);
        assert!(front.position.z > 0.0);
    }
}
