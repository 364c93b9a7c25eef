//! Material presets for the scene objects

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use super::lights::LIGHT_COUNT;

/// Phong-style material constants.
///
/// `ambient_strength` holds the intended overall ambient level; the
/// shader applies the ambient term once per light slot, so the value is
/// divided by the slot count on upload to keep the scene from washing
/// out.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub ambient_strength: f32,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Material {
    /// Glossy glazed ceramic look for the mug body
    pub fn stained_glass() -> Self {
        Self {
            ambient_strength: 0.12,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::splat(0.80),
            specular_color: Vec3::splat(0.10),
            shininess: 18.0,
        }
    }

    /// Matte rubber for the mug base and handle
    pub fn rubber() -> Self {
        Self {
            ambient_strength: 0.28,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::splat(0.05),
            shininess: 10.0,
        }
    }

    /// Soft sheen for the floor and backdrop
    pub fn wood() -> Self {
        Self {
            ambient_strength: 0.22,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::splat(0.10),
            shininess: 18.0,
        }
    }

    /// Bright highlights for the can and sphere
    pub fn metal() -> Self {
        Self {
            ambient_strength: 0.10,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::splat(0.95),
            specular_color: Vec3::splat(0.28),
            shininess: 38.0,
        }
    }

    /// Rough diffuse surface for the wood block
    pub fn brick() -> Self {
        Self {
            ambient_strength: 0.20,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::splat(0.95),
            specular_color: Vec3::splat(0.08),
            shininess: 12.0,
        }
    }

    /// Pack for the uniform buffer, dividing the ambient strength
    /// across the light slots
    pub fn to_uniform(&self, use_texture: bool, uv_scale: Vec2) -> MaterialUniform {
        MaterialUniform {
            ambient_color: self.ambient_color.into(),
            ambient_strength: self.ambient_strength / LIGHT_COUNT as f32,
            diffuse_color: self.diffuse_color.into(),
            shininess: self.shininess,
            specular_color: self.specular_color.into(),
            use_texture: if use_texture { 1.0 } else { 0.0 },
            uv_scale: uv_scale.into(),
            _pad: [0.0; 2],
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::wood()
    }
}

/// GPU layout of the material constants
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MaterialUniform {
    ambient_color: [f32; 3],
    ambient_strength: f32,
    diffuse_color: [f32; 3],
    shininess: f32,
    specular_color: [f32; 3],
    use_texture: f32,
    uv_scale: [f32; 2],
    _pad: [f32; 2],
}

impl Default for MaterialUniform {
    fn default() -> Self {
        Material::default().to_uniform(false, Vec2::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_divided_per_light() {
        let uniform = Material::rubber().to_uniform(true, Vec2::ONE);

        // 0.28 intended, spread over the 4-slot loop
        assert!((uniform.ambient_strength - 0.07).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_carries_texture_flags() {
        let on = Material::metal().to_uniform(true, Vec2::new(2.0, 3.0));
        assert_eq!(on.use_texture, 1.0);
        assert_eq!(on.uv_scale, [2.0, 3.0]);

        let off = Material::metal().to_uniform(false, Vec2::ONE);
        assert_eq!(off.use_texture, 0.0);
    }

    #[test]
    fn test_uniform_size_is_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 64);
    }
}
