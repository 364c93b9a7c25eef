//! Still life composition
//!
//! Every object is assembled from unit primitives scaled and placed by
//! a fixed model transform, so the whole scene reduces to a flat list
//! of parts that never changes after startup.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::render::{Material, Primitive};

/// One drawable piece of the still life
#[derive(Debug, Clone)]
pub struct ScenePart {
    pub primitive: Primitive,
    pub transform: Mat4,
    pub material: Material,
    pub texture: &'static str,
    pub uv_scale: Vec2,
}

/// Compose a model matrix from scale, per-axis rotation in degrees,
/// and a translation. Rotations apply X then Y then Z, innermost
/// first.
pub fn compose_transform(scale: Vec3, rotation_deg: Vec3, translation: Vec3) -> Mat4 {
    let rot_x = Mat4::from_quat(Quat::from_rotation_x(rotation_deg.x.to_radians()));
    let rot_y = Mat4::from_quat(Quat::from_rotation_y(rotation_deg.y.to_radians()));
    let rot_z = Mat4::from_quat(Quat::from_rotation_z(rotation_deg.z.to_radians()));

    Mat4::from_translation(translation) * rot_x * rot_y * rot_z * Mat4::from_scale(scale)
}

/// Glass mug on a rubber base with a torus handle
pub fn build_mug(position: Vec3) -> Vec<ScenePart> {
    let body_height = 1.30_f32;
    let body_radius = 0.50_f32;

    let base_height = 0.06_f32;
    let base_radius = 0.54_f32;

    let handle_scale = Vec3::new(0.34, 0.34, 0.14);
    let handle_offset = Vec3::new(body_radius + 0.30, 0.50, 0.0);

    let base_half = base_height * 0.5;
    let body_half = body_height * 0.5;

    let overlap = 0.03_f32;

    // The body and handle are dropped together so the mug reads as
    // grounded instead of floating above its base.
    let body_drop = 0.6_f32;

    let base_center_y = base_half;
    let body_center_y = base_center_y + base_half + body_half - overlap;
    let body_pos = position + Vec3::new(0.0, body_center_y - body_drop, 0.0);

    vec![
        ScenePart {
            primitive: Primitive::Cylinder,
            transform: compose_transform(
                Vec3::new(base_radius, base_height, base_radius),
                Vec3::ZERO,
                position + Vec3::new(0.0, base_center_y, 0.0),
            ),
            material: Material::rubber(),
            texture: "rubber",
            uv_scale: Vec2::splat(2.0),
        },
        ScenePart {
            primitive: Primitive::Cylinder,
            transform: compose_transform(
                Vec3::new(body_radius, body_height, body_radius),
                Vec3::ZERO,
                body_pos,
            ),
            material: Material::stained_glass(),
            texture: "stainedglass",
            uv_scale: Vec2::splat(0.8),
        },
        ScenePart {
            primitive: Primitive::Torus,
            transform: compose_transform(
                handle_scale,
                Vec3::new(0.0, 0.0, 90.0),
                body_pos + handle_offset,
            ),
            material: Material::rubber(),
            texture: "rubber",
            uv_scale: Vec2::splat(1.4),
        },
    ]
}

/// Beverage can with a slightly wider top rim
pub fn build_can(position: Vec3) -> Vec<ScenePart> {
    let body_radius = 0.45_f32;
    let body_height = 1.20_f32;

    let top_radius = 0.46_f32;
    let top_height = 0.05_f32;

    let overlap = 0.01_f32;

    let body_half = body_height * 0.5;
    let top_half = top_height * 0.5;

    let body_center_y = body_half;
    let top_center_y = body_height + top_half - overlap;

    vec![
        ScenePart {
            primitive: Primitive::Cylinder,
            transform: compose_transform(
                Vec3::new(body_radius, body_height, body_radius),
                Vec3::ZERO,
                position + Vec3::new(0.0, body_center_y, 0.0),
            ),
            material: Material::metal(),
            texture: "gold",
            uv_scale: Vec2::ONE,
        },
        ScenePart {
            primitive: Primitive::Cylinder,
            transform: compose_transform(
                Vec3::new(top_radius, top_height, top_radius),
                Vec3::ZERO,
                position + Vec3::new(0.0, top_center_y, 0.0),
            ),
            material: Material::metal(),
            texture: "stainless_end",
            uv_scale: Vec2::ONE,
        },
    ]
}

/// Thin metal coaster under the mug
pub fn build_coaster(position: Vec3) -> ScenePart {
    ScenePart {
        primitive: Primitive::Cylinder,
        transform: compose_transform(
            Vec3::new(0.90, 0.05, 0.90),
            Vec3::ZERO,
            position + Vec3::new(0.0, 0.025, 0.0),
        ),
        material: Material::metal(),
        texture: "gold",
        uv_scale: Vec2::ONE,
    }
}

/// Rustic wood block, turned a little off axis
pub fn build_wood_block(position: Vec3) -> ScenePart {
    ScenePart {
        primitive: Primitive::Box,
        transform: compose_transform(
            Vec3::new(1.2, 0.35, 0.7),
            Vec3::new(0.0, 25.0, 0.0),
            position + Vec3::new(0.0, 0.175, 0.0),
        ),
        material: Material::brick(),
        texture: "rusticwood",
        uv_scale: Vec2::ONE,
    }
}

/// Backdrop wall, a plane rotated upright behind the table
pub fn build_backdrop(position: Vec3) -> ScenePart {
    ScenePart {
        primitive: Primitive::Plane,
        transform: compose_transform(
            Vec3::new(60.0, 1.0, 16.0),
            Vec3::new(90.0, 0.0, 0.0),
            position,
        ),
        material: Material::wood(),
        texture: "backdrop",
        uv_scale: Vec2::splat(2.0),
    }
}

/// Wood table surface
fn build_floor() -> ScenePart {
    ScenePart {
        primitive: Primitive::Plane,
        transform: compose_transform(
            Vec3::new(60.0, 1.0, 60.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -15.0),
        ),
        material: Material::wood(),
        texture: "wood",
        uv_scale: Vec2::splat(10.0),
    }
}

/// Polished sphere accent piece
fn build_sphere_accent() -> ScenePart {
    ScenePart {
        primitive: Primitive::Sphere,
        transform: compose_transform(
            Vec3::splat(0.35),
            Vec3::ZERO,
            Vec3::new(-0.8, 0.35, 0.6),
        ),
        material: Material::metal(),
        texture: "stainless",
        uv_scale: Vec2::ONE,
    }
}

/// The full still life, back to front
pub fn assemble_scene() -> Vec<ScenePart> {
    let mut parts = Vec::new();

    parts.push(build_floor());
    parts.push(build_backdrop(Vec3::new(0.0, 10.0, -25.0)));

    parts.push(build_coaster(Vec3::new(-2.0, 0.0, -1.0)));
    parts.extend(build_mug(Vec3::new(-2.0, 0.0, -1.0)));

    parts.extend(build_can(Vec3::new(2.0, -0.55, -1.0)));

    parts.push(build_wood_block(Vec3::new(0.0, 0.0, 1.7)));
    parts.push(build_sphere_accent());

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_part_count() {
        // floor + backdrop + coaster + mug(3) + can(2) + block + sphere
        let parts = assemble_scene();
        assert_eq!(parts.len(), 10);
    }

    #[test]
    fn test_compose_transform_order() {
        // A point on +X of a unit part, scaled by 2, rotated 90 about
        // Y, then translated. Rotation must apply after scale.
        let m = compose_transform(
            Vec3::splat(2.0),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        );
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(5.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn test_mug_handle_sits_beside_body() {
        let parts = build_mug(Vec3::ZERO);
        let handle = &parts[2];
        assert_eq!(handle.primitive, Primitive::Torus);
        let center = handle.transform.transform_point3(Vec3::ZERO);
        assert!((center.x - 0.80).abs() < 1e-5);
    }

    #[test]
    fn test_can_top_overlaps_body() {
        let parts = build_can(Vec3::ZERO);
        let top_center = parts[1].transform.transform_point3(Vec3::ZERO);
        // Rim center sits just below the body's top edge.
        assert!(top_center.y < 1.20 + 0.025);
        assert!(top_center.y > 1.20);
    }

    #[test]
    fn test_backdrop_is_upright() {
        let part = build_backdrop(Vec3::new(0.0, 10.0, -25.0));
        // A plane normal (+Y) rotated 90 degrees about X faces +Z.
        let n = part.transform.transform_vector3(Vec3::Y).normalize();
        assert!((n - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_every_part_names_a_catalog_texture() {
        use crate::scene::manager::TEXTURE_CATALOG;

        // Draw preparation panics on a tag the catalog does not carry,
        // so every builder must stick to catalog tags
        for part in assemble_scene() {
            assert!(
                TEXTURE_CATALOG.iter().any(|(tag, _)| *tag == part.texture),
                "tag '{}' missing from the catalog",
                part.texture
            );
        }
    }
}
