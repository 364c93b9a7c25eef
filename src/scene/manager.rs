//! Scene setup and drawing

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::render::{LightRig, Mesh, Primitive, RenderFrame, Renderer, Texture};

use super::builder::{assemble_scene, ScenePart};

/// Texture tags and the files backing them
pub(crate) const TEXTURE_CATALOG: &[(&str, &str)] = &[
    ("wood", "wood.jpg"),
    ("stainedglass", "stainedglass.jpg"),
    ("rubber", "rubber.jpg"),
    ("stainless", "stainless.jpg"),
    ("stainless_end", "stainless_end.jpg"),
    ("rusticwood", "rusticwood.jpg"),
    ("gold", "gold-seamless-texture.jpg"),
    ("backdrop", "backdrop.jpg"),
];

/// One prepared draw call
struct DrawItem {
    primitive: Primitive,
    model_bind_group: wgpu::BindGroup,
    material_bind_group: wgpu::BindGroup,
}

/// Owns the still life: meshes, textures, and the prepared draw list.
/// Everything is built once at startup and replayed each frame.
pub struct SceneManager {
    meshes: FxHashMap<Primitive, Mesh>,
    draw_items: Vec<DrawItem>,
}

impl SceneManager {
    /// Build the scene. Missing texture files degrade to a flat gray
    /// fill rather than aborting startup.
    pub fn new(renderer: &Renderer, texture_dir: &Path) -> Self {
        let textures = Self::load_textures(renderer, texture_dir);
        let meshes = Self::load_meshes(renderer);

        renderer.update_lights(&LightRig::tabletop().to_uniform());

        let parts = assemble_scene();
        let draw_items = parts
            .iter()
            .map(|part| Self::prepare_part(renderer, part, &textures))
            .collect();

        log::info!("Scene ready: {} parts", parts.len());

        Self { meshes, draw_items }
    }

    fn load_textures(
        renderer: &Renderer,
        texture_dir: &Path,
    ) -> FxHashMap<&'static str, Texture> {
        let mut textures = FxHashMap::default();
        for (tag, file) in TEXTURE_CATALOG {
            let path: PathBuf = texture_dir.join(file);
            let texture =
                match Texture::from_path(renderer.device(), renderer.queue(), &path, Some(tag)) {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("Texture '{}' unavailable ({}), using gray fill", tag, e);
                    Texture::fallback_gray(renderer.device(), renderer.queue())
                }
            };
            textures.insert(*tag, texture);
        }
        textures
    }

    fn load_meshes(renderer: &Renderer) -> FxHashMap<Primitive, Mesh> {
        let mut meshes = FxHashMap::default();
        meshes.insert(Primitive::Plane, Mesh::plane());
        meshes.insert(Primitive::Box, Mesh::cube());
        meshes.insert(Primitive::Cylinder, Mesh::cylinder(32));
        meshes.insert(Primitive::Sphere, Mesh::sphere(32, 16));
        meshes.insert(Primitive::Torus, Mesh::torus(0.25, 32, 16));

        for mesh in meshes.values_mut() {
            renderer.upload_mesh(mesh);
        }
        meshes
    }

    fn prepare_part(
        renderer: &Renderer,
        part: &ScenePart,
        textures: &FxHashMap<&'static str, Texture>,
    ) -> DrawItem {
        let texture = textures.get(part.texture).expect("unknown texture tag");

        DrawItem {
            primitive: part.primitive,
            model_bind_group: renderer.create_model_bind_group(part.transform),
            material_bind_group: renderer.create_material_bind_group(
                &part.material,
                true,
                part.uv_scale,
                texture,
            ),
        }
    }

    /// Record the full scene into one render pass
    pub fn render(&self, renderer: &Renderer, frame: &mut RenderFrame) {
        let mut render_pass = renderer.begin_render_pass(frame);
        for item in &self.draw_items {
            let mesh = &self.meshes[&item.primitive];
            renderer.draw_mesh(
                &mut render_pass,
                mesh,
                &item.model_bind_group,
                &item.material_bind_group,
            );
        }
    }
}
