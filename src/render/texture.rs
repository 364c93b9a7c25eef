//! Texture loading and GPU management

use image::GenericImageView;
use std::path::Path;
use wgpu::util::DeviceExt;

/// A GPU texture with its view and sampler
#[derive(Debug)]
pub struct Texture {
    /// The GPU texture
    pub texture: wgpu::Texture,
    /// Texture view for binding
    pub view: wgpu::TextureView,
    /// Sampler for texture filtering
    pub sampler: wgpu::Sampler,
    /// Texture dimensions
    pub size: wgpu::Extent3d,
}

impl Texture {
    /// Load a texture from a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
        label: Option<&str>,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| TextureError::IoError(e.to_string()))?;
        Self::from_bytes(device, queue, &bytes, label)
    }

    /// Load a texture from raw bytes (PNG, JPEG, etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded as an image
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: Option<&str>,
    ) -> Result<Self, TextureError> {
        let img =
            image::load_from_memory(bytes).map_err(|e| TextureError::DecodeError(e.to_string()))?;

        // Tiled UVs expect a bottom-left image origin
        let img = img.flipv();
        let rgba = img.to_rgba8();
        let dimensions = img.dimensions();

        Self::from_rgba(device, queue, &rgba, dimensions, label)
    }

    /// Create a texture from raw RGBA data
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &[u8],
        dimensions: (u32, u32),
        label: Option<&str>,
    ) -> Result<Self, TextureError> {
        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label,
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            rgba,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Repeat wrap so tiled UV scales behave as expected
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("texture_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
            size,
        })
    }

    /// Create a 1x1 neutral gray texture, used when a scene texture
    /// fails to load
    #[must_use]
    pub fn fallback_gray(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba(
            device,
            queue,
            &[153, 153, 153, 255],
            (1, 1),
            Some("fallback_gray_texture"),
        )
        .expect("1x1 texture creation cannot fail")
    }

    /// Get texture width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Get texture height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height
    }
}

/// Errors that can occur during texture loading
#[derive(Debug, Clone)]
pub enum TextureError {
    /// IO error reading file
    IoError(String),
    /// Error decoding image data
    DecodeError(String),
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DecodeError(e) => write!(f, "Decode error: {e}"),
        }
    }
}

impl std::error::Error for TextureError {}
