use crate::foundation::core::Rgba8;
use crate::foundation::error::{FolioError, FolioResult};
use crate::scene::model::{SceneSample, SceneSpec};
use crate::scene::theme::Palette;

/// A rasterized scene frame as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl SceneFrameRGBA {
    /// Fully transparent frame of the given size.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// `true` when every pixel has zero alpha.
    pub fn is_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Wrap the pixels as an [`image::RgbaImage`].
    pub fn to_image(&self) -> FolioResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            FolioError::scene(format!(
                "frame buffer of {} bytes does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

/// Rasterizer for sampled scenes.
pub trait SceneBackend {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Draw `sample` of `spec` with `palette`.
    fn render(
        &mut self,
        spec: &SceneSpec,
        sample: &SceneSample,
        palette: &Palette,
    ) -> FolioResult<SceneFrameRGBA>;
}

/// What the host can rasterize with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneCapability {
    /// CPU rasterizer, always available.
    #[default]
    Cpu,
    /// No rendering; the scene area stays transparent.
    Unsupported,
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSettings {
    /// Output width.
    pub width: u32,
    /// Output height.
    pub height: u32,
    /// If set, the frame is cleared to this color before drawing.
    #[serde(default)]
    pub clear: Option<Rgba8>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            clear: None,
        }
    }
}

impl SceneSettings {
    /// Output size must be non-zero.
    pub fn validate(&self) -> FolioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FolioError::scene("scene output size must be non-zero"));
        }
        Ok(())
    }
}

/// Create a scene backend for `capability`.
pub fn create_backend(
    capability: SceneCapability,
    settings: &SceneSettings,
) -> FolioResult<Box<dyn SceneBackend>> {
    settings.validate()?;
    match capability {
        SceneCapability::Cpu => Ok(Box::new(crate::scene::cpu::CpuSceneBackend::new(*settings))),
        SceneCapability::Unsupported => Err(FolioError::scene(
            "no scene backend available on this host",
        )),
    }
}

/// Render with `backend`, falling back to a transparent frame when there is no backend or the
/// backend fails. Failures are logged, never propagated.
pub fn render_or_transparent(
    backend: Option<&mut dyn SceneBackend>,
    settings: &SceneSettings,
    spec: &SceneSpec,
    sample: &SceneSample,
    palette: &Palette,
) -> SceneFrameRGBA {
    let Some(backend) = backend else {
        return SceneFrameRGBA::transparent(settings.width, settings.height);
    };
    match backend.render(spec, sample, palette) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!(
                backend = backend.name(),
                error = %e,
                "scene render failed; drawing nothing"
            );
            SceneFrameRGBA::transparent(settings.width, settings.height)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/backend.rs"]
mod tests;
