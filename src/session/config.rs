use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::spring::SpringConfig;
use crate::content::catalog::ContentCatalog;
use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::{FolioError, FolioResult};
use crate::scene::backend::{SceneCapability, SceneSettings};
use crate::scene::model::DEFAULT_SEED;
use crate::scene::theme::Theme;

/// Section heights in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionHeights {
    /// Hero height; never shorter than the viewport. `None` means exactly one viewport.
    pub hero: Option<f64>,
    /// About section.
    pub about: f64,
    /// Projects section.
    pub projects: f64,
    /// Contact section.
    pub contact: f64,
}

impl Default for SectionHeights {
    fn default() -> Self {
        Self {
            hero: None,
            about: 1400.0,
            projects: 1600.0,
            contact: 700.0,
        }
    }
}

/// Decorative scene configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Particle and phase seed.
    pub seed: u64,
    /// Rasterizer to request.
    pub capability: SceneCapability,
    /// Rasterize each frame at this size; `None` only samples poses.
    pub raster: Option<SceneSettings>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            capability: SceneCapability::Cpu,
            raster: None,
        }
    }
}

/// Page session configuration, read from JSON. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Initial viewport.
    pub viewport: Viewport,
    /// Frame rate of the session clock.
    pub fps: Fps,
    /// Spring applied to every parallax value.
    pub spring: SpringConfig,
    /// Stored theme preference (`"light"`, `"dark"` or `"system"`).
    pub theme: Option<String>,
    /// Theme used when the preference is absent or `"system"`.
    pub system_theme: Theme,
    /// Section heights.
    pub sections: SectionHeights,
    /// Content catalog JSON; the built-in catalog when unset.
    pub content: Option<PathBuf>,
    /// Directory project image paths are resolved against.
    pub assets_root: Option<PathBuf>,
    /// Decorative scene.
    pub scene: SceneConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            fps: Fps::default(),
            spring: SpringConfig::default(),
            theme: None,
            system_theme: Theme::Dark,
            sections: SectionHeights::default(),
            content: None,
            assets_root: None,
            scene: SceneConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse page config JSON: {e}")))
    }

    /// Parse from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open page config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every numeric setting.
    pub fn validate(&self) -> FolioResult<()> {
        Viewport::new(self.viewport.width, self.viewport.height)?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.spring.validate()?;

        let h = &self.sections;
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(FolioError::validation(format!(
                    "section height '{name}' must be finite and > 0, got {v}"
                )))
            }
        };
        if let Some(hero) = h.hero {
            positive("hero", hero)?;
        }
        positive("about", h.about)?;
        positive("projects", h.projects)?;
        positive("contact", h.contact)?;

        if let Some(raster) = &self.scene.raster {
            raster.validate()?;
        }
        Ok(())
    }

    /// Theme after applying the stored preference.
    pub fn resolved_theme(&self) -> Theme {
        Theme::from_preference(self.theme.as_deref(), self.system_theme)
    }

    /// Load and validate the configured content catalog. Relative paths resolve against `base`.
    pub fn load_content(&self, base: &Path) -> FolioResult<ContentCatalog> {
        let catalog = match &self.content {
            Some(p) => ContentCatalog::from_path(base.join(p))?,
            None => ContentCatalog::builtin(),
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
