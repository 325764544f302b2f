use std::str::FromStr;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FolioError, FolioResult};

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    #[default]
    Dark,
}

/// Scene colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Primary shapes and lights.
    pub primary: Rgba8,
    /// Accent shapes and lights.
    pub accent: Rgba8,
    /// Particle field.
    pub particles: Rgba8,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba8 {
    Rgba8 { r, g, b, a: 255 }
}

impl Theme {
    /// Scene palette.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                primary: rgb(0x00, 0xd4, 0xff),
                accent: rgb(0x8b, 0x5c, 0xf6),
                particles: rgb(0x00, 0xd4, 0xff),
            },
            Self::Light => Palette {
                primary: rgb(0x00, 0xb4, 0xd8),
                accent: rgb(0x7c, 0x3a, 0xed),
                particles: rgb(0x00, 0x77, 0xb6),
            },
        }
    }

    /// Resolve a stored preference. `None`, `"system"` or anything unreadable falls back to
    /// `system`.
    pub fn from_preference(stored: Option<&str>, system: Theme) -> Self {
        match stored.map(str::trim) {
            Some("system") | None => system,
            Some(s) => s.parse().unwrap_or_else(|_| {
                tracing::warn!(stored = s, "ignoring unknown theme preference");
                system
            }),
        }
    }

    /// Storage key value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(FolioError::validation(format!(
                "unknown theme '{s}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/theme.rs"]
mod tests;
