use crate::foundation::error::{FolioError, FolioResult};

/// Closed set of project categories shown in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Marketing/brochure websites.
    #[serde(rename = "Website")]
    Website,
    /// Custom web applications.
    #[serde(rename = "Web-App")]
    WebApp,
    /// Browser extensions.
    #[serde(rename = "Chrome Extension")]
    ChromeExtension,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Self::Website, Self::WebApp, Self::ChromeExtension];

    /// Display label (also the filter key).
    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::WebApp => "Web-App",
            Self::ChromeExtension => "Chrome Extension",
        }
    }

    /// Exact-match lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Symbolic icon identifiers, resolved through [`Icon::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Code brackets.
    Code2,
    /// Palette.
    Palette,
    /// Rocket.
    Rocket,
    /// Lightning bolt.
    Zap,
    /// Sparkles (hero badge).
    Sparkles,
    /// Down arrow (scroll indicator).
    ArrowDown,
    /// External link (project cards).
    ExternalLink,
}

impl Icon {
    /// Icon-set glyph name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Code2 => "code-2",
            Self::Palette => "palette",
            Self::Rocket => "rocket",
            Self::Zap => "zap",
            Self::Sparkles => "sparkles",
            Self::ArrowDown => "arrow-down",
            Self::ExternalLink => "external-link",
        }
    }
}

/// Theme color token used for skill bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Primary brand color.
    Primary,
    /// Accent color.
    Accent,
}

impl ColorToken {
    /// Utility class applied to the bar fill.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary",
            Self::Accent => "bg-accent",
        }
    }
}

/// Hover overlay gradient for project cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gradient {
    /// Primary fading into accent.
    PrimaryToAccent,
    /// Accent fading into primary.
    AccentToPrimary,
}

impl Gradient {
    /// Utility classes for the overlay.
    pub fn class(self) -> &'static str {
        match self {
            Self::PrimaryToAccent => "from-primary to-accent",
            Self::AccentToPrimary => "from-accent to-primary",
        }
    }
}

/// One skill bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillEntry {
    /// Skill name.
    pub name: String,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
    /// Bar fill color.
    pub color: ColorToken,
}

impl SkillEntry {
    /// Check the `0..=100` level invariant.
    pub fn validate(&self) -> FolioResult<()> {
        if self.level > 100 {
            return Err(FolioError::validation(format!(
                "skill '{}' level {} is outside 0..=100",
                self.name, self.level
            )));
        }
        if self.name.trim().is_empty() {
            return Err(FolioError::validation("skill name must be non-empty"));
        }
        Ok(())
    }
}

/// One "advantage" card in the about section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightEntry {
    /// Card icon.
    pub icon: Icon,
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
}

/// Static reference to a bundled image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageRef {
    /// Bundle-relative path.
    pub path: String,
}

/// Load result for an [`ImageRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    /// Asset is present.
    Available,
    /// Asset is missing; the card shows a placeholder.
    Missing,
}

/// One project card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectEntry {
    /// Unique id.
    pub id: u32,
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Screenshot.
    pub image: ImageRef,
    /// Filter category.
    pub category: Category,
    /// Technologies, in display order.
    pub tech: Vec<String>,
    /// Hover overlay.
    pub gradient: Gradient,
    /// External live link.
    pub live_url: String,
}
