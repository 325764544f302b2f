use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::content::model::{
    Category, ColorToken, Gradient, HighlightEntry, Icon, ImageRef, ImageStatus, ProjectEntry,
    SkillEntry,
};
use crate::foundation::error::{FolioError, FolioResult};

/// Immutable page content injected into the section views at session start.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentCatalog {
    /// Skill bars, in display order.
    pub skills: Vec<SkillEntry>,
    /// About-section highlight cards.
    pub highlights: Vec<HighlightEntry>,
    /// Project gallery.
    pub projects: Vec<ProjectEntry>,
    /// Hero technology pills.
    #[serde(default)]
    pub hero_tech: Vec<String>,
}

impl ContentCatalog {
    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse content catalog JSON: {e}")))
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open content catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check entity invariants: skill levels in range, unique project ids, usable links.
    pub fn validate(&self) -> FolioResult<()> {
        for skill in &self.skills {
            skill.validate()?;
        }

        let mut ids = HashSet::with_capacity(self.projects.len());
        for p in &self.projects {
            if !ids.insert(p.id) {
                return Err(FolioError::validation(format!(
                    "duplicate project id {}",
                    p.id
                )));
            }
            if p.title.trim().is_empty() {
                return Err(FolioError::validation(format!(
                    "project {} has an empty title",
                    p.id
                )));
            }
            if !(p.live_url.starts_with("https://") || p.live_url.starts_with("http://")) {
                return Err(FolioError::validation(format!(
                    "project {} live_url '{}' must be an http(s) URL",
                    p.id, p.live_url
                )));
            }
        }

        for h in &self.highlights {
            if h.title.trim().is_empty() {
                return Err(FolioError::validation("highlight title must be non-empty"));
            }
        }
        Ok(())
    }

    /// Project by id.
    pub fn project(&self, id: u32) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Check each project image under `assets_root`. Missing files are a soft failure.
    pub fn image_statuses(&self, assets_root: &Path) -> Vec<(u32, ImageStatus)> {
        self.projects
            .iter()
            .map(|p| {
                let status = if assets_root.join(&p.image.path).is_file() {
                    ImageStatus::Available
                } else {
                    tracing::warn!(
                        project = p.id,
                        path = %p.image.path,
                        "project image missing; using placeholder"
                    );
                    ImageStatus::Missing
                };
                (p.id, status)
            })
            .collect()
    }

    /// The page's built-in content.
    pub fn builtin() -> Self {
        fn skill(name: &str, level: u8, color: ColorToken) -> SkillEntry {
            SkillEntry {
                name: name.to_owned(),
                level,
                color,
            }
        }

        fn highlight(icon: Icon, title: &str, description: &str) -> HighlightEntry {
            HighlightEntry {
                icon,
                title: title.to_owned(),
                description: description.to_owned(),
            }
        }

        fn project(
            id: u32,
            title: &str,
            description: &str,
            category: Category,
            tech: &[&str],
            gradient: Gradient,
            live_url: &str,
        ) -> ProjectEntry {
            ProjectEntry {
                id,
                title: title.to_owned(),
                description: description.to_owned(),
                image: ImageRef {
                    path: format!("images/{id}.png"),
                },
                category,
                tech: tech.iter().map(|t| (*t).to_owned()).collect(),
                gradient,
                live_url: live_url.to_owned(),
            }
        }

        use Category::*;
        use ColorToken::*;
        use Gradient::*;

        Self {
            skills: vec![
                skill("HTML/CSS", 95, Primary),
                skill("JavaScript (ES6+)", 90, Primary),
                skill("React / Next.js", 88, Primary),
                skill("Flutter Mobile", 85, Accent),
                skill("PHP / Backend", 82, Primary),
                skill("Firebase Auth/DB", 87, Accent),
                skill("MySQL Development", 80, Primary),
                skill("MongoDB NoSQL", 78, Accent),
            ],
            highlights: vec![
                highlight(
                    Icon::Code2,
                    "Best Programmer Standards",
                    "Writing maintainable, high-performance code that ensures faster delivery for \
                     complex systems.",
                ),
                highlight(
                    Icon::Palette,
                    "Strategic Thinker",
                    "Creating intuitive UI/UX with a focus on business logic and high value \
                     client results.",
                ),
                highlight(
                    Icon::Rocket,
                    "Faster Delivery",
                    "Optimized workflows to provide low cost, high-speed deployment without \
                     compromising quality.",
                ),
                highlight(
                    Icon::Zap,
                    "Young Energy",
                    "Harnessing 2025 modern stacks and tireless innovation to solve modern tech \
                     challenges.",
                ),
            ],
            projects: vec![
                project(
                    1,
                    "Horizon Travels",
                    "A modern travel agency website showcasing tour packages, destinations, and \
                     inquiry booking with a clean, trust-focused design.",
                    Website,
                    &["Wordpress", "Elementor"],
                    PrimaryToAccent,
                    "https://horizontravels.co.uk",
                ),
                project(
                    2,
                    "Ikhlas-Traveks",
                    "A professional travel and tourism website highlighting visa services, travel \
                     packages, and customer contact funnels.",
                    Website,
                    &["Wordpress", "Elementor"],
                    AccentToPrimary,
                    "https://ikhlastravel.co.uk/",
                ),
                project(
                    3,
                    "Fresh Movers",
                    "A service-based business website for a moving company, featuring service \
                     details, booking requests, and location coverage.",
                    Website,
                    &["WordPress", "Gutenberg"],
                    PrimaryToAccent,
                    "https://freshmovers.ae/",
                ),
                project(
                    4,
                    "ASF Sanitary Fittings",
                    "A custom-built web application for managing sanitary product listings, \
                     inquiries, and backend product data.",
                    WebApp,
                    &["Custom Code", "PHP", "MySQL"],
                    AccentToPrimary,
                    "https://asfsanitaryfitting.com/",
                ),
                project(
                    5,
                    "Vision Sanitary Fittings",
                    "A business web application designed to showcase sanitary products with \
                     dynamic management and admin control features.",
                    WebApp,
                    &["Custom Code", "PHP", "MySQL"],
                    PrimaryToAccent,
                    "https://visionsanitaryfitting.com/",
                ),
                project(
                    6,
                    "Mobi-Sim",
                    "A Chrome extension for web developers that provides live mobile viewport \
                     previews to test and validate responsive designs in real time.",
                    ChromeExtension,
                    &["HTML", "JavaScript", "APIs"],
                    AccentToPrimary,
                    "https://chromewebstore.google.com/detail/mobi-sim/\
                     mnnaibpmgkhhopgpmaedmdnilhldhlhc",
                ),
            ],
            hero_tech: ["React", "Flutter", "Firebase", "Strategic Thinking"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/catalog.rs"]
mod tests;
