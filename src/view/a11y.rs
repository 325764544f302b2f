use crate::content::model::SkillEntry;

/// Accessibility attributes of one skill bar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SkillBarA11y {
    /// ARIA role of the track.
    pub role: &'static str,
    /// `aria-valuenow`; always the skill level.
    pub value_now: u8,
    /// `aria-valuemin`.
    pub value_min: u8,
    /// `aria-valuemax`.
    pub value_max: u8,
    /// Group `aria-label`.
    pub label: String,
}

impl SkillBarA11y {
    /// Attributes for `skill`.
    pub fn for_skill(skill: &SkillEntry) -> Self {
        Self {
            role: "progressbar",
            value_now: skill.level,
            value_min: 0,
            value_max: 100,
            label: format!("{} skill level {}%", skill.name, skill.level),
        }
    }
}

/// Accessibility attributes of the decorative scene container.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ImageA11y {
    /// Always `img`.
    pub role: &'static str,
    /// Description read in place of the canvas.
    pub label: String,
}

impl ImageA11y {
    /// `role="img"` with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            role: "img",
            label: label.into(),
        }
    }
}
