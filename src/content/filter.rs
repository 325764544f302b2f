use crate::content::model::{Category, ProjectEntry};

/// Label of the catch-all filter choice.
pub const ALL_LABEL: &str = "All";

/// Currently selected gallery category.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum Selection {
    /// Show every project.
    #[default]
    All,
    /// Show one category.
    Only(Category),
    /// A label that names no known category; matches nothing.
    Unrecognized(String),
}

impl Selection {
    /// Interpret a filter label. Never fails: unknown labels select nothing.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            return Self::All;
        }
        match Category::from_label(label) {
            Some(c) => Self::Only(c),
            None => Self::Unrecognized(label.to_owned()),
        }
    }

    /// Label as shown on the active control.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(c) => c.label(),
            Self::Unrecognized(s) => s,
        }
    }

    /// `true` when `project` passes this selection.
    pub fn matches(&self, project: &ProjectEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == *c,
            Self::Unrecognized(_) => false,
        }
    }
}

/// Category filter state owned by the projects view.
#[derive(Clone, Debug, Default)]
pub struct CategoryFilter {
    selection: Selection,
}

impl CategoryFilter {
    /// Filter starting at "All".
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category by label; takes effect immediately.
    pub fn set_category(&mut self, label: &str) {
        let next = Selection::from_label(label);
        if next != self.selection {
            tracing::debug!(from = self.selection.label(), to = next.label(), "category changed");
        }
        self.selection = next;
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Projects passing the current selection, in their original order.
    pub fn visible<'a>(&self, projects: &'a [ProjectEntry]) -> Vec<&'a ProjectEntry> {
        projects
            .iter()
            .filter(|p| self.selection.matches(p))
            .collect()
    }
}

/// Filter choices: "All" followed by the categories present in `projects`, first-seen order.
pub fn categories(projects: &[ProjectEntry]) -> Vec<&'static str> {
    let mut out = vec![ALL_LABEL];
    for p in projects {
        let label = p.category.label();
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/content/filter.rs"]
mod tests;
