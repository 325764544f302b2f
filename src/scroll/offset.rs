use std::str::FromStr;

use crate::foundation::core::{ElementBox, Viewport};
use crate::foundation::error::{FolioError, FolioResult};

/// A point along an element or the viewport, measured from its start edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Fraction of the measured length (`start` = 0, `center` = 0.5, `end` = 1).
    Fraction(f64),
    /// Absolute pixel distance.
    Pixels(f64),
}

impl Edge {
    /// Distance from the start edge for a box of `length` pixels.
    pub fn resolve(self, length: f64) -> f64 {
        match self {
            Self::Fraction(f) => f * length,
            Self::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let edge = match s {
            "start" => Self::Fraction(0.0),
            "center" => Self::Fraction(0.5),
            "end" => Self::Fraction(1.0),
            _ => {
                let parse = |num: &str| {
                    num.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| FolioError::validation(format!("invalid scroll edge '{s}'")))
                };
                if let Some(px) = s.strip_suffix("px") {
                    Self::Pixels(parse(px)?)
                } else if let Some(pct) = s.strip_suffix('%') {
                    Self::Fraction(parse(pct)? / 100.0)
                } else {
                    Self::Fraction(parse(s)?)
                }
            }
        };
        Ok(edge)
    }
}

/// One intersection event: "target edge meets container edge", e.g. `"start end"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetEntry {
    /// Edge on the tracked element.
    pub target: Edge,
    /// Edge on the viewport.
    pub container: Edge,
}

impl OffsetEntry {
    /// Scroll position at which this entry's edges align.
    pub fn scroll_position(self, element: ElementBox, viewport: Viewport) -> f64 {
        element.top + self.target.resolve(element.height) - self.container.resolve(viewport.height)
    }
}

impl FromStr for OffsetEntry {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(target), container, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(FolioError::validation(format!(
                "scroll offset '{s}' must be '<target> <container>'"
            )));
        };
        let target: Edge = target.parse()?;
        let container = match container {
            Some(c) => c.parse()?,
            None => target,
        };
        Ok(Self { target, container })
    }
}

/// Pair of offset entries mapping to progress 0 and progress 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    /// Entry at which progress is 0.
    pub start: OffsetEntry,
    /// Entry at which progress is 1.
    pub end: OffsetEntry,
}

impl ScrollOffset {
    /// Parse a `[start, end]` pair such as `["start end", "end start"]`.
    pub fn parse(start: &str, end: &str) -> FolioResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// `["start end", "end start"]`: from the element entering at the bottom to leaving at the top.
    pub fn through_viewport() -> Self {
        Self {
            start: OffsetEntry {
                target: Edge::Fraction(0.0),
                container: Edge::Fraction(1.0),
            },
            end: OffsetEntry {
                target: Edge::Fraction(1.0),
                container: Edge::Fraction(0.0),
            },
        }
    }

    /// `["start start", "end start"]`: from the element's top at the viewport top until it has
    /// scrolled fully out above.
    pub fn leaving_top() -> Self {
        Self {
            start: OffsetEntry {
                target: Edge::Fraction(0.0),
                container: Edge::Fraction(0.0),
            },
            end: OffsetEntry {
                target: Edge::Fraction(1.0),
                container: Edge::Fraction(0.0),
            },
        }
    }

    /// Scroll positions `(s0, s1)` for progress 0 and 1.
    pub fn span(self, element: ElementBox, viewport: Viewport) -> (f64, f64) {
        (
            self.start.scroll_position(element, viewport),
            self.end.scroll_position(element, viewport),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
