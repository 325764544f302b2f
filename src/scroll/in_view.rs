use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

use crate::foundation::core::{ElementBox, Rect, Viewport};
use crate::foundation::error::{FolioError, FolioResult};
use crate::runtime::events::{ViewportEvents, ViewportState};
use crate::runtime::registry::Subscription;
use crate::runtime::signal::NodeRef;

/// CSS-style root margin; negative values shrink the observed viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    /// Top margin in pixels.
    pub top: f64,
    /// Right margin in pixels.
    pub right: f64,
    /// Bottom margin in pixels.
    pub bottom: f64,
    /// Left margin in pixels.
    pub left: f64,
}

impl RootMargin {
    /// Same margin on all four sides.
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Expand (or shrink, for negative margins) `root` by this margin.
    pub fn apply(self, root: Rect) -> Rect {
        Rect::new(
            root.x0 - self.left,
            root.y0 - self.top,
            root.x1 + self.right,
            root.y1 + self.bottom,
        )
    }
}

impl FromStr for RootMargin {
    type Err = FolioError;

    /// Parse one to four `px` values in CSS shorthand order (top, right, bottom, left).
    fn from_str(s: &str) -> FolioResult<Self> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                tok.strip_suffix("px")
                    .unwrap_or(tok)
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| FolioError::validation(format!("invalid root margin '{s}'")))
            })
            .collect::<FolioResult<Vec<_>>>()?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => {
                return Err(FolioError::validation(format!(
                    "root margin '{s}' must have 1 to 4 values"
                )));
            }
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

/// Intersection options for entrance gating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InViewOptions {
    /// Latch the first `true` forever.
    pub once: bool,
    /// Margin applied to the viewport before testing.
    pub margin: RootMargin,
}

impl InViewOptions {
    /// `{ once: true, margin: "<px>px" }`, the form every section uses.
    pub fn once_with_margin(px: f64) -> Self {
        Self {
            once: true,
            margin: RootMargin::uniform(px),
        }
    }
}

/// `true` when `element` overlaps the margin-adjusted viewport at `scroll_y`.
pub fn intersects(
    element: ElementBox,
    viewport: Viewport,
    scroll_y: f64,
    margin: RootMargin,
) -> bool {
    let root = margin.apply(viewport.visible_rect(scroll_y));
    if root.y1 <= root.y0 || root.x1 <= root.x0 {
        return false;
    }
    let el = element.rect(viewport);
    if element.height == 0.0 {
        return root.y0 <= el.y0 && el.y0 <= root.y1;
    }
    el.y0 < root.y1 && el.y1 > root.y0
}

/// Viewport intersection state for one element.
#[derive(Clone, Copy, Debug, Default)]
pub struct InView {
    options: InViewOptions,
    seen: bool,
}

impl InView {
    /// New observer that has not seen its element yet.
    pub fn new(options: InViewOptions) -> Self {
        Self {
            options,
            seen: false,
        }
    }

    /// Observe one layout/scroll state; returns the updated signal.
    ///
    /// A missing element never intersects. With `once`, a `true` result is permanent.
    pub fn observe(
        &mut self,
        element: Option<ElementBox>,
        viewport: Viewport,
        scroll_y: f64,
    ) -> bool {
        if self.seen && self.options.once {
            return true;
        }
        self.seen = element
            .map(|el| intersects(el, viewport, scroll_y, self.options.margin))
            .unwrap_or(false);
        self.seen
    }

    /// Current signal.
    pub fn get(&self) -> bool {
        self.seen
    }
}

/// Mounted intersection observer publishing into a shared flag.
#[derive(Debug)]
pub struct InViewSignal {
    seen: Rc<Cell<bool>>,
    _listener: Subscription,
}

impl InViewSignal {
    /// Observe `node` on every scroll/resize event until dropped.
    pub fn mount(
        events: &ViewportEvents,
        label: impl Into<String>,
        node: NodeRef,
        options: InViewOptions,
    ) -> FolioResult<Self> {
        let seen = Rc::new(Cell::new(false));
        let out = Rc::clone(&seen);
        let mut observer = InView::new(options);
        let listener = events.subscribe(label, move |s: &ViewportState| {
            out.set(observer.observe(node.get(), s.viewport, s.scroll_y));
            Ok(())
        })?;
        Ok(Self {
            seen,
            _listener: listener,
        })
    }

    /// `true` once the element has been seen (see [`InView::observe`]).
    pub fn get(&self) -> bool {
        self.seen.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/in_view.rs"]
mod tests;
