use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::FolioResult;
use crate::runtime::frame_loop::{FrameLoop, FrameTick};
use crate::runtime::registry::Subscription;
use crate::scene::backend::{
    SceneBackend, SceneCapability, SceneFrameRGBA, SceneSettings, create_backend,
};
use crate::scene::model::SceneSpec;
use crate::scene::theme::Theme;

/// Observable state of a [`SceneDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DriverStatus {
    /// A backend exists and has not failed.
    pub enabled: bool,
    /// Frames rendered successfully.
    pub frames_rendered: u64,
}

/// Frame-loop callback that renders the decorative scene every frame.
///
/// Without a backend the output stays transparent. The first render failure publishes a
/// transparent frame and returns the error, which disables the callback for good.
pub struct SceneDriver {
    output: Rc<RefCell<SceneFrameRGBA>>,
    status: Rc<Cell<DriverStatus>>,
    _frame: Option<Subscription>,
}

impl SceneDriver {
    /// Create a backend for `capability` and mount it on `frame_loop`.
    pub fn mount(
        frame_loop: &FrameLoop,
        spec: Rc<SceneSpec>,
        theme: Theme,
        fps: Fps,
        capability: SceneCapability,
        settings: SceneSettings,
    ) -> FolioResult<Self> {
        settings.validate()?;
        let backend = match create_backend(capability, &settings) {
            Ok(b) => Some(b),
            Err(e) => {
                tracing::warn!(error = %e, "scene disabled; rendering transparent");
                None
            }
        };
        Ok(Self::with_backend(frame_loop, spec, theme, fps, backend, settings))
    }

    /// Mount with an explicit backend (or none).
    pub fn with_backend(
        frame_loop: &FrameLoop,
        spec: Rc<SceneSpec>,
        theme: Theme,
        fps: Fps,
        backend: Option<Box<dyn SceneBackend>>,
        settings: SceneSettings,
    ) -> Self {
        let output = Rc::new(RefCell::new(SceneFrameRGBA::transparent(
            settings.width,
            settings.height,
        )));
        let status = Rc::new(Cell::new(DriverStatus {
            enabled: backend.is_some(),
            frames_rendered: 0,
        }));

        let frame = backend.map(|mut backend| {
            let out = Rc::clone(&output);
            let st = Rc::clone(&status);
            let palette = theme.palette();
            let mut mounted_at: Option<FrameIndex> = None;
            frame_loop.register("scene", move |tick: &FrameTick| {
                let start = *mounted_at.get_or_insert(tick.frame);
                let sample = spec.sample(FrameIndex(tick.frame.since(start)), fps);
                match backend.render(&spec, &sample, &palette) {
                    Ok(frame) => {
                        *out.borrow_mut() = frame;
                        let mut s = st.get();
                        s.frames_rendered += 1;
                        st.set(s);
                        Ok(())
                    }
                    Err(e) => {
                        *out.borrow_mut() =
                            SceneFrameRGBA::transparent(settings.width, settings.height);
                        st.set(DriverStatus {
                            enabled: false,
                            ..st.get()
                        });
                        Err(e)
                    }
                }
            })
        });

        Self {
            output,
            status,
            _frame: frame,
        }
    }

    /// Current status.
    pub fn status(&self) -> DriverStatus {
        self.status.get()
    }

    /// Copy of the latest frame.
    pub fn latest(&self) -> SceneFrameRGBA {
        self.output.borrow().clone()
    }
}

impl std::fmt::Debug for SceneDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneDriver")
            .field("status", &self.status.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/driver.rs"]
mod tests;
