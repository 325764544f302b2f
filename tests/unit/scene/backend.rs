use super::*;
use crate::foundation::core::{FrameIndex, Fps};
use crate::scene::theme::Theme;

struct Failing;

impl SceneBackend for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn render(
        &mut self,
        _: &SceneSpec,
        _: &SceneSample,
        _: &Palette,
    ) -> FolioResult<SceneFrameRGBA> {
        Err(FolioError::scene("device lost"))
    }
}

#[test]
fn unsupported_capability_has_no_backend() {
    let err = create_backend(SceneCapability::Unsupported, &SceneSettings::default())
        .err()
        .unwrap();
    assert!(matches!(err, FolioError::Scene(_)));
}

#[test]
fn zero_sized_output_is_rejected() {
    let s = SceneSettings {
        width: 0,
        height: 10,
        clear: None,
    };
    assert!(create_backend(SceneCapability::Cpu, &s).is_err());
}

#[test]
fn missing_backend_renders_transparent() {
    let spec = SceneSpec::hero(2);
    let sample = spec.sample(FrameIndex(0), Fps::default());
    let s = SceneSettings::default();
    let frame = render_or_transparent(None, &s, &spec, &sample, &Theme::Dark.palette());
    assert_eq!((frame.width, frame.height), (s.width, s.height));
    assert!(frame.is_transparent());
}

#[test]
fn failing_backend_renders_transparent() {
    let spec = SceneSpec::hero(2);
    let sample = spec.sample(FrameIndex(0), Fps::default());
    let s = SceneSettings::default();
    let mut backend = Failing;
    let palette = Theme::Dark.palette();
    let frame = render_or_transparent(Some(&mut backend), &s, &spec, &sample, &palette);
    assert!(frame.is_transparent());
}

#[test]
fn cpu_backend_is_used_when_available() {
    let spec = SceneSpec::hero(2);
    let sample = spec.sample(FrameIndex(0), Fps::default());
    let s = SceneSettings {
        width: 64,
        height: 40,
        clear: None,
    };
    let mut backend = create_backend(SceneCapability::Cpu, &s).unwrap();
    assert_eq!(backend.name(), "cpu");
    let palette = Theme::Dark.palette();
    let frame = render_or_transparent(Some(backend.as_mut()), &s, &spec, &sample, &palette);
    assert!(!frame.is_transparent());
    let img = frame.to_image().unwrap();
    assert_eq!(img.dimensions(), (64, 40));
}
