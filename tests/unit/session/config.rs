use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = PageConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, PageConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.fps, Fps { num: 60, den: 1 });
    assert_eq!(cfg.spring.stiffness, 100.0);
    assert_eq!(cfg.spring.damping, 30.0);
    assert_eq!(cfg.resolved_theme(), Theme::Dark);
}

#[test]
fn partial_json_overrides_selected_fields() {
    let json = r#"{
        "viewport": { "width": 390, "height": 844 },
        "theme": "light",
        "sections": { "about": 2000 },
        "spring": { "stiffness": 200 }
    }"#;
    let cfg = PageConfig::from_reader(json.as_bytes()).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.viewport.width, 390.0);
    assert_eq!(cfg.sections.about, 2000.0);
    assert_eq!(cfg.sections.projects, 1600.0);
    assert_eq!(cfg.spring.stiffness, 200.0);
    assert_eq!(cfg.spring.damping, 30.0);
    assert_eq!(cfg.resolved_theme(), Theme::Light);
}

#[test]
fn system_preference_falls_back() {
    let cfg = PageConfig {
        theme: Some("system".into()),
        system_theme: Theme::Light,
        ..PageConfig::default()
    };
    assert_eq!(cfg.resolved_theme(), Theme::Light);
    let cfg = PageConfig {
        theme: Some("sepia".into()),
        ..PageConfig::default()
    };
    assert_eq!(cfg.resolved_theme(), Theme::Dark);
}

#[test]
fn invalid_values_are_rejected() {
    let zero_fps = PageConfig {
        fps: Fps { num: 0, den: 1 },
        ..PageConfig::default()
    };
    assert!(zero_fps.validate().is_err());

    let no_viewport = PageConfig {
        viewport: Viewport {
            width: 0.0,
            height: 800.0,
        },
        ..PageConfig::default()
    };
    assert!(no_viewport.validate().is_err());

    let mut flat = PageConfig::default();
    flat.sections.projects = -1.0;
    assert!(flat.validate().is_err());

    let mut tiny_scene = PageConfig::default();
    tiny_scene.scene.raster = Some(SceneSettings {
        width: 0,
        height: 0,
        clear: None,
    });
    assert!(tiny_scene.validate().is_err());
}

#[test]
fn unknown_fields_are_errors() {
    let err = PageConfig::from_reader(r#"{ "viewprot": {} }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
}

#[test]
fn builtin_content_when_unset() {
    let cfg = PageConfig::default();
    let content = cfg.load_content(Path::new(".")).unwrap();
    assert_eq!(content.projects.len(), 6);
    let missing = PageConfig {
        content: Some(PathBuf::from("does/not/exist.json")),
        ..PageConfig::default()
    };
    assert!(missing.load_content(Path::new(".")).is_err());
}
