use super::*;

const SCRIPT: &str = r#"{
    "frames": 120,
    "keys": [
        { "frame": 0, "scroll_y": 0 },
        { "frame": 60, "scroll_y": 1200, "ease": "in_out_cubic" },
        { "frame": 90, "scroll_y": 1200 }
    ],
    "clicks": [{ "frame": 70, "category": "Web-App" }],
    "resizes": [{ "frame": 70, "width": 390, "height": 844 }],
    "navigations": [{ "frame": 100, "section": "contact" }]
}"#;

#[test]
fn parses_and_samples_scroll_track() {
    let script = ScrollScript::from_reader(SCRIPT.as_bytes()).unwrap();
    let timeline = script.compile().unwrap();
    assert_eq!(timeline.frames(), 120);
    assert_eq!(timeline.scroll_at(0).unwrap(), 0.0);
    assert_eq!(timeline.scroll_at(30).unwrap(), 600.0);
    assert_eq!(timeline.scroll_at(60).unwrap(), 1200.0);
    assert_eq!(timeline.scroll_at(119).unwrap(), 1200.0);
}

#[test]
fn events_are_bucketed_by_frame() {
    let timeline = ScrollScript::from_reader(SCRIPT.as_bytes())
        .unwrap()
        .compile()
        .unwrap();
    assert_eq!(
        timeline.events_at(70),
        &[
            ScriptEvent::Resize(Viewport {
                width: 390.0,
                height: 844.0
            }),
            ScriptEvent::Category("Web-App".to_owned()),
        ]
    );
    assert_eq!(
        timeline.events_at(100),
        &[ScriptEvent::Navigate(SectionId::Contact)]
    );
    assert!(timeline.events_at(5).is_empty());
}

#[test]
fn empty_script_never_scrolls() {
    let timeline = ScrollScript {
        frames: 3,
        ..ScrollScript::default()
    }
    .compile()
    .unwrap();
    assert_eq!(timeline.scroll_at(2).unwrap(), 0.0);
}

#[test]
fn invalid_scripts_are_rejected() {
    let zero = ScrollScript::default();
    assert!(zero.compile().is_err());

    let unsorted = ScrollScript {
        frames: 10,
        keys: vec![
            ScrollKey {
                frame: 5,
                scroll_y: 0.0,
                ease: Ease::Linear,
            },
            ScrollKey {
                frame: 1,
                scroll_y: 10.0,
                ease: Ease::Linear,
            },
        ],
        ..ScrollScript::default()
    };
    assert!(unsorted.compile().is_err());

    let late = ScrollScript {
        frames: 10,
        clicks: vec![CategoryClick {
            frame: 10,
            category: "All".into(),
        }],
        ..ScrollScript::default()
    };
    assert!(late.compile().is_err());

    let negative = ScrollScript {
        frames: 10,
        keys: vec![ScrollKey {
            frame: 0,
            scroll_y: -5.0,
            ease: Ease::Linear,
        }],
        ..ScrollScript::default()
    };
    assert!(negative.compile().is_err());

    assert!(matches!(
        ScrollScript::from_reader(r#"{ "frames": 1, "scroll": [] }"#.as_bytes()),
        Err(FolioError::Serde(_))
    ));
}
