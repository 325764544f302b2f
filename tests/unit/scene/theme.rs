use super::*;

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(Theme::from_preference(Some("light"), Theme::Dark), Theme::Light);
    assert_eq!(Theme::from_preference(Some(" dark "), Theme::Light), Theme::Dark);
}

#[test]
fn system_and_unknown_fall_back() {
    assert_eq!(Theme::from_preference(None, Theme::Light), Theme::Light);
    assert_eq!(Theme::from_preference(Some("system"), Theme::Dark), Theme::Dark);
    assert_eq!(Theme::from_preference(Some("sepia"), Theme::Light), Theme::Light);
}

#[test]
fn palettes_differ_per_theme() {
    let dark = Theme::Dark.palette();
    assert_eq!(dark.primary, Rgba8::from_hex("#00d4ff").unwrap());
    assert_eq!(dark.accent, Rgba8::from_hex("#8b5cf6").unwrap());
    assert_ne!(Theme::Light.palette(), dark);
}

#[test]
fn names_round_trip() {
    for t in [Theme::Light, Theme::Dark] {
        assert_eq!(t.as_str().parse::<Theme>().unwrap(), t);
    }
}
