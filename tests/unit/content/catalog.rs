use super::*;

#[test]
fn builtin_catalog_is_valid() {
    let c = ContentCatalog::builtin();
    c.validate().unwrap();
    assert_eq!(c.skills.len(), 8);
    assert_eq!(c.highlights.len(), 4);
    assert_eq!(c.projects.len(), 6);
    assert_eq!(c.hero_tech.len(), 4);
}

#[test]
fn every_skill_level_is_a_percentage() {
    for s in &ContentCatalog::builtin().skills {
        assert!(s.level <= 100, "{}", s.name);
    }
}

#[test]
fn project_ids_are_unique() {
    let c = ContentCatalog::builtin();
    let ids: HashSet<u32> = c.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), c.projects.len());
}

#[test]
fn duplicate_ids_and_bad_levels_are_rejected() {
    let mut c = ContentCatalog::builtin();
    c.projects[1].id = c.projects[0].id;
    assert!(c.validate().is_err());

    let mut c = ContentCatalog::builtin();
    c.skills[0].level = 101;
    assert!(c.validate().is_err());

    let mut c = ContentCatalog::builtin();
    c.projects[0].live_url = "javascript:alert(1)".to_owned();
    assert!(c.validate().is_err());
}

#[test]
fn json_round_trips_through_category_labels() {
    let c = ContentCatalog::builtin();
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("\"Web-App\""));
    assert!(json.contains("\"Chrome Extension\""));
    let back = ContentCatalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ContentCatalog::from_reader("{\"skills\": 3}".as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));

    let over = r#"{"skills":[{"name":"x","level":300,"color":"primary"}],
        "highlights":[],"projects":[]}"#;
    assert!(ContentCatalog::from_reader(over.as_bytes()).is_err());
}

#[test]
fn missing_images_are_soft_failures() {
    let c = ContentCatalog::builtin();
    let statuses = c.image_statuses(Path::new("target/definitely-not-an-assets-dir"));
    assert_eq!(statuses.len(), 6);
    assert!(statuses.iter().all(|(_, s)| *s == ImageStatus::Missing));
}

#[test]
fn project_lookup_by_id() {
    let c = ContentCatalog::builtin();
    assert_eq!(c.project(6).map(|p| p.title.as_str()), Some("Mobi-Sim"));
    assert!(c.project(99).is_none());
}
