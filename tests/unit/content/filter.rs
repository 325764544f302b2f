use super::*;
use crate::content::catalog::ContentCatalog;

fn titles(items: &[&ProjectEntry]) -> Vec<String> {
    items.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn all_returns_full_list_in_order() {
    let catalog = ContentCatalog::builtin();
    let filter = CategoryFilter::new();
    let visible = filter.visible(&catalog.projects);
    assert_eq!(visible.len(), 6);
    let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn web_app_selects_the_two_sanitary_fittings_projects() {
    let catalog = ContentCatalog::builtin();
    let mut filter = CategoryFilter::new();
    filter.set_category("Web-App");
    assert_eq!(
        titles(&filter.visible(&catalog.projects)),
        vec!["ASF Sanitary Fittings", "Vision Sanitary Fittings"]
    );
}

#[test]
fn present_categories_return_exact_subsequences() {
    let catalog = ContentCatalog::builtin();
    let mut filter = CategoryFilter::new();
    for category in Category::ALL {
        filter.set_category(category.label());
        let expected: Vec<&ProjectEntry> = catalog
            .projects
            .iter()
            .filter(|p| p.category == category)
            .collect();
        assert_eq!(filter.visible(&catalog.projects), expected);
    }
    filter.set_category("Website");
    assert_eq!(filter.visible(&catalog.projects).len(), 3);
    filter.set_category("Chrome Extension");
    assert_eq!(titles(&filter.visible(&catalog.projects)), vec!["Mobi-Sim"]);
}

#[test]
fn unknown_category_yields_empty_not_error() {
    let catalog = ContentCatalog::builtin();
    let mut filter = CategoryFilter::new();
    filter.set_category("Mobile");
    assert!(filter.visible(&catalog.projects).is_empty());
    assert_eq!(filter.selection(), &Selection::Unrecognized("Mobile".to_owned()));
    assert_eq!(filter.selection().label(), "Mobile");

    // Labels are exact; case variants are not categories.
    filter.set_category("web-app");
    assert!(filter.visible(&catalog.projects).is_empty());

    filter.set_category("All");
    assert_eq!(filter.visible(&catalog.projects).len(), 6);
}

#[test]
fn category_choices_follow_first_appearance() {
    let catalog = ContentCatalog::builtin();
    assert_eq!(
        categories(&catalog.projects),
        vec!["All", "Website", "Web-App", "Chrome Extension"]
    );
    assert_eq!(categories(&[]), vec!["All"]);
}
