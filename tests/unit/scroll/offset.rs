use super::*;

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

#[test]
fn edges_parse_keywords_percentages_and_pixels() {
    assert_eq!("start".parse::<Edge>().unwrap(), Edge::Fraction(0.0));
    assert_eq!("center".parse::<Edge>().unwrap(), Edge::Fraction(0.5));
    assert_eq!("end".parse::<Edge>().unwrap(), Edge::Fraction(1.0));
    assert_eq!("25%".parse::<Edge>().unwrap(), Edge::Fraction(0.25));
    assert_eq!("120px".parse::<Edge>().unwrap(), Edge::Pixels(120.0));
    assert!("middle".parse::<Edge>().is_err());
    assert!("NaNpx".parse::<Edge>().is_err());
}

#[test]
fn named_offsets_match_their_string_form() {
    assert_eq!(
        ScrollOffset::parse("start end", "end start").unwrap(),
        ScrollOffset::through_viewport()
    );
    assert_eq!(
        ScrollOffset::parse("start start", "end start").unwrap(),
        ScrollOffset::leaving_top()
    );
}

#[test]
fn single_edge_entry_aligns_both_sides() {
    let e: OffsetEntry = "center".parse().unwrap();
    assert_eq!(e.target, e.container);
    assert!("start end start".parse::<OffsetEntry>().is_err());
    assert!("".parse::<OffsetEntry>().is_err());
}

#[test]
fn span_resolves_against_element_and_viewport() {
    let el = ElementBox::new(1000.0, 500.0);
    assert_eq!(ScrollOffset::through_viewport().span(el, VIEWPORT), (200.0, 1500.0));
    assert_eq!(ScrollOffset::leaving_top().span(el, VIEWPORT), (1000.0, 1500.0));
}
