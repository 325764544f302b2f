use super::*;
use crate::animation::spring::SpringConfig;
use crate::foundation::core::{FrameIndex, Fps};
use crate::runtime::frame_loop::{FrameLoop, FrameTick};

const BOUNDS: ElementBox = ElementBox {
    top: 2200.0,
    height: 1600.0,
};

struct Page {
    events: ViewportEvents,
    frames: FrameLoop,
}

impl Page {
    fn new() -> Self {
        Self {
            events: ViewportEvents::new(Viewport::default()),
            frames: FrameLoop::new(),
        }
    }

    fn mount(&self, images: &[(u32, ImageStatus)]) -> ProjectsSection {
        let ctx = MountContext {
            events: &self.events,
            frame_loop: &self.frames,
            spring: SpringConfig::default(),
            fps: Fps::default(),
            now: FrameIndex(0),
        };
        let mut s = ProjectsSection::mount(&ctx, &ContentCatalog::builtin(), images).unwrap();
        s.layout(BOUNDS, Viewport::default());
        self.events.refresh();
        s
    }

    fn step(&self, s: &mut ProjectsSection, frame: u64) -> ProjectsFrame {
        self.frames.tick(FrameTick {
            frame: FrameIndex(frame),
            dt_secs: 1.0 / 60.0,
        });
        match s
            .frame(&FrameContext {
                frame: FrameIndex(frame),
                fps: Fps::default(),
            })
            .unwrap()
        {
            SectionFrame::Projects(p) => p,
            other => panic!("unexpected frame {other:?}"),
        }
    }
}

fn ids(f: &ProjectsFrame) -> Vec<u32> {
    f.cards.iter().map(|c| c.id).collect()
}

#[test]
fn starts_with_all_projects_hidden() {
    let page = Page::new();
    let mut s = page.mount(&[]);
    let f = page.step(&mut s, 0);
    assert_eq!(f.category, "All");
    assert_eq!(f.categories, vec!["All", "Website", "Web-App", "Chrome Extension"]);
    assert_eq!(ids(&f), vec![1, 2, 3, 4, 5, 6]);
    assert!(f.cards.iter().all(|c| c.style == StyleProps::hidden().with_y(50.0)));
    assert_eq!(f.header, StyleProps::hidden().with_y(40.0));
}

#[test]
fn first_row_reveals_with_stagger() {
    let page = Page::new();
    let mut s = page.mount(&[]);
    page.events.scroll_to(2000.0);
    let f = page.step(&mut s, 0);
    assert_eq!(f.cards[0].style.opacity, 0.0);

    // Card 1 waits 6 frames, card 2 waits 12.
    let f = page.step(&mut s, 10);
    assert!(f.cards[0].style.opacity > 0.0);
    assert!(f.cards[1].style.opacity > 0.0);
    assert_eq!(f.cards[2].style.opacity, 0.0);

    let mut last = f;
    for frame in 11..=100 {
        last = page.step(&mut s, frame);
    }
    assert_eq!(last.header, StyleProps::identity());
    for card in &last.cards[..3] {
        assert_eq!(card.style, StyleProps::identity());
    }
    for card in &last.cards[3..] {
        assert_eq!(card.style, StyleProps::hidden().with_y(50.0));
    }
}

#[test]
fn filtering_reindexes_pending_cards() {
    let page = Page::new();
    let mut s = page.mount(&[]);
    s.set_category("Web-App").unwrap();
    let f = page.step(&mut s, 0);
    assert_eq!(ids(&f), vec![4, 5]);
    assert_eq!(f.cards[0].title, "ASF Sanitary Fittings");
    assert_eq!(f.cards[1].title, "Vision Sanitary Fittings");

    page.events.scroll_to(2000.0);
    page.step(&mut s, 1);
    // Now at indices 0 and 1: card 4 done after 36 frames, card 5 after 42.
    let f = page.step(&mut s, 38);
    assert_eq!(f.cards[0].style, StyleProps::identity());
    assert_ne!(f.cards[1].style, StyleProps::identity());
    let f = page.step(&mut s, 43);
    assert_eq!(f.cards[1].style, StyleProps::identity());
}

#[test]
fn revealed_cards_keep_state_across_filters() {
    let page = Page::new();
    let mut s = page.mount(&[]);
    page.events.scroll_to(2000.0);
    for frame in 0..=60 {
        page.step(&mut s, frame);
    }
    s.set_category("Website").unwrap();
    let f = page.step(&mut s, 61);
    assert_eq!(ids(&f), vec![1, 2, 3]);
    assert!(f.cards.iter().all(|c| c.style == StyleProps::identity()));
}

#[test]
fn unknown_category_empties_gallery() {
    let page = Page::new();
    let mut s = page.mount(&[]);
    let listeners = page.events.listener_count();
    s.set_category("Mobile").unwrap();
    let f = page.step(&mut s, 0);
    assert!(f.cards.is_empty());
    assert_eq!(f.category, "Mobile");
    // Dropped cards released their observers.
    assert_eq!(page.events.listener_count(), listeners - 6);

    s.set_category("All").unwrap();
    assert_eq!(ids(&page.step(&mut s, 1)), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(s.filter().selection(), &crate::content::filter::Selection::All);
}

#[test]
fn cards_link_out_and_flag_missing_images() {
    let page = Page::new();
    let mut s = page.mount(&[(6, ImageStatus::Missing), (1, ImageStatus::Available)]);
    let f = page.step(&mut s, 0);
    let mobi = f.cards.iter().find(|c| c.id == 6).unwrap();
    assert!(mobi.placeholder);
    assert_eq!(mobi.link.target(), Some("_blank"));
    assert!(mobi.link.href().starts_with("https://chromewebstore.google.com/"));
    assert!(f.cards.iter().filter(|c| c.id != 6).all(|c| !c.placeholder));
    assert_eq!(f.cards[0].gradient, "from-primary to-accent");
}

#[test]
fn grid_depends_on_viewport_width() {
    assert_eq!(grid_columns(Viewport::default()), 3);
    let tablet = Viewport {
        width: 800.0,
        height: 1000.0,
    };
    let phone = Viewport {
        width: 390.0,
        height: 844.0,
    };
    assert_eq!(grid_columns(tablet), 2);
    assert_eq!(grid_columns(phone), 1);
    let a = ProjectsSection::card_box(BOUNDS, phone, 0);
    let b = ProjectsSection::card_box(BOUNDS, phone, 1);
    assert_eq!(b.top - a.top, 472.0);
}
