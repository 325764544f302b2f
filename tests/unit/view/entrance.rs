use super::*;

const FPS: Fps = Fps { num: 60, den: 1 };

#[test]
fn pending_entrance_holds_initial_style() {
    let e = Entrance::fade_up(30.0, Transition::new(0.8, 0.2)).unwrap();
    let s = e.sample(FrameIndex(500), FPS).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.y, 30.0);
    assert!(!e.is_settled(FrameIndex(500), FPS));
}

#[test]
fn revealed_entrance_waits_for_delay_then_tweens_to_rest() {
    let mut e = Entrance::fade_up(30.0, Transition::new(0.8, 0.2)).unwrap();
    assert!(e.trigger(FrameIndex(10)));

    // 0.2s delay @60fps = 12 frames.
    let during_delay = e.sample(FrameIndex(21), FPS).unwrap();
    assert_eq!(during_delay, StyleProps::hidden().with_y(30.0));

    let mid = e.sample(FrameIndex(10 + 12 + 24), FPS).unwrap();
    assert!((mid.opacity - 0.5).abs() < 1e-4, "{mid:?}");
    assert!((mid.y - 15.0).abs() < 1e-3, "{mid:?}");

    let end = e.sample(FrameIndex(10 + 12 + 48), FPS).unwrap();
    assert_eq!(end, StyleProps::identity());
    assert!(e.is_settled(FrameIndex(70), FPS));
    assert!(!e.is_settled(FrameIndex(69), FPS));
}

#[test]
fn trigger_is_idempotent() {
    let mut e = Entrance::fade_x(-40.0, Transition::new(0.8, 0.2)).unwrap();
    assert_eq!(e.state(), EntranceState::Pending);
    assert!(e.trigger(FrameIndex(5)));
    assert!(!e.trigger(FrameIndex(50)));
    assert_eq!(
        e.state(),
        EntranceState::Revealed {
            at_frame: FrameIndex(5)
        }
    );
}

#[test]
fn zero_length_transition_reveals_immediately() {
    let mut e = Entrance::fade_up(20.0, Transition::new(0.0, 0.0)).unwrap();
    e.trigger(FrameIndex(3));
    assert_eq!(e.sample(FrameIndex(3), FPS).unwrap(), StyleProps::identity());
}

#[test]
fn width_tween_uses_ease_out_and_lands_exactly() {
    let from = StyleProps::identity().with_width_pct(0.0);
    let to = StyleProps::identity().with_width_pct(87.0);
    let transition = Transition::new(1.0, 0.5).with_ease(Ease::EaseOut);
    let mut e = Entrance::new(from, to, transition).unwrap();
    e.trigger(FrameIndex(0));
    let early = e.sample(FrameIndex(30 + 15), FPS).unwrap();
    // ease-out runs ahead of linear in the first half.
    assert!(early.width_pct > 87.0 * 0.25, "{early:?}");
    assert_eq!(e.sample(FrameIndex(90), FPS).unwrap().width_pct, 87.0);
    assert_eq!(e.sample(FrameIndex(1_000), FPS).unwrap().width_pct, 87.0);
}

#[test]
fn invalid_timings_are_rejected() {
    assert!(Entrance::fade_up(10.0, Transition::new(-1.0, 0.0)).is_err());
    assert!(Entrance::fade_up(10.0, Transition::new(0.5, f64::NAN)).is_err());
    assert!(Entrance::fade_up(f64::INFINITY, Transition::new(0.5, 0.0)).is_err());
}

#[test]
fn retime_only_before_reveal() {
    let mut e = Entrance::fade_up(50.0, Transition::new(0.6, 0.0)).unwrap();
    e.retime(Transition::new(0.6, 0.3)).unwrap();
    assert_eq!(e.transition().delay_secs, 0.3);
    e.trigger(FrameIndex(0));
    assert!(e.retime(Transition::new(0.6, 0.1)).is_err());
}
