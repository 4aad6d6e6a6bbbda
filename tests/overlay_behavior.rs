use std::time::{Duration, Instant};
use terms_highlighter::highlight::{
    recompute_layout, CaptureDecision, HighlightInputState, PageGeometry, PageRect, ScrollOffset,
    HIGHLIGHT_ALPHA,
};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn agreement_page() -> PageGeometry {
    PageGeometry {
        sections: vec![
            PageRect::new(0.0, 100.0, 500.0, 300.0),
            PageRect::new(0.0, 340.0, 500.0, 560.0),
        ],
        checkboxes: vec![
            PageRect::new(20.0, 260.0, 240.0, 280.0),
            PageRect::new(20.0, 520.0, 240.0, 540.0),
        ],
        scroll: ScrollOffset::default(),
    }
}

#[test]
fn single_section_rect_produces_expected_surface() {
    let sections = [PageRect::new(0.0, 100.0, 500.0, 300.0)];
    let frame = recompute_layout(&sections, ScrollOffset::default()).expect("surface frame");

    assert_eq!((frame.left, frame.top), (0.0, 100.0));
    assert_eq!((frame.width, frame.height), (500.0, 200.0));
}

#[test]
fn full_drawing_session_fades_and_disappears() {
    let geometry = agreement_page();
    let frame = recompute_layout(&geometry.sections, geometry.scroll);
    let mut state = HighlightInputState::new();
    let t0 = Instant::now();

    let decision = state.route_start((50.0, 150.0), frame, &geometry, t0);
    assert_eq!(decision, CaptureDecision::Capture);
    state.route_move((80.0, 170.0), frame, &geometry);
    state.route_move((120.0, 180.0), frame, &geometry);
    state.route_end();

    let stroke = &state.strokes()[0];
    assert_eq!(stroke.points().len(), 3);
    assert!((stroke.opacity_at(t0) - HIGHLIGHT_ALPHA).abs() < 1e-6);
    assert!((stroke.opacity_at(t0 + ms(1500)) - 0.35).abs() < 1e-6);

    state.prune_faded(t0 + ms(2999));
    assert_eq!(state.strokes().len(), 1);

    state.prune_faded(t0 + ms(3000));
    assert!(state.strokes().is_empty());
}

#[test]
fn strokes_fade_independently() {
    let geometry = agreement_page();
    let frame = recompute_layout(&geometry.sections, geometry.scroll);
    let mut state = HighlightInputState::new();
    let t0 = Instant::now();

    state.route_start((50.0, 150.0), frame, &geometry, t0);
    state.route_move((60.0, 160.0), frame, &geometry);
    state.route_end();

    state.route_start((100.0, 400.0), frame, &geometry, t0 + ms(2000));
    state.route_move((140.0, 410.0), frame, &geometry);
    state.route_end();

    state.prune_faded(t0 + ms(3500));
    assert_eq!(state.strokes().len(), 1);
    assert_eq!(state.strokes()[0].points()[0], (100.0, 300.0));
}

#[test]
fn checkbox_press_never_creates_a_stroke() {
    let geometry = agreement_page();
    let frame = recompute_layout(&geometry.sections, geometry.scroll);
    let mut state = HighlightInputState::new();

    let decision = state.route_start((30.0, 270.0), frame, &geometry, Instant::now());
    assert_eq!(decision, CaptureDecision::PassThrough);
    assert!(!state.intercept_enabled());
    assert!(state.strokes().is_empty());

    let decision = state.route_start((30.0, 530.0), frame, &geometry, Instant::now());
    assert_eq!(decision, CaptureDecision::PassThrough);
    assert!(state.strokes().is_empty());
}

#[test]
fn pinch_gesture_suspends_drawing_until_all_touches_lift() {
    let geometry = agreement_page();
    let frame = recompute_layout(&geometry.sections, geometry.scroll);
    let mut state = HighlightInputState::new();
    let t0 = Instant::now();

    assert_eq!(
        state.route_touch_start(1, (50.0, 150.0), frame, &geometry, t0),
        CaptureDecision::Capture
    );
    state.route_move((60.0, 160.0), frame, &geometry);

    assert_eq!(
        state.route_touch_start(2, (300.0, 400.0), frame, &geometry, t0),
        CaptureDecision::PassThrough
    );
    assert!(!state.intercept_enabled());
    state.route_move((70.0, 170.0), frame, &geometry);
    assert_eq!(state.strokes().len(), 1);
    assert_eq!(state.strokes()[0].points().len(), 2);

    state.route_touch_end();
    assert_eq!(state.touch_count(), 0);

    // Drawing works again once the gesture has ended.
    assert_eq!(
        state.route_touch_start(1, (50.0, 400.0), frame, &geometry, t0),
        CaptureDecision::Capture
    );
    assert_eq!(state.strokes().len(), 2);
}

#[test]
fn scrolled_layout_keeps_surface_and_points_aligned() {
    // The same two sections after the page scrolled down by 200 points.
    let geometry = PageGeometry {
        sections: vec![
            PageRect::new(0.0, -100.0, 500.0, 100.0),
            PageRect::new(0.0, 140.0, 500.0, 360.0),
        ],
        checkboxes: Vec::new(),
        scroll: ScrollOffset { x: 0.0, y: 200.0 },
    };
    let frame = recompute_layout(&geometry.sections, geometry.scroll).expect("surface frame");

    // Page coordinates are unchanged by scrolling.
    assert_eq!((frame.left, frame.top), (0.0, 100.0));
    assert_eq!((frame.width, frame.height), (500.0, 460.0));

    let mut state = HighlightInputState::new();
    let decision = state.route_start((50.0, 0.0), Some(frame), &geometry, Instant::now());
    assert_eq!(decision, CaptureDecision::Capture);
    assert_eq!(state.strokes()[0].points(), &[(50.0, 100.0)]);
}
