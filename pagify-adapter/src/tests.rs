use crate::*;

use pagify::{LayoutConfig, NavigateOptions, PageChange, Pagify, TurnUnit};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn counted_engine(config: LayoutConfig, pages: u64, events: &Arc<AtomicUsize>) -> Pagify<u64> {
    let mut p = Pagify::with_pages(config, 1..=pages).unwrap();
    p.set_on_page_change(Some({
        let events = Arc::clone(events);
        move |_: &PageChange| {
            events.fetch_add(1, Ordering::Relaxed);
        }
    }));
    p
}

#[test]
fn burst_of_triggers_collapses_into_latest() {
    let events = Arc::new(AtomicUsize::new(0));
    let engine = counted_engine(
        LayoutConfig::default().with_throttle_window_ms(250),
        20,
        &events,
    );
    let mut b = ViewportBinding::with_tween(engine);

    assert!(b.forward(0).is_some());
    assert_eq!(b.engine().current_page(), 2);
    assert_eq!(events.load(Ordering::Relaxed), 1);

    // Two triggers 10ms apart inside the window.
    assert!(b.forward(100).is_none());
    assert!(b.go_to_page(9, 110).is_none());
    assert_eq!(b.next_deadline_ms(), Some(250));

    b.tick(249);
    assert_eq!(events.load(Ordering::Relaxed), 1);

    b.tick(250);
    assert_eq!(events.load(Ordering::Relaxed), 2);
    assert_eq!(b.engine().current_page(), 9);
    assert_eq!(b.next_deadline_ms(), None);
}

#[test]
fn unthrottled_triggers_fire_immediately() {
    let events = Arc::new(AtomicUsize::new(0));
    let engine = counted_engine(LayoutConfig::default(), 20, &events);
    let mut b = ViewportBinding::with_tween(engine);

    b.forward(0);
    b.forward(1);
    b.backward(2);
    assert_eq!(events.load(Ordering::Relaxed), 3);
    assert_eq!(b.engine().current_page(), 2);
}

#[test]
fn triggers_follow_turn_unit() {
    let engine = Pagify::with_pages(
        LayoutConfig::new(50.0, 50.0).with_turn_unit(TurnUnit::View),
        1..=20u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);
    let turn = b.forward(0).unwrap();
    assert_eq!(turn.change.current_page, 5);
    b.backward(1);
    assert_eq!(b.engine().current_page(), 1);
}

#[test]
fn tween_drives_offset_to_target_and_settles_engine() {
    let engine = Pagify::with_pages(
        LayoutConfig::default().with_transition_duration_ms(100),
        1..=10u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);

    let turn = b.go_to_page(3, 0).unwrap();
    assert_eq!(turn.target_offset_percent(), 200.0);
    assert!(b.is_animating());
    assert!(b.engine().is_transitioning());

    let mut last = 0.0f32;
    for now_ms in [0u64, 10, 20, 40, 80, 100] {
        let off = b.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert_eq!(last, 200.0);
    assert!(!b.is_animating());
    assert!(!b.engine().is_transitioning());
    assert_eq!(b.tick(120), None);
}

#[test]
fn new_trigger_retargets_running_tween() {
    let engine = Pagify::with_pages(
        LayoutConfig::default()
            .with_transition_duration_ms(100)
            .with_allow_blank_columns(true),
        1..=10u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);

    b.go_to_page(5, 0).unwrap();
    let mid = b.tick(50).unwrap();
    assert!(mid > 0.0 && mid < 400.0);

    b.go_to_page(2, 50).unwrap();
    let tween = *b.transition().tween().unwrap();
    assert_eq!(tween.from, mid);
    assert_eq!(tween.to, 100.0);

    assert_eq!(b.tick(150), Some(100.0));
    assert_eq!(b.engine().current_page(), 2);
    assert!(!b.engine().is_transitioning());
}

#[test]
fn zero_duration_transition_completes_on_first_tick() {
    let engine = Pagify::with_pages(
        LayoutConfig::default().with_transition_duration_ms(0),
        1..=4u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);
    b.forward(0).unwrap();
    assert_eq!(b.tick(0), Some(100.0));
    assert!(!b.engine().is_transitioning());
}

#[test]
fn callback_transition_waits_for_host_completion() {
    let applied: Arc<Mutex<Vec<(f32, u64)>>> = Arc::new(Mutex::new(Vec::new()));
    let engine = Pagify::with_pages(LayoutConfig::default(), 1..=10u64).unwrap();
    let mut b = ViewportBinding::new(
        engine,
        CallbackTransition::new({
            let applied = Arc::clone(&applied);
            move |offset: f32, duration_ms: u64| {
                applied.lock().unwrap().push((offset, duration_ms));
            }
        }),
    );

    b.navigate(4, NavigateOptions::default().with_duration_override_ms(Some(75)), 0)
        .unwrap();
    assert_eq!(applied.lock().unwrap().as_slice(), &[(300.0, 75)]);
    assert_eq!(b.tick(1_000), None);
    assert!(b.engine().is_transitioning());
    assert!(b.is_animating());

    b.on_transition_complete();
    assert!(!b.engine().is_transitioning());
    assert!(!b.is_animating());
}

#[test]
fn reconfigure_adopts_new_throttle_window_and_resettles() {
    let engine = Pagify::with_pages(LayoutConfig::default(), 1..=10u64).unwrap();
    let mut b = ViewportBinding::with_tween(engine);
    b.go_to_page(6, 0).unwrap();

    let turn = b
        .reconfigure(
            LayoutConfig::new(50.0, 50.0)
                .with_ordering(pagify::PageOrder::ColumnMajor)
                .with_throttle_window_ms(200),
            Some(0),
            10,
        )
        .unwrap()
        .unwrap();
    assert_eq!(turn.target_offset_percent(), 100.0);
    assert_eq!(b.tick(10), Some(100.0));

    // The new window applies to subsequent triggers (last firing was at t=0).
    assert!(b.forward(20).is_none());
    assert_eq!(b.next_deadline_ms(), Some(200));
    b.tick(200);
    assert_eq!(b.engine().current_page(), 7);
    assert!(b.forward(260).is_none());
    assert_eq!(b.next_deadline_ms(), Some(400));

    assert!(b.reconfigure(LayoutConfig::new(0.0, 50.0), None, 40).is_err());
    assert_eq!(b.engine().config().throttle_window_ms, 200);
}

#[test]
fn refresh_after_page_removal_reapplies_layout() {
    let engine = Pagify::with_pages(LayoutConfig::default(), 1..=10u64).unwrap();
    let mut b = ViewportBinding::with_tween(engine);
    b.go_to_page(5, 0).unwrap();
    b.tick(1_000);

    b.engine_mut().remove_page(2).unwrap();
    assert!(!b.is_animating());
    let turn = b.refresh(None, 1_000).unwrap();
    assert_eq!(turn.change.current_page, 4);
    assert_eq!(turn.target_offset_percent(), 300.0);
    assert!(b.is_animating());
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    let t = Tween::new(0.0, 100.0, 10, 0, Easing::Linear);
    assert!(t.is_done(10));
    assert_eq!(t.sample(10), 100.0);

    let t = Tween::new(100.0, 300.0, 0, 200, Easing::Linear);
    assert_eq!(t.progress(50), 0.25);
    assert_eq!(t.sample(50), 150.0);
    assert_eq!(t.remaining_ms(50), 150);
    assert_eq!(t.remaining_ms(400), 0);
}

#[test]
fn dropping_to_unthrottled_window_discards_stale_deferred_trigger() {
    let engine = Pagify::with_pages(
        LayoutConfig::default().with_throttle_window_ms(100),
        1..=20u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);

    assert!(b.forward(0).is_some());
    assert!(b.forward(10).is_none());
    assert_eq!(b.next_deadline_ms(), Some(100));

    b.reconfigure(LayoutConfig::default(), Some(0), 15).unwrap();
    let turn = b.go_to_page(10, 20).unwrap();
    assert_eq!(turn.change.current_page, 10);

    b.tick(20);
    b.tick(200);
    assert_eq!(b.engine().current_page(), 10);
    assert_eq!(b.next_deadline_ms(), None);
}

#[test]
fn advance_reports_turn_of_deferred_trigger() {
    let engine = Pagify::with_pages(
        LayoutConfig::default().with_throttle_window_ms(250),
        1..=20u64,
    )
    .unwrap();
    let mut b = ViewportBinding::with_tween(engine);

    b.forward(0).unwrap();
    assert!(b.forward(100).is_none());

    let frame = b.advance(249);
    assert_eq!(frame.turn, None);
    assert!(frame.offset_percent.is_some());

    let frame = b.advance(250);
    let turn = frame.turn.unwrap();
    assert_eq!(turn.change.previous_page, 2);
    assert_eq!(turn.change.current_page, 3);
    assert_eq!(turn.target_offset_percent(), 200.0);
    assert!(frame.offset_percent.is_some());

    assert_eq!(b.advance(260).turn, None);
}

#[test]
fn remaining_time_saturates_for_huge_durations() {
    let t = Tween::new(0.0, 100.0, 10, u64::MAX, Easing::Linear);
    assert_eq!(t.remaining_ms(10), u64::MAX - 10);
    assert!(!t.is_done(1_000));
}
