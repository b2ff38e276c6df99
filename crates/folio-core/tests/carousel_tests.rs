// Rust guideline compliant 2026-10-14

//! Integration tests for the detail carousel state machine.

use folio_core::{CarouselAction, CarouselConfig, CarouselController, GesturePhase, Point, Slide};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

const WIDTH: f64 = 375.0;

fn controller(images: &[&str]) -> CarouselController {
    CarouselController::new(
        images.iter().map(|s| s.to_string()).collect(),
        CarouselConfig::default(),
    )
}

#[test]
fn test_scroll_then_snap_updates_index_and_dots() {
    let mut carousel = controller(&["a.jpg", "b.jpg", "c.jpg"]);
    let t0 = Instant::now();

    let action = carousel.on_scroll(2.0 * WIDTH, WIDTH, t0);
    assert_eq!(action, Some(CarouselAction::IndexChanged(2)));

    // Nothing fires before the snap delay has elapsed.
    assert!(carousel.poll(t0 + Duration::from_millis(100)).is_empty());

    let actions = carousel.poll(t0 + Duration::from_millis(150));
    assert_eq!(actions, vec![CarouselAction::SnapTo(2.0 * WIDTH)]);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.pagination(), vec![false, false, true]);
}

#[test]
fn test_snap_timer_rearms_on_each_scroll() {
    let mut carousel = controller(&["a.jpg", "b.jpg", "c.jpg"]);
    let t0 = Instant::now();

    carousel.on_scroll(100.0, WIDTH, t0);
    carousel.on_scroll(200.0, WIDTH, t0 + Duration::from_millis(100));

    assert!(carousel.poll(t0 + Duration::from_millis(160)).is_empty());
    assert_eq!(
        carousel.next_deadline(),
        Some(t0 + Duration::from_millis(250))
    );

    let actions = carousel.poll(t0 + Duration::from_millis(250));
    assert_eq!(actions, vec![CarouselAction::SnapTo(WIDTH)]);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_edge_swipe_right_closes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut carousel = controller(&["a.jpg", "b.jpg"]).with_on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let t0 = Instant::now();

    carousel.touch_start(Point::new(200.0, 300.0));
    assert!(carousel.touch_move(Point::new(260.0, 305.0)));
    let action = carousel.touch_end(Point::new(310.0, 300.0), t0);
    assert_eq!(action, Some(CarouselAction::BeginClose));
    assert!(carousel.is_closing());

    assert!(carousel.poll(t0 + Duration::from_millis(299)).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let actions = carousel.poll(t0 + Duration::from_millis(300));
    assert_eq!(actions, vec![CarouselAction::Dismissed]);
    assert_eq!(carousel.phase(), GesturePhase::Closed);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // A later poll must not invoke the callback again.
    assert!(carousel.poll(t0 + Duration::from_secs(2)).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_swipe_away_from_left_edge_does_not_close() {
    let mut carousel = controller(&["a.jpg", "b.jpg"]);
    let t0 = Instant::now();
    carousel.on_scroll(50.0, WIDTH, t0);

    carousel.touch_start(Point::new(200.0, 300.0));
    assert_eq!(carousel.touch_end(Point::new(310.0, 300.0), t0), None);
    assert_eq!(carousel.phase(), GesturePhase::Idle);
    assert!(!carousel.is_closing());
}

#[test]
fn test_short_or_leftward_swipe_does_not_close() {
    let mut carousel = controller(&["a.jpg", "b.jpg"]);
    let t0 = Instant::now();

    carousel.touch_start(Point::new(200.0, 300.0));
    assert_eq!(carousel.touch_end(Point::new(300.0, 300.0), t0), None);

    carousel.touch_start(Point::new(200.0, 300.0));
    assert_eq!(carousel.touch_end(Point::new(50.0, 300.0), t0), None);
    assert_eq!(carousel.phase(), GesturePhase::Idle);
}

#[test]
fn test_touch_end_without_start_is_ignored() {
    let mut carousel = controller(&["a.jpg"]);
    assert_eq!(carousel.touch_end(Point::new(500.0, 0.0), Instant::now()), None);
}

#[test]
fn test_close_request_is_idempotent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut carousel = controller(&["a.jpg"]).with_on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let t0 = Instant::now();

    assert_eq!(carousel.request_close(t0), Some(CarouselAction::BeginClose));
    assert_eq!(carousel.request_close(t0 + Duration::from_millis(10)), None);

    carousel.poll(t0 + Duration::from_millis(400));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(carousel.request_close(t0 + Duration::from_secs(1)), None);
}

#[test]
fn test_scroll_after_close_is_ignored() {
    let mut carousel = controller(&["a.jpg", "b.jpg"]);
    let t0 = Instant::now();
    carousel.request_close(t0);
    carousel.poll(t0 + Duration::from_millis(300));

    assert_eq!(carousel.on_scroll(WIDTH, WIDTH, t0 + Duration::from_secs(1)), None);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_slides_mark_videos() {
    let carousel = controller(&["a.jpg", "clip.MP4", "", "b.png"]);
    assert_eq!(carousel.image_count(), 3);
    assert_eq!(
        carousel.slides(),
        vec![
            Slide::Image("a.jpg".to_string()),
            Slide::Video("clip.MP4".to_string()),
            Slide::Image("b.png".to_string()),
        ]
    );
}

#[test]
fn test_single_image_has_no_dots() {
    let carousel = controller(&["a.jpg"]);
    assert!(carousel.pagination().is_empty());
}

#[test]
fn test_custom_threshold() {
    let config = CarouselConfig {
        close_threshold: 70.0,
        ..CarouselConfig::default()
    };
    let mut carousel = CarouselController::new(vec!["a.jpg".to_string()], config);
    let t0 = Instant::now();

    carousel.touch_start(Point::new(100.0, 0.0));
    assert_eq!(
        carousel.touch_end(Point::new(180.0, 0.0), t0),
        Some(CarouselAction::BeginClose)
    );
}
