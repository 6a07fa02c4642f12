use std::time::Duration;

use carousel::{
    CarouselConfig, CarouselEvent, Controller, RecordingSurface, Triggers, Visibility,
};

fn assert_single_current(carousel: &Controller, surface: &RecordingSurface) {
    let current = carousel.current_index();
    assert_eq!(surface.current_slides(), vec![current]);
    assert_eq!(surface.current_indicators(), vec![current]);
}

#[test]
fn next_next_previous_then_jump_to_last() {
    let mut carousel = Controller::new(4, 4, 300.0, &CarouselConfig::default()).unwrap();
    let mut surface = RecordingSurface::default();
    carousel.render(&mut surface);

    let mut trace = vec![carousel.current_index()];
    for event in [
        CarouselEvent::Next,
        CarouselEvent::Next,
        CarouselEvent::Previous,
        CarouselEvent::Indicator(3),
    ] {
        carousel.dispatch(event, &mut surface);
        trace.push(carousel.current_index());
        assert_single_current(&carousel, &surface);
    }

    assert_eq!(trace, vec![0, 1, 2, 1, 3]);
    assert_eq!(
        surface.triggers,
        Some(Triggers { previous: Visibility::Shown, next: Visibility::Hidden })
    );
    assert_eq!(surface.track_offset, -900.0);
    assert_eq!(surface.renders, 5);
}

#[test]
fn every_reachable_state_has_one_current_slide() {
    let mut carousel = Controller::new(5, 5, 120.0, &CarouselConfig::default()).unwrap();
    let mut surface = RecordingSurface::default();
    carousel.render(&mut surface);

    let events = [
        CarouselEvent::Previous,
        CarouselEvent::Next,
        CarouselEvent::AutoAdvance,
        CarouselEvent::Indicator(4),
        CarouselEvent::Next,
        CarouselEvent::AutoAdvance,
        CarouselEvent::Indicator(2),
        CarouselEvent::Previous,
        CarouselEvent::Previous,
        CarouselEvent::Previous,
        CarouselEvent::Indicator(9),
    ];
    for event in events {
        carousel.dispatch(event, &mut surface);
        assert_single_current(&carousel, &surface);
        let expected = -(carousel.current_index() as f32) * 120.0;
        assert_eq!(surface.track_offset, expected);
    }
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn batched_events_run_in_delivery_order() {
    let mut carousel = Controller::new(4, 4, 300.0, &CarouselConfig::default()).unwrap();
    let mut surface = RecordingSurface::default();

    let applied = carousel.dispatch_all(
        [
            CarouselEvent::AutoAdvance,
            CarouselEvent::Indicator(3),
            CarouselEvent::Next,
            CarouselEvent::AutoAdvance,
        ],
        &mut surface,
    );

    let path: Vec<(usize, usize)> = applied.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(path, vec![(0, 1), (1, 3), (3, 0)]);
    assert_eq!(surface.renders, 3);
}

#[test]
fn single_slide_carousel() {
    let mut carousel = Controller::new(1, 1, 640.0, &CarouselConfig::default()).unwrap();
    let mut surface = RecordingSurface::default();
    carousel.render(&mut surface);

    let hidden = Some(Triggers { previous: Visibility::Hidden, next: Visibility::Hidden });
    assert_eq!(surface.triggers, hidden);

    assert!(carousel.dispatch(CarouselEvent::Previous, &mut surface).is_none());
    assert!(carousel.dispatch(CarouselEvent::Next, &mut surface).is_none());
    assert_eq!(surface.renders, 1);

    let transition = carousel.dispatch(CarouselEvent::AutoAdvance, &mut surface).unwrap();
    assert_eq!((transition.from, transition.to), (0, 0));
    assert_eq!(surface.triggers, hidden);
    assert_eq!(surface.renders, 2);

    let transition = carousel.dispatch(CarouselEvent::Indicator(0), &mut surface).unwrap();
    assert_eq!((transition.from, transition.to), (0, 0));
    assert_eq!(surface.current_slides(), vec![0]);
    assert_eq!(surface.triggers, hidden);
    assert_eq!(surface.renders, 3);

    assert!(carousel.dispatch(CarouselEvent::Indicator(1), &mut surface).is_none());
    assert_eq!(surface.renders, 3);
}

#[test]
fn autoplay_cycles_through_every_slide() {
    let config = CarouselConfig {
        auto_advance_interval: Duration::from_millis(100),
        ..CarouselConfig::default()
    };
    let mut carousel = Controller::new(3, 3, 300.0, &config).unwrap();
    let mut surface = RecordingSurface::default();

    let mut seen = Vec::new();
    for _ in 0..6 {
        carousel.tick(Duration::from_millis(100), &mut surface);
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);

    carousel.timer_mut().stop();
    carousel.tick(Duration::from_secs(10), &mut surface);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn starts_from_configured_slide() {
    let config = CarouselConfig {
        initial_index: 2,
        ..CarouselConfig::default()
    };
    let carousel = Controller::new(3, 3, 200.0, &config).unwrap();
    let mut surface = RecordingSurface::default();
    carousel.render(&mut surface);

    assert_eq!(surface.current_slides(), vec![2]);
    assert_eq!(surface.track_offset, -400.0);
    assert_eq!(
        surface.triggers,
        Some(Triggers { previous: Visibility::Shown, next: Visibility::Hidden })
    );
}
