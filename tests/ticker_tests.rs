// Host-side tests for the frame scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use verdanza_core::{Phase, Ticker, MAX_FRAME_DT};

const FRAME: Duration = Duration::from_micros(16_667);

#[test]
fn callbacks_run_in_phase_order_regardless_of_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut ticker = Ticker::new();
    for (phase, name) in [
        (Phase::Timeline, "timeline"),
        (Phase::Map, "map"),
        (Phase::Input, "input-a"),
        (Phase::Smooth, "smooth"),
        (Phase::Input, "input-b"),
    ] {
        let log = log.clone();
        ticker.subscribe(phase, move |_| log.borrow_mut().push(name));
    }
    ticker.advance(FRAME);
    assert_eq!(
        *log.borrow(),
        ["input-a", "input-b", "smooth", "map", "timeline"]
    );
}

#[test]
fn unsubscribe_stops_and_drops_the_callback() {
    let hits = Rc::new(RefCell::new(0u32));
    let mut ticker = Ticker::new();
    let h = hits.clone();
    let id = ticker.subscribe(Phase::Smooth, move |_| *h.borrow_mut() += 1);
    assert_eq!(Rc::strong_count(&hits), 2);

    ticker.advance(FRAME);
    ticker.advance(FRAME);
    assert!(ticker.unsubscribe(id));
    assert_eq!(Rc::strong_count(&hits), 1, "callback still alive");
    assert!(!ticker.unsubscribe(id), "double unsubscribe reported success");

    for _ in 0..10 {
        ticker.advance(FRAME);
    }
    assert_eq!(*hits.borrow(), 2);
    assert!(ticker.is_idle());
}

#[test]
fn first_tick_establishes_the_origin() {
    let mut ticker = Ticker::new();
    let first = ticker.tick(Duration::from_secs(1234));
    assert_eq!(first.index, 0);
    assert_eq!(first.dt, Duration::ZERO);
    let second = ticker.tick(Duration::from_secs(1234) + FRAME);
    assert_eq!(second.index, 1);
    assert_eq!(second.dt, FRAME);
}

#[test]
fn frame_delta_is_capped_after_a_stall() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut ticker = Ticker::new();
    let s = seen.clone();
    ticker.subscribe(Phase::Input, move |f| s.borrow_mut().push(f.dt));

    ticker.tick(Duration::ZERO);
    let frame = ticker.tick(Duration::from_secs(10));
    assert_eq!(frame.raw_dt, Duration::from_secs(10));
    assert_eq!(frame.dt, MAX_FRAME_DT);
    assert_eq!(*seen.borrow().last().unwrap(), MAX_FRAME_DT);

    // Back to normal cadence on the next frame.
    let frame = ticker.tick(Duration::from_secs(10) + FRAME);
    assert_eq!(frame.dt, FRAME);
    assert_eq!(frame.elapsed, MAX_FRAME_DT + FRAME);
}

#[test]
fn clock_going_backwards_yields_zero_delta() {
    let mut ticker = Ticker::new();
    ticker.tick(Duration::from_secs(5));
    let frame = ticker.tick(Duration::from_secs(4));
    assert_eq!(frame.dt, Duration::ZERO);
}

#[test]
fn custom_cap_is_honoured() {
    let mut ticker = Ticker::with_max_dt(Duration::from_millis(33));
    let frame = ticker.advance(Duration::from_millis(250));
    assert_eq!(frame.dt, Duration::from_millis(33));
    assert_eq!(ticker.frame_index(), 1);
}

#[test]
fn subscriber_count_tracks_registrations() {
    let mut ticker = Ticker::new();
    let ids: Vec<_> = (0..12)
        .map(|i| {
            let phase = if i % 2 == 0 { Phase::Map } else { Phase::Input };
            ticker.subscribe(phase, |_| {})
        })
        .collect();
    assert_eq!(ticker.subscriber_count(), 12);
    for id in ids {
        ticker.unsubscribe(id);
    }
    assert!(ticker.is_idle());
}
