// Host-side tests for the assembled scene: mount, navigation, teardown.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use verdanza_core::{
    AmbientScene, EntranceState, MotionConfig, NavigationKind, Route, ScrollHost, Session,
    Ticker, Viewport, REVEAL_CLOSED, REVEAL_OPEN,
};

const FRAME: Duration = Duration::from_micros(16_667);
const DOCUMENT_HEIGHT: f32 = 4000.0;

#[derive(Default)]
struct RecordingHost {
    resets: u32,
    applied: u32,
}

impl ScrollHost for RecordingHost {
    fn reset_native_scroll(&mut self) {
        self.resets += 1;
    }

    fn apply_scroll(&mut self, _y: f32) {
        self.applied += 1;
    }
}

fn mounted(route: Route, session: Session) -> (Ticker, AmbientScene<RecordingHost>) {
    let viewport = Viewport::new(1280.0, 800.0);
    let mut scene = AmbientScene::new(
        RecordingHost::default(),
        session,
        MotionConfig::default(),
        route,
        viewport,
    )
    .unwrap();
    scene.resized(viewport, DOCUMENT_HEIGHT);
    let mut ticker = Ticker::new();
    scene.mount(&mut ticker);
    (ticker, scene)
}

fn run(ticker: &mut Ticker, frames: usize) {
    for _ in 0..frames {
        ticker.advance(FRAME);
    }
}

fn resets(scene: &AmbientScene<RecordingHost>) -> u32 {
    scene.with_host(|h| h.resets)
}

fn applied(scene: &AmbientScene<RecordingHost>) -> u32 {
    scene.with_host(|h| h.applied)
}

#[test]
fn entrance_reveal_plays_on_first_home_mount() {
    let (mut ticker, scene) = mounted(Route::Home, Session::new());
    assert_eq!(scene.entrance_state(), Some(EntranceState::Running));
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_CLOSED);

    let mut prev = REVEAL_CLOSED;
    let mut frames = 0;
    while scene.entrance_state() == Some(EntranceState::Running) {
        ticker.advance(FRAME);
        let mask = scene.output().params.mask_reveal_percent;
        assert!(mask >= prev, "mask went backwards: {prev} -> {mask}");
        prev = mask;
        frames += 1;
        assert!(frames <= 200, "reveal did not finish");
    }
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);

    run(&mut ticker, 30);
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);
}

#[test]
fn entrance_does_not_replay_when_returning_home() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    run(&mut ticker, 200);
    assert_eq!(scene.entrance_state(), Some(EntranceState::Stopped));

    scene.navigate(&mut ticker, "/team", NavigationKind::Push);
    assert_eq!(scene.entrance_state(), None);
    scene.navigate(&mut ticker, "/", NavigationKind::Push);
    assert_eq!(scene.entrance_state(), Some(EntranceState::Stopped));
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);

    run(&mut ticker, 60);
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);
}

#[test]
fn interrupted_entrance_is_not_replayed_either() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    run(&mut ticker, 40);
    let partial = scene.reveal_progress().unwrap();
    assert!(partial > REVEAL_CLOSED && partial < REVEAL_OPEN, "{partial}");

    scene.navigate(&mut ticker, "/contact", NavigationKind::Push);
    scene.navigate(&mut ticker, "/", NavigationKind::Pop);
    assert_eq!(scene.entrance_state(), Some(EntranceState::Stopped));
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);
}

#[test]
fn entrance_skipped_when_landing_elsewhere_first() {
    let session = Session::new();
    let (mut ticker, mut scene) = mounted(Route::Team, session.clone());
    assert_eq!(scene.entrance_state(), None);
    assert!(!session.entrance_played());

    // First visit to home in this load still gets the reveal.
    scene.navigate(&mut ticker, "/", NavigationKind::Push);
    assert_eq!(scene.entrance_state(), Some(EntranceState::Running));
    assert!(session.entrance_played());
}

#[test]
fn new_session_plays_the_entrance_again() {
    let session = Session::new();
    let (mut ticker, mut first) = mounted(Route::Home, session.clone());
    run(&mut ticker, 10);
    first.unmount(&mut ticker);

    let (_, same) = mounted(Route::Home, session);
    assert_eq!(same.entrance_state(), Some(EntranceState::Stopped));

    let (_, fresh) = mounted(Route::Home, Session::new());
    assert_eq!(fresh.entrance_state(), Some(EntranceState::Running));
}

#[test]
fn unmount_mid_run_leaves_no_further_writes() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    scene.wheel(900.0);
    scene.pointer_moved(300.0, 200.0);
    scene.pointer_moved(900.0, 600.0);
    run(&mut ticker, 30);
    assert_eq!(scene.entrance_state(), Some(EntranceState::Running));
    assert!(scene.scroll_position() > 0.0 && scene.scroll_position() < 900.0);

    scene.unmount(&mut ticker);
    assert!(ticker.is_idle());
    assert_eq!(scene.entrance_state(), None);

    let output = scene.output();
    let frames = scene.frames();
    let writes = applied(&scene);
    let position = scene.scroll_position();
    let smoothed = scene.smoothed_scroll();

    for _ in 0..120 {
        ticker.advance(FRAME);
        assert_eq!(scene.output(), output);
    }
    assert_eq!(scene.frames(), frames);
    assert_eq!(applied(&scene), writes, "scroll host written after unmount");
    assert_eq!(scene.scroll_position(), position);
    assert_eq!(scene.smoothed_scroll(), smoothed);

    // Unmounting twice is harmless.
    scene.unmount(&mut ticker);
}

#[test]
fn mount_is_idempotent() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    let count = ticker.subscriber_count();
    scene.mount(&mut ticker);
    assert_eq!(ticker.subscriber_count(), count);
    assert!(scene.is_mounted());
}

#[test]
fn navbar_on_home_tracks_smoothed_scroll() {
    let (mut ticker, scene) = mounted(Route::Home, Session::new());
    assert!(!scene.output().params.navbar_visible);

    scene.wheel(900.0);
    let mut became_visible = false;
    for _ in 0..600 {
        ticker.advance(FRAME);
        let visible = scene.output().params.navbar_visible;
        assert_eq!(
            visible,
            scene.smoothed_scroll() > 700.0,
            "navbar out of step at {}",
            scene.smoothed_scroll()
        );
        became_visible |= visible;
    }
    assert!(became_visible);
    assert!((scene.smoothed_scroll() - 900.0).abs() < 1e-2);
    assert!(scene.output().navbar.condensed);
}

#[test]
fn navbar_always_visible_on_other_pages() {
    for path in ["/team", "/contact", "/waitlist", "/solution-1", "/solution-2"] {
        let (mut ticker, scene) = mounted(Route::from_path(path), Session::new());
        run(&mut ticker, 5);
        let out = scene.output();
        assert!(out.params.navbar_visible, "{path}");
        assert!(!out.navbar.condensed, "{path}");
    }
}

#[test]
fn push_navigation_resets_scroll_exactly_once() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    scene.wheel(900.0);
    run(&mut ticker, 300);
    assert_eq!(scene.scroll_position(), 900.0);

    scene.navigate(&mut ticker, "/team", NavigationKind::Push);
    assert_eq!(resets(&scene), 1);
    assert_eq!(scene.scroll_position(), 0.0);
    assert_eq!(scene.smoothed_scroll(), 0.0);
    assert!(scene.output().params.navbar_visible);

    run(&mut ticker, 120);
    assert_eq!(resets(&scene), 1);
    assert_eq!(scene.scroll_position(), 0.0);
    assert_eq!(scene.smoothed_scroll(), 0.0);
}

#[test]
fn pop_navigation_keeps_restored_offset() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    scene.navigate(&mut ticker, "/team", NavigationKind::Push);
    scene.wheel(1200.0);
    run(&mut ticker, 300);

    scene.navigate(&mut ticker, "/", NavigationKind::Pop);
    assert_eq!(resets(&scene), 1, "pop must not reset");
    assert_eq!(scene.scroll_position(), 1200.0);

    scene.native_scrolled(650.0);
    run(&mut ticker, 300);
    assert_eq!(scene.scroll_position(), 650.0);
    assert!((scene.smoothed_scroll() - 650.0).abs() < 1e-2);
    assert!(!scene.output().params.navbar_visible);
}

#[test]
fn remeasuring_after_navigation_unlocks_a_longer_page() {
    let viewport = Viewport::new(1280.0, 800.0);
    let (mut ticker, mut scene) = mounted(Route::Contact, Session::new());
    scene.resized(viewport, 1000.0);

    scene.navigate(&mut ticker, "/", NavigationKind::Push);
    scene.resized(viewport, DOCUMENT_HEIGHT);
    scene.wheel(1500.0);
    run(&mut ticker, 600);
    assert_eq!(scene.scroll_position(), 1500.0);
    assert!(scene.output().params.navbar_visible);
}

/// Reports the page height the way a browser would after layout.
struct MeasuredHost {
    limit: Rc<Cell<f32>>,
}

impl ScrollHost for MeasuredHost {
    fn reset_native_scroll(&mut self) {}

    fn apply_scroll(&mut self, _y: f32) {}

    fn scroll_limit(&self) -> Option<f32> {
        Some(self.limit.get())
    }
}

#[test]
fn scroll_limit_tracks_the_rendered_page_across_routes() {
    let viewport = Viewport::new(1280.0, 800.0);
    let limit = Rc::new(Cell::new(200.0));
    let mut scene = AmbientScene::new(
        MeasuredHost {
            limit: limit.clone(),
        },
        Session::new(),
        MotionConfig::default(),
        Route::Contact,
        viewport,
    )
    .unwrap();
    scene.resized(viewport, 1000.0);
    let mut ticker = Ticker::new();
    scene.mount(&mut ticker);

    scene.wheel(1500.0);
    run(&mut ticker, 300);
    assert_eq!(scene.scroll_position(), 200.0);

    // Home renders taller than the contact page; nobody calls resized.
    scene.navigate(&mut ticker, "/", NavigationKind::Push);
    limit.set(3200.0);
    scene.wheel(1500.0);
    run(&mut ticker, 600);
    assert_eq!(scene.scroll_position(), 1500.0);
    assert!(scene.output().params.navbar_visible);
}

#[test]
fn configured_frame_cap_reaches_every_stage() {
    let cap = Duration::from_millis(20);
    let config = MotionConfig {
        max_frame_dt: cap,
        ..MotionConfig::default()
    };
    let viewport = Viewport::new(1280.0, 800.0);
    let build = || {
        let mut scene = AmbientScene::new(
            RecordingHost::default(),
            Session::new(),
            config,
            Route::Home,
            viewport,
        )
        .unwrap();
        scene.resized(viewport, DOCUMENT_HEIGHT);
        let mut ticker = config.ticker();
        scene.mount(&mut ticker);
        scene.wheel(900.0);
        scene.pointer_moved(10.0, 10.0);
        scene.pointer_moved(900.0, 600.0);
        (ticker, scene)
    };

    let (mut stalled_ticker, stalled) = build();
    let frame = stalled_ticker.advance(Duration::from_secs(3));
    assert_eq!(frame.dt, cap);

    let (mut steady_ticker, steady) = build();
    steady_ticker.advance(cap);

    assert_eq!(stalled.scroll_position(), steady.scroll_position());
    assert_eq!(stalled.smoothed_scroll(), steady.smoothed_scroll());
    assert_eq!(stalled.output(), steady.output());
    assert!(MotionConfig {
        max_frame_dt: Duration::ZERO,
        ..MotionConfig::default()
    }
    .validate()
    .is_err());
}

#[test]
fn navigating_to_the_current_route_is_a_no_op() {
    let (mut ticker, mut scene) = mounted(Route::Home, Session::new());
    scene.wheel(400.0);
    run(&mut ticker, 300);
    scene.navigate(&mut ticker, "/#top", NavigationKind::Push);
    scene.navigate(&mut ticker, "/", NavigationKind::Replace);
    assert_eq!(resets(&scene), 0);
    assert_eq!(scene.scroll_position(), 400.0);
}

#[test]
fn navigation_closes_the_menu() {
    let (mut ticker, mut scene) = mounted(Route::Team, Session::new());
    scene.toggle_menu();
    run(&mut ticker, 1);
    assert!(scene.output().navbar.menu_open);

    scene.navigate(&mut ticker, "/contact", NavigationKind::Push);
    assert!(!scene.output().navbar.menu_open);
}

#[test]
fn navbar_slides_in_after_mount() {
    let (mut ticker, scene) = mounted(Route::Team, Session::new());
    assert!(scene.output().navbar.offset_y < 0.0);
    run(&mut ticker, 60);
    assert_eq!(scene.output().navbar.offset_y, 0.0);
}

#[test]
fn spotlight_hidden_until_pointer_moves_then_trails_it() {
    let (mut ticker, scene) = mounted(Route::Home, Session::new());
    run(&mut ticker, 2);
    assert_eq!(scene.output().spotlight.alpha, 0.0);

    scene.pointer_moved(400.0, 300.0);
    run(&mut ticker, 1);
    let spot = scene.output().spotlight;
    assert!(spot.alpha > 0.0);
    assert_eq!(spot.center, glam::Vec2::new(400.0, 300.0));

    scene.pointer_moved(900.0, 500.0);
    run(&mut ticker, 1);
    let x1 = scene.output().spotlight.center.x;
    assert!(x1 > 400.0 && x1 < 900.0, "no trailing: {x1}");

    run(&mut ticker, 300);
    let c = scene.output().spotlight.center;
    assert!((c.x - 900.0).abs() < 1e-2 && (c.y - 500.0).abs() < 1e-2, "{c:?}");

    // Off-screen pointer is pinned to the viewport edge.
    scene.pointer_moved(5000.0, -40.0);
    run(&mut ticker, 600);
    let c = scene.output().spotlight.center;
    assert!((c.x - 1280.0).abs() < 1e-2 && c.y.abs() < 1e-2, "{c:?}");
    assert!(scene.output().spotlight.css_background().starts_with("radial-gradient("));
}

#[test]
fn solution_page_mask_follows_scroll() {
    let (mut ticker, scene) = mounted(Route::SolutionOne, Session::new());
    run(&mut ticker, 2);
    let top = scene.output().params.mask_reveal_percent;
    assert!((top - 60.0).abs() < 1e-3, "{top}");
    scene.wheel(2000.0);
    run(&mut ticker, 600);
    assert_eq!(scene.output().params.mask_reveal_percent, REVEAL_OPEN);
    assert_eq!(scene.entrance_state(), None);
}

#[test]
fn route_parsing_accepts_router_shapes() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("#/"), Route::Home);
    assert_eq!(Route::from_path("#/team"), Route::Team);
    assert_eq!(Route::from_path("/contact/"), Route::Contact);
    assert_eq!(Route::from_path("/waitlist?ref=x"), Route::Waitlist);
    assert_eq!(Route::from_path("solution-2"), Route::SolutionTwo);
    assert_eq!(Route::from_path("/press"), Route::Other("/press".into()));
    assert_eq!(Route::SolutionOne.path(), "/solution-1");
}
