//! Ambient scene: wires the signal sources, smoothing, mapping and the
//! entrance timeline onto a [`Ticker`], and owns their teardown.
//!
//! Shared state lives in one `Rc<RefCell<_>>`; each phase callback borrows it
//! for the duration of its own step only.

use crate::config::MotionConfig;
use crate::entrance::{EntranceState, EntranceTimeline};
use crate::error::ConfigError;
use crate::mapper::{map_params, profile_for, BackgroundProfile, MapperInput, RenderParams};
use crate::navbar::{Navbar, NavbarState};
use crate::route::{NavigationKind, Route, Viewport};
use crate::scroll::{ScrollDriver, ScrollHost};
use crate::session::Session;
use crate::spotlight::{Spotlight, SpotlightParams};
use crate::spring::Spring;
use crate::ticker::{Phase, TickId, Ticker};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the presentation layer reads after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub params: RenderParams,
    pub spotlight: SpotlightParams,
    pub navbar: NavbarState,
}

struct SceneState<H: ScrollHost> {
    route: Route,
    profile: BackgroundProfile,
    viewport: Viewport,
    scroll: ScrollDriver<H>,
    scroll_spring: Spring,
    spotlight: Spotlight,
    navbar: Navbar,
    /// Present while the home background view is mounted.
    entrance: Option<EntranceTimeline>,
    output: FrameOutput,
    frames: u64,
}

impl<H: ScrollHost> SceneState<H> {
    fn remap(&mut self) {
        let reveal = self
            .entrance
            .as_ref()
            .filter(|t| t.is_running())
            .map(EntranceTimeline::progress);
        let params = map_params(
            &self.profile,
            &MapperInput {
                scroll: self.scroll_spring.value(),
                viewport: self.viewport,
                reveal,
            },
        );
        self.output = FrameOutput {
            params,
            spotlight: self.spotlight.params(),
            navbar: self
                .navbar
                .state(params.navbar_visible, self.scroll.position()),
        };
    }
}

pub struct AmbientScene<H: ScrollHost + 'static> {
    state: Rc<RefCell<SceneState<H>>>,
    session: Session,
    config: MotionConfig,
    ticks: SmallVec<[TickId; 4]>,
    entrance_tick: Option<TickId>,
    mounted: bool,
}

impl<H: ScrollHost + 'static> AmbientScene<H> {
    pub fn new(
        host: H,
        session: Session,
        config: MotionConfig,
        route: Route,
        viewport: Viewport,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let profile = profile_for(&route);
        profile.validate()?;
        let mut state = SceneState {
            route,
            profile,
            viewport,
            scroll: ScrollDriver::new(host, config.scroll),
            scroll_spring: Spring::new(config.scroll_spring, 0.0)
                .with_max_dt(config.max_frame_dt),
            spotlight: Spotlight::new(config.spotlight_spring).with_max_dt(config.max_frame_dt),
            navbar: Navbar::new(),
            entrance: None,
            output: FrameOutput {
                params: RenderParams::default(),
                spotlight: Spotlight::new(config.spotlight_spring).params(),
                navbar: NavbarState::default(),
            },
            frames: 0,
        };
        state.remap();
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            session,
            config,
            ticks: SmallVec::new(),
            entrance_tick: None,
            mounted: false,
        })
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Register the per-frame work. Calling it twice is a no-op.
    pub fn mount(&mut self, ticker: &mut Ticker) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let state = self.state.clone();
        self.ticks.push(ticker.subscribe(Phase::Input, move |frame| {
            let mut st = state.borrow_mut();
            st.frames += 1;
            st.scroll.step(frame.dt);
        }));

        let state = self.state.clone();
        self.ticks.push(ticker.subscribe(Phase::Smooth, move |frame| {
            let mut st = state.borrow_mut();
            let target = st.scroll.position();
            st.scroll_spring.set_target(target);
            st.scroll_spring.step(frame.dt);
            st.spotlight.step(frame.dt);
            st.navbar.advance(frame.dt);
        }));

        let state = self.state.clone();
        self.ticks.push(ticker.subscribe(Phase::Map, move |_frame| {
            state.borrow_mut().remap();
        }));

        let is_home = self.state.borrow().route.is_home();
        if is_home {
            self.mount_home_background(ticker);
        }
        self.state.borrow_mut().remap();
        log::debug!("[scene] mounted with {} frame callbacks", ticker.subscriber_count());
    }

    /// Remove every frame callback this scene registered. Any running entrance
    /// is cancelled; after this no frame touches the scene's state.
    pub fn unmount(&mut self, ticker: &mut Ticker) {
        if !self.mounted {
            return;
        }
        self.unmount_home_background(ticker);
        for id in self.ticks.drain(..) {
            ticker.unsubscribe(id);
        }
        self.mounted = false;
        log::debug!("[scene] unmounted");
    }

    fn mount_home_background(&mut self, ticker: &mut Ticker) {
        if self.entrance_tick.is_some() {
            return;
        }
        let mut timeline = EntranceTimeline::new(self.config.entrance);
        if self.session.claim_entrance() {
            log::info!("[scene] playing entrance reveal");
            timeline.start();
        } else {
            timeline.skip_to_end();
        }
        self.state.borrow_mut().entrance = Some(timeline);

        let state = self.state.clone();
        self.entrance_tick = Some(ticker.subscribe(Phase::Timeline, move |frame| {
            let mut guard = state.borrow_mut();
            let st = &mut *guard;
            if let Some(reveal) = st.entrance.as_mut().and_then(|t| t.advance(frame.dt)) {
                st.output.params.mask_reveal_percent = reveal;
            }
        }));
    }

    fn unmount_home_background(&mut self, ticker: &mut Ticker) {
        if let Some(id) = self.entrance_tick.take() {
            ticker.unsubscribe(id);
        }
        if let Some(mut timeline) = self.state.borrow_mut().entrance.take() {
            timeline.cancel();
        }
    }

    /// The router moved to `path`. `kind` tells fresh navigations from history
    /// restorations.
    pub fn navigate(&mut self, ticker: &mut Ticker, path: &str, kind: NavigationKind) {
        let route = Route::from_path(path);
        if route == self.state.borrow().route {
            return;
        }
        log::info!("[scene] navigate to {} ({:?})", route.path(), kind);

        if self.mounted {
            self.unmount_home_background(ticker);
        }
        let profile = profile_for(&route);
        {
            let mut st = self.state.borrow_mut();
            st.route = route.clone();
            st.profile = profile;
            st.navbar.on_route_change();
            st.scroll.on_navigation(kind);
            if !kind.restores_scroll() {
                st.scroll_spring.snap_to(0.0);
            }
        }
        if self.mounted && route.is_home() {
            self.mount_home_background(ticker);
        }
        self.state.borrow_mut().remap();
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        let mut st = self.state.borrow_mut();
        let viewport = st.viewport;
        st.spotlight.pointer_moved(Vec2::new(x, y), &viewport);
    }

    pub fn native_scrolled(&self, y: f32) {
        self.state.borrow_mut().scroll.on_native_scroll(y);
    }

    pub fn wheel(&self, delta_y: f32) {
        self.state.borrow_mut().scroll.on_wheel(delta_y);
    }

    pub fn scroll_to(&self, y: f32, immediate: bool) {
        self.state.borrow_mut().scroll.scroll_to(y, immediate);
    }

    pub fn resized(&self, viewport: Viewport, document_height: f32) {
        let mut st = self.state.borrow_mut();
        st.viewport = viewport;
        st.scroll.set_limit(document_height - viewport.height);
    }

    pub fn toggle_menu(&self) {
        self.state.borrow_mut().navbar.toggle_menu();
    }

    pub fn output(&self) -> FrameOutput {
        self.state.borrow().output
    }

    pub fn route(&self) -> Route {
        self.state.borrow().route.clone()
    }

    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    pub fn scroll_position(&self) -> f32 {
        self.state.borrow().scroll.position()
    }

    pub fn smoothed_scroll(&self) -> f32 {
        self.state.borrow().scroll_spring.value()
    }

    /// `None` when the home background is not mounted.
    pub fn entrance_state(&self) -> Option<EntranceState> {
        self.state.borrow().entrance.as_ref().map(EntranceTimeline::state)
    }

    pub fn reveal_progress(&self) -> Option<f32> {
        self.state
            .borrow()
            .entrance
            .as_ref()
            .map(EntranceTimeline::progress)
    }

    /// Frames processed while mounted.
    pub fn frames(&self) -> u64 {
        self.state.borrow().frames
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Inspect the scroll host.
    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(self.state.borrow().scroll.host())
    }
}
