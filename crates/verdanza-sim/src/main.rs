//! Headless replay of one site visit.
//!
//! Drives the same scene the browser does with a scripted timeline of input
//! so spring and mapping constants can be tuned from the terminal:
//!
//! ```text
//! RUST_LOG=info cargo run -p verdanza-sim -- [seed]
//! ```

use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;
use verdanza_core::{
    AmbientScene, FrameOutput, MotionConfig, NavigationKind, Route, ScrollHost, Session, Ticker,
    Viewport,
};

const FRAME: Duration = Duration::from_micros(16_667);
const LOG_EVERY: u64 = 15;
const DOCUMENT_HEIGHT: f32 = 4200.0;

/// Stands in for the browser window; counts what the driver asked of it.
#[derive(Default)]
struct LoggingHost {
    resets: u32,
    applied: u32,
    native_y: f32,
}

impl ScrollHost for LoggingHost {
    fn reset_native_scroll(&mut self) {
        self.resets += 1;
        self.native_y = 0.0;
        log::info!("[host] native scroll reset");
    }

    fn apply_scroll(&mut self, y: f32) {
        self.applied += 1;
        self.native_y = y;
    }
}

struct Sim {
    ticker: Ticker,
    scene: AmbientScene<LoggingHost>,
    rng: StdRng,
    pointer: Vec2,
}

impl Sim {
    fn new(seed: u64) -> anyhow::Result<Self> {
        let viewport = Viewport::new(1440.0, 900.0);
        let config = MotionConfig::default();
        let mut ticker = config.ticker();
        let mut scene = AmbientScene::new(
            LoggingHost::default(),
            Session::new(),
            config,
            Route::Home,
            viewport,
        )?;
        scene.resized(viewport, DOCUMENT_HEIGHT);
        scene.mount(&mut ticker);
        Ok(Self {
            ticker,
            scene,
            rng: StdRng::seed_from_u64(seed),
            pointer: viewport.center(),
        })
    }

    /// Wander the pointer with some jitter, like a hand on a trackpad.
    fn jiggle_pointer(&mut self) {
        let step = Vec2::new(self.rng.gen_range(-18.0..18.0), self.rng.gen_range(-12.0..12.0));
        let vp = self.scene.viewport();
        self.pointer = (self.pointer + step).clamp(Vec2::ZERO, Vec2::new(vp.width, vp.height));
        self.scene.pointer_moved(self.pointer.x, self.pointer.y);
    }

    fn run(&mut self, frames: u64, mut each: impl FnMut(&mut Self, u64)) {
        for i in 0..frames {
            each(self, i);
            let frame = self.ticker.advance(FRAME);
            if frame.index % LOG_EVERY == 0 {
                log_frame(frame.index, &self.scene.route(), &self.scene.output());
            }
        }
    }
}

fn log_frame(index: u64, route: &Route, out: &FrameOutput) {
    let p = &out.params;
    log::info!(
        "#{index:>4} {:<12} ty={:>6.1} scale={:.3} blur={:>4.1} overlay={:.2} mask={:>6.1} nav={}{} spot=({:.0},{:.0})",
        route.path(),
        p.translate_y,
        p.scale,
        p.blur_radius_px,
        p.overlay_opacity,
        p.mask_reveal_percent,
        if p.navbar_visible { "shown" } else { "hidden" },
        if out.navbar.condensed { "/condensed" } else { "" },
        out.spotlight.center.x,
        out.spotlight.center.y,
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse::<u64>()?,
        None => 42,
    };
    log::info!("verdanza-sim starting (seed {seed})");

    let mut sim = Sim::new(seed)?;

    // Entrance reveal with the pointer drifting.
    sim.run(180, |s, _| s.jiggle_pointer());

    // Wheel down past the fold.
    sim.run(120, |s, i| {
        if i % 4 == 0 {
            s.scene.wheel(120.0);
        }
        s.jiggle_pointer();
    });

    // Fresh navigation: both scroll models go to the top.
    let Sim { ticker, scene, .. } = &mut sim;
    scene.navigate(ticker, "/team", NavigationKind::Push);
    sim.run(60, |s, _| s.jiggle_pointer());

    // History back: the host restores the old offset, the driver adopts it.
    let Sim { ticker, scene, .. } = &mut sim;
    scene.navigate(ticker, "/", NavigationKind::Pop);
    scene.native_scrolled(1200.0);
    sim.run(90, |s, _| s.jiggle_pointer());

    let Sim { ticker, scene, .. } = &mut sim;
    scene.unmount(ticker);
    let frames_before = scene.frames();
    sim.run(10, |_, _| {});

    let (resets, applied, native_y) = sim.scene.with_host(|h| (h.resets, h.applied, h.native_y));
    log::info!(
        "done: {} frames, {} native resets, {} scroll writes (last y={:.0}), {} frames after unmount",
        sim.scene.frames(),
        resets,
        applied,
        native_y,
        sim.scene.frames() - frames_before
    );
    Ok(())
}
