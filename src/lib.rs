#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use verdanza_core::{AmbientScene, MotionConfig, NavigationKind, Route, Session, Ticker};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod host;
mod surface;

use host::WindowScrollHost;

pub(crate) struct App {
    window: web::Window,
    document: web::Document,
    ticker: Ticker,
    pub(crate) scene: AmbientScene<WindowScrollHost>,
    surface: surface::Surface,
    clock: Instant,
    /// Last measured `scrollHeight`; late content changes it between frames.
    document_height: f32,
}

pub(crate) type SharedApp = Rc<RefCell<App>>;

impl App {
    fn frame(&mut self) {
        let height = dom::document_height(&self.document);
        if height != self.document_height {
            self.remeasure();
        }
        self.ticker.tick(self.clock.elapsed());
        let out = self.scene.output();
        self.surface.apply(&self.document, &out);
    }

    fn navigate(&mut self, path: &str, kind: NavigationKind) {
        self.scene.navigate(&mut self.ticker, path, kind);
        self.remeasure();
    }

    fn remeasure(&mut self) {
        self.document_height = dom::document_height(&self.document);
        self.scene.resized(dom::viewport(&self.window), self.document_height);
    }

    fn unmount(&mut self) {
        self.scene.unmount(&mut self.ticker);
    }
}

/// Live wiring for one page load; dropping it removes the listeners.
struct Runtime {
    app: SharedApp,
    _listeners: Vec<events::Listener>,
    frames: frame::FrameLoop,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("verdanza-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let path = dom::current_path(&window);
    let viewport = dom::viewport(&window);
    let config = MotionConfig::default();
    let mut ticker = config.ticker();
    let mut scene = AmbientScene::new(
        WindowScrollHost::new(window.clone()),
        Session::new(),
        config,
        Route::from_path(&path),
        viewport,
    )?;
    let document_height = dom::document_height(&document);
    scene.resized(viewport, document_height);
    if let Ok(y) = window.scroll_y() {
        scene.native_scrolled(y as f32);
    }
    scene.mount(&mut ticker);
    log::info!("[init] mounted on {} ({}x{})", path, viewport.width, viewport.height);

    let app: SharedApp = Rc::new(RefCell::new(App {
        window: window.clone(),
        document,
        ticker,
        scene,
        surface: surface::Surface::default(),
        clock: Instant::now(),
        document_height,
    }));

    let listeners = events::wire_input_handlers(&window, &app)?;
    events::wire_pagehide(&window, teardown);

    let app_frame = app.clone();
    let frames = frame::FrameLoop::start(move || app_frame.borrow_mut().frame())?;

    RUNTIME.with(|rt| {
        *rt.borrow_mut() = Some(Runtime {
            app,
            _listeners: listeners,
            frames,
        });
    });
    Ok(())
}

/// Routing surface: the router reports every location change. `is_pop` is
/// true for history back/forward.
#[wasm_bindgen]
pub fn notify_navigation(path: &str, is_pop: bool) {
    let kind = if is_pop {
        NavigationKind::Pop
    } else {
        NavigationKind::Push
    };
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow().as_ref() {
            rt.app.borrow_mut().navigate(path, kind);
        } else {
            log::warn!("[nav] {path} before init; ignored");
        }
    });
}

#[wasm_bindgen]
pub fn toggle_menu() {
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow().as_ref() {
            rt.app.borrow().scene.toggle_menu();
        }
    });
}

/// Stop the frame loop, remove listeners and unmount the scene. Safe to call
/// more than once.
#[wasm_bindgen]
pub fn teardown() {
    let Some(rt) = RUNTIME.with(|rt| rt.borrow_mut().take()) else {
        return;
    };
    rt.frames.stop();
    rt.app.borrow_mut().unmount();
    log::info!("[teardown] done");
    // Listeners are removed as `rt` drops here.
}
