use crate::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LINE_HEIGHT_PX: f32 = 16.0;

/// A registered DOM listener; removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    passive: bool,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<Listener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("addEventListener({kind}) failed: {:?}", e))?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Wire the raw input signals into the scene.
pub fn wire_input_handlers(window: &web::Window, app: &SharedApp) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(4);

    let a = app.clone();
    listeners.push(listen(target, "pointermove", true, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            a.borrow()
                .scene
                .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        }
    })?);

    let a = app.clone();
    let w = window.clone();
    listeners.push(listen(target, "scroll", true, move |_ev| {
        if let Ok(y) = w.scroll_y() {
            a.borrow().scene.native_scrolled(y as f32);
        }
    })?);

    // Non-passive so the driver, not the browser, moves the page.
    let a = app.clone();
    listeners.push(listen(target, "wheel", false, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let app = a.borrow();
        let scale = match ev.delta_mode() {
            web::WheelEvent::DOM_DELTA_LINE => LINE_HEIGHT_PX,
            web::WheelEvent::DOM_DELTA_PAGE => app.scene.viewport().height,
            _ => 1.0,
        };
        app.scene.wheel(ev.delta_y() as f32 * scale);
        ev.prevent_default();
    })?);

    let a = app.clone();
    listeners.push(listen(target, "resize", true, move |_ev| {
        a.borrow_mut().remeasure();
    })?);

    log::info!("[events] {} input listeners wired", listeners.len());
    Ok(listeners)
}

/// Tear everything down when the page goes away. The callback frees itself
/// after it runs.
pub fn wire_pagehide(window: &web::Window, on_hide: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(on_hide);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "pagehide",
        cb.unchecked_ref(),
        &opts,
    );
}
