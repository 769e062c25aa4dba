use crate::dom;
use verdanza_core::ScrollHost;
use web_sys as web;

/// Scrolls the browser window on behalf of the scroll driver.
pub struct WindowScrollHost {
    window: web::Window,
}

impl WindowScrollHost {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ScrollHost for WindowScrollHost {
    fn reset_native_scroll(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn apply_scroll(&mut self, y: f32) {
        let x = self.window.scroll_x().unwrap_or(0.0);
        self.window.scroll_to_with_x_and_y(x, y as f64);
    }

    fn scroll_limit(&self) -> Option<f32> {
        let document = self.window.document()?;
        let viewport = dom::viewport(&self.window);
        Some(dom::document_height(&document) - viewport.height)
    }
}
