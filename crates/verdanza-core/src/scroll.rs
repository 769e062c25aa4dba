//! Continuous scroll driver.
//!
//! Wheel and touch input move a target offset; every frame the rendered
//! position approaches it with a frame-rate independent exponential step and
//! is pushed back to the host. Native scroll events that the driver did not
//! cause (scrollbar drags, keyboard, history restoration) re-sync it.

use crate::constants::{SCROLL_LERP_RATE, SCROLL_SNAP_PX, SCROLL_WHEEL_MULTIPLIER};
use crate::error::ConfigError;
use crate::route::NavigationKind;
use std::time::Duration;

/// The page's own scroll model.
pub trait ScrollHost {
    /// Reset the native scroll offset to the top, e.g. `window.scrollTo(0, 0)`.
    fn reset_native_scroll(&mut self);
    /// Move the native scroll offset to the driver's interpolated position.
    fn apply_scroll(&mut self, y: f32);
    /// Largest reachable offset as the host currently lays out the page, if
    /// it can measure it. Content changes after a route change or a late image
    /// load show up here.
    fn scroll_limit(&self) -> Option<f32> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Exponential approach rate per second.
    pub lerp_rate: f32,
    pub wheel_multiplier: f32,
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("lerp_rate", self.lerp_rate),
            ("wheel_multiplier", self.wheel_multiplier),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lerp_rate: SCROLL_LERP_RATE,
            wheel_multiplier: SCROLL_WHEEL_MULTIPLIER,
        }
    }
}

pub struct ScrollDriver<H: ScrollHost> {
    host: H,
    config: ScrollConfig,
    position: f32,
    target: f32,
    /// Largest reachable offset (document height minus viewport height).
    limit: f32,
}

impl<H: ScrollHost> ScrollDriver<H> {
    pub fn new(host: H, config: ScrollConfig) -> Self {
        Self {
            host,
            config,
            position: 0.0,
            target: 0.0,
            limit: f32::MAX,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.position != self.target
    }

    fn clamp(&self, y: f32) -> f32 {
        if y.is_finite() {
            y.clamp(0.0, self.limit)
        } else {
            0.0
        }
    }

    /// Re-read the limit from the host, when it can measure one.
    pub fn refresh_limit(&mut self) {
        if let Some(limit) = self.host.scroll_limit() {
            if limit != self.limit {
                self.set_limit(limit);
            }
        }
    }

    pub fn set_limit(&mut self, limit: f32) {
        self.limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.position = self.clamp(self.position);
        self.target = self.clamp(self.target);
    }

    /// Velocity-style input from a wheel or touch gesture.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.refresh_limit();
        self.target = self.clamp(self.target + delta_y * self.config.wheel_multiplier);
    }

    /// The host scrolled on its own; adopt its offset without animating.
    pub fn on_native_scroll(&mut self, y: f32) {
        if self.is_animating() {
            // Echo of our own apply_scroll.
            return;
        }
        self.refresh_limit();
        let y = self.clamp(y);
        self.position = y;
        self.target = y;
    }

    pub fn scroll_to(&mut self, y: f32, immediate: bool) {
        self.target = self.clamp(y);
        if immediate {
            self.position = self.target;
        }
    }

    /// React to a route change. Fresh navigations start at the top, with both
    /// scroll models reset; history restorations are left to the host.
    pub fn on_navigation(&mut self, kind: NavigationKind) {
        if kind.restores_scroll() {
            // Drop any in-flight animation so the restored offset is adopted
            // instead of treated as an echo.
            log::debug!("[scroll] {kind:?}: leaving restoration to the host");
            self.target = self.position;
            return;
        }
        log::debug!("[scroll] {kind:?}: reset to top");
        self.host.reset_native_scroll();
        self.scroll_to(0.0, true);
    }

    /// Integrate one frame and return the rendered position.
    pub fn step(&mut self, dt: Duration) -> f32 {
        if !self.is_animating() {
            return self.position;
        }
        self.refresh_limit();
        if !self.is_animating() {
            return self.position;
        }
        let alpha = 1.0 - (-dt.as_secs_f32() * self.config.lerp_rate).exp();
        let next = self.position + (self.target - self.position) * alpha;
        self.position = if (self.target - next).abs() < SCROLL_SNAP_PX {
            self.target
        } else {
            self.clamp(next)
        };
        self.host.apply_scroll(self.position);
        self.position
    }
}
