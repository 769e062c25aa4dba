//! Cursor spotlight: a soft radial glow that trails the pointer.

use crate::constants::{
    SPOTLIGHT_ALPHA, SPOTLIGHT_FADE_PERCENT, SPOTLIGHT_RADIUS_PX, SPOTLIGHT_RGB,
};
use crate::route::Viewport;
use crate::spring::{Spring2, SpringParams};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightParams {
    /// Glow centre in viewport pixels.
    pub center: Vec2,
    pub radius_px: f32,
    pub alpha: f32,
}

impl SpotlightParams {
    /// CSS `background` value for the glow layer.
    pub fn css_background(&self) -> String {
        let [r, g, b] = SPOTLIGHT_RGB;
        format!(
            "radial-gradient({:.0}px circle at {:.1}px {:.1}px, rgba({r}, {g}, {b}, {:.2}), transparent {:.0}%)",
            self.radius_px, self.center.x, self.center.y, self.alpha, SPOTLIGHT_FADE_PERCENT
        )
    }
}

#[derive(Clone, Debug)]
pub struct Spotlight {
    spring: Spring2,
    /// Last raw pointer position; `None` until the first move.
    raw: Option<Vec2>,
}

impl Spotlight {
    pub fn new(params: SpringParams) -> Self {
        Self {
            spring: Spring2::new(params, Vec2::ZERO),
            raw: None,
        }
    }

    pub fn with_max_dt(self, max_dt: Duration) -> Self {
        Self {
            spring: self.spring.with_max_dt(max_dt),
            ..self
        }
    }

    /// Raw pointer in viewport pixels. Positions outside the viewport (fast
    /// drags, pointer capture) are clamped to its edges.
    pub fn pointer_moved(&mut self, px: Vec2, viewport: &Viewport) {
        if !px.is_finite() {
            return;
        }
        let clamped = px.clamp(Vec2::ZERO, Vec2::new(viewport.width, viewport.height));
        if self.raw.is_none() {
            self.spring.snap_to(clamped);
        }
        self.raw = Some(clamped);
        self.spring.set_target(clamped);
    }

    pub fn step(&mut self, dt: Duration) -> Vec2 {
        self.spring.step(dt)
    }

    #[inline]
    pub fn raw(&self) -> Option<Vec2> {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.spring.value()
    }

    pub fn params(&self) -> SpotlightParams {
        SpotlightParams {
            center: self.spring.value(),
            radius_px: SPOTLIGHT_RADIUS_PX,
            alpha: if self.raw.is_some() {
                SPOTLIGHT_ALPHA
            } else {
                0.0
            },
        }
    }
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(SpringParams::spotlight())
    }
}
