//! Derived parameter mapper.
//!
//! Pure functions from the current smoothed signals to the render surface.
//! Page background variants differ only in their control points, so each
//! route gets a [`BackgroundProfile`] rather than its own code path.

use crate::constants::*;
use crate::error::ConfigError;
use crate::route::{Route, Viewport};

/// Clamped linear map between two control points. Inputs outside the domain
/// take the nearest endpoint; there is no extrapolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    pub domain: [f32; 2],
    pub range: [f32; 2],
}

impl Interpolation {
    pub fn new(domain: [f32; 2], range: [f32; 2]) -> Result<Self, ConfigError> {
        let interp = Self::linear(domain, range);
        interp.validate()?;
        Ok(interp)
    }

    /// Unchecked constructor for the built-in tables.
    pub const fn linear(domain: [f32; 2], range: [f32; 2]) -> Self {
        Self { domain, range }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [start, end] = self.domain;
        if !(start.is_finite() && end.is_finite()) || start == end {
            return Err(ConfigError::InvalidDomain { start, end });
        }
        Ok(())
    }

    pub fn map(&self, x: f32) -> f32 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if x.is_nan() || span == 0.0 || !span.is_finite() {
            return r0;
        }
        let t = ((x - d0) / span).clamp(0.0, 1.0);
        r0 + (r1 - r0) * t
    }
}

/// When the navbar is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavbarRule {
    Always,
    /// Hidden until the page has scrolled past the fold minus `margin` pixels.
    AfterFold { margin: f32 },
}

impl NavbarRule {
    pub fn threshold(&self, viewport: &Viewport) -> f32 {
        match self {
            NavbarRule::Always => 0.0,
            NavbarRule::AfterFold { margin } => (viewport.height - margin).max(0.0),
        }
    }

    pub fn visible(&self, scroll: f32, viewport: &Viewport) -> bool {
        match self {
            NavbarRule::Always => true,
            NavbarRule::AfterFold { .. } => scroll > self.threshold(viewport),
        }
    }
}

/// Scroll-driven background behaviour for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundProfile {
    pub translate_y: Option<Interpolation>,
    pub scale: Option<Interpolation>,
    pub blur: Option<Interpolation>,
    pub overlay: Option<Interpolation>,
    pub mask: Option<Interpolation>,
    pub navbar: NavbarRule,
}

impl BackgroundProfile {
    /// No ambient effects; navbar always shown.
    pub const STATIC: Self = Self {
        translate_y: None,
        scale: None,
        blur: None,
        overlay: None,
        mask: None,
        navbar: NavbarRule::Always,
    };

    pub const HOME: Self = Self {
        translate_y: Some(Interpolation::linear(
            [0.0, HOME_SCROLL_SPAN_PX],
            [0.0, HOME_TRANSLATE_MAX_PX],
        )),
        scale: Some(Interpolation::linear(
            [0.0, HOME_SCROLL_SPAN_PX],
            [1.0, HOME_SCALE_MAX],
        )),
        blur: Some(Interpolation::linear(
            [0.0, HOME_FADE_SPAN_PX],
            [0.0, HOME_BLUR_MAX_PX],
        )),
        overlay: Some(Interpolation::linear(
            [0.0, HOME_FADE_SPAN_PX],
            [0.0, HOME_OVERLAY_MAX],
        )),
        mask: None,
        navbar: NavbarRule::AfterFold {
            margin: NAVBAR_FOLD_MARGIN_PX,
        },
    };

    pub const SOLUTION: Self = Self {
        translate_y: Some(Interpolation::linear(
            [0.0, SOLUTION_SCROLL_SPAN_PX],
            [0.0, SOLUTION_TRANSLATE_MAX_PX],
        )),
        scale: Some(Interpolation::linear(
            [0.0, SOLUTION_SCROLL_SPAN_PX],
            [1.0, SOLUTION_SCALE_MAX],
        )),
        blur: Some(Interpolation::linear(
            [0.0, SOLUTION_SCROLL_SPAN_PX],
            [0.0, SOLUTION_BLUR_MAX_PX],
        )),
        overlay: Some(Interpolation::linear(
            [0.0, SOLUTION_SCROLL_SPAN_PX],
            [0.0, SOLUTION_OVERLAY_MAX],
        )),
        mask: Some(Interpolation::linear(
            [0.0, SOLUTION_SCROLL_SPAN_PX],
            [SOLUTION_MASK_FROM, REVEAL_OPEN],
        )),
        navbar: NavbarRule::Always,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        [
            self.translate_y,
            self.scale,
            self.blur,
            self.overlay,
            self.mask,
        ]
        .iter()
        .flatten()
        .try_for_each(Interpolation::validate)
    }
}

impl Default for BackgroundProfile {
    fn default() -> Self {
        Self::STATIC
    }
}

/// Background variant for a route. Ambient effects only exist on the home
/// and solution pages.
pub fn profile_for(route: &Route) -> BackgroundProfile {
    match route {
        Route::Home => BackgroundProfile::HOME,
        Route::SolutionOne | Route::SolutionTwo => BackgroundProfile::SOLUTION,
        Route::Team | Route::Contact | Route::Waitlist | Route::Other(_) => {
            BackgroundProfile::STATIC
        }
    }
}

/// Visual parameters handed to the presentation layer every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub translate_y: f32,
    pub scale: f32,
    pub blur_radius_px: f32,
    /// 0..1
    pub overlay_opacity: f32,
    pub mask_reveal_percent: f32,
    pub navbar_visible: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
            blur_radius_px: 0.0,
            overlay_opacity: 0.0,
            mask_reveal_percent: REVEAL_OPEN,
            navbar_visible: true,
        }
    }
}

/// Signals sampled for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperInput {
    /// Smoothed scroll offset in pixels.
    pub scroll: f32,
    pub viewport: Viewport,
    /// Entrance reveal progress while the timeline owns the mask.
    pub reveal: Option<f32>,
}

pub fn map_params(profile: &BackgroundProfile, input: &MapperInput) -> RenderParams {
    let scroll = if input.scroll.is_finite() {
        input.scroll.max(0.0)
    } else {
        0.0
    };
    let apply = |interp: &Option<Interpolation>, rest: f32| {
        interp.as_ref().map_or(rest, |i| i.map(scroll))
    };

    let mask = match input.reveal {
        Some(reveal) if reveal.is_finite() => reveal,
        _ => apply(&profile.mask, REVEAL_OPEN),
    };
    let scale = apply(&profile.scale, 1.0);

    RenderParams {
        translate_y: apply(&profile.translate_y, 0.0),
        scale: if scale > 0.0 { scale } else { 1.0 },
        blur_radius_px: apply(&profile.blur, 0.0).max(0.0),
        overlay_opacity: apply(&profile.overlay, 0.0).clamp(0.0, 1.0),
        mask_reveal_percent: mask.clamp(REVEAL_CLOSED, REVEAL_OPEN),
        navbar_visible: profile.navbar.visible(scroll, &input.viewport),
    }
}
