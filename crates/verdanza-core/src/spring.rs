//! Smoothing stage: a mass-spring-damper filter stepped once per frame.
//!
//! The ODE `m x'' + c x' + k x = 0` (x measured from the target) is solved in
//! closed form for each step, so the result is exact for any frame delta and
//! cannot blow up the way an explicit integrator does on a long frame. The
//! delta is still capped so a backgrounded tab resumes with a small step
//! instead of teleporting to the target.

use crate::constants::{
    MAX_FRAME_DT, REST_DELTA, REST_SPEED, SCROLL_SPRING_DAMPING, SCROLL_SPRING_MASS,
    SCROLL_SPRING_STIFFNESS, SPOTLIGHT_DAMPING, SPOTLIGHT_MASS, SPOTLIGHT_STIFFNESS,
};
use crate::error::ConfigError;
use glam::Vec2;
use std::time::Duration;

/// Physical parameters of a spring. Higher stiffness tracks faster, higher
/// damping oscillates less.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, ConfigError> {
        let params = Self {
            stiffness,
            damping,
            mass,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidSpring { name, value });
            }
        }
        Ok(())
    }

    /// Cursor spotlight feel.
    pub fn spotlight() -> Self {
        Self {
            stiffness: SPOTLIGHT_STIFFNESS,
            damping: SPOTLIGHT_DAMPING,
            mass: SPOTLIGHT_MASS,
        }
    }

    /// Scroll position feeding the parallax mapping.
    pub fn scroll() -> Self {
        Self {
            stiffness: SCROLL_SPRING_STIFFNESS,
            damping: SCROLL_SPRING_DAMPING,
            mass: SCROLL_SPRING_MASS,
        }
    }

    /// Undamped angular frequency ω₀ = √(k/m).
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// ζ = c / (2√(km)); 1 is critical.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::spotlight()
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
    max_dt: Duration,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            params,
            value: initial,
            velocity: 0.0,
            target: initial,
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Longest delta a single step integrates.
    pub fn with_max_dt(mut self, max_dt: Duration) -> Self {
        self.max_dt = max_dt;
        self
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to `value` with no motion left.
    pub fn snap_to(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by one frame and return the new value.
    pub fn step(&mut self, dt: Duration) -> f32 {
        let t = dt.min(self.max_dt).as_secs_f32();
        if t <= 0.0 || self.is_at_rest() {
            return self.value;
        }
        let x0 = self.value - self.target;
        let (x, v) = solve(&self.params, x0, self.velocity, t);
        if !(x.is_finite() && v.is_finite()) {
            log::warn!("[spring] non-finite step (x0={x0}, v0={}), settling", self.velocity);
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        if x.abs() < REST_DELTA && v.abs() < REST_SPEED {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }
        self.value
    }
}

/// Displacement and velocity after `t` seconds, starting from `x0`, `v0`.
fn solve(params: &SpringParams, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let omega = params.natural_frequency();
    let zeta = params.damping_ratio();
    if !(omega.is_finite() && omega > 0.0 && zeta.is_finite() && zeta > 0.0) {
        return (0.0, 0.0);
    }

    if (zeta - 1.0).abs() < 1e-3 {
        // x = e^{-ωt} (A + Bt)
        let b = v0 + omega * x0;
        let decay = (-omega * t).exp();
        let x = decay * (x0 + b * t);
        let v = decay * (v0 - omega * b * t);
        (x, v)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let b = (v0 + zeta * omega * x0) / omega_d;
        let x = decay * (x0 * cos + b * sin);
        let v = decay
            * ((b * omega_d - zeta * omega * x0) * cos - (x0 * omega_d + zeta * omega * b) * sin);
        (x, v)
    } else {
        let s = (zeta * zeta - 1.0).sqrt();
        // ζ - s == 1 / (ζ + s); the reciprocal form avoids cancellation.
        let r1 = -omega / (zeta + s);
        let r2 = -omega * (zeta + s);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

/// Two springs sharing parameters, for pointer coordinates.
#[derive(Clone, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(params: SpringParams, initial: Vec2) -> Self {
        Self {
            x: Spring::new(params, initial.x),
            y: Spring::new(params, initial.y),
        }
    }

    pub fn with_max_dt(self, max_dt: Duration) -> Self {
        Self {
            x: self.x.with_max_dt(max_dt),
            y: self.y.with_max_dt(max_dt),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.x.snap_to(value.x);
        self.y.snap_to(value.y);
    }

    pub fn step(&mut self, dt: Duration) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}
