//! One-shot entrance reveal.
//!
//! Opens the home background's radial mask from a solid cover to fully
//! dissolved, once per session. While it runs it owns the mask parameter.

use crate::constants::{ENTRANCE_DELAY, ENTRANCE_DURATION, REVEAL_CLOSED, REVEAL_OPEN};
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::tween::Tween;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl EntranceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    fn tween(&self) -> Tween {
        Tween::new(REVEAL_CLOSED, REVEAL_OPEN, self.duration)
            .with_delay(self.delay)
            .with_easing(self.easing)
    }
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            delay: ENTRANCE_DELAY,
            duration: ENTRANCE_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceState {
    NotStarted,
    Running,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct EntranceTimeline {
    tween: Tween,
    state: EntranceState,
    elapsed: Duration,
    progress: f32,
}

impl EntranceTimeline {
    pub fn new(config: EntranceConfig) -> Self {
        Self {
            tween: config.tween(),
            state: EntranceState::NotStarted,
            elapsed: Duration::ZERO,
            progress: REVEAL_CLOSED,
        }
    }

    #[inline]
    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// Current reveal progress, `REVEAL_CLOSED..=REVEAL_OPEN`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == EntranceState::Running
    }

    /// Begin playback. Only valid from `NotStarted`; returns whether it started.
    pub fn start(&mut self) -> bool {
        if self.state != EntranceState::NotStarted {
            return false;
        }
        log::debug!("[entrance] start");
        self.state = EntranceState::Running;
        true
    }

    /// Finish without playing, leaving the mask open. Used when the session
    /// has already seen the reveal.
    pub fn skip_to_end(&mut self) {
        if self.state == EntranceState::Stopped {
            return;
        }
        self.state = EntranceState::Stopped;
        self.elapsed = self.tween.total();
        self.progress = REVEAL_OPEN;
    }

    /// Stop mid-run because the owning view went away. Progress stays where it
    /// was and no further writes happen.
    pub fn cancel(&mut self) {
        if self.state == EntranceState::Running {
            log::debug!("[entrance] cancelled at {:.1}", self.progress);
        }
        self.state = EntranceState::Stopped;
    }

    /// Advance playback. Returns the value written this frame, or `None` when
    /// not running.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if self.state != EntranceState::Running {
            return None;
        }
        self.elapsed += dt;
        let next = self.tween.sample(self.elapsed);
        // Easing round-off must never pull the mask backwards.
        self.progress = next.max(self.progress);
        if self.tween.is_finished(self.elapsed) {
            self.progress = REVEAL_OPEN;
            self.state = EntranceState::Stopped;
            log::debug!("[entrance] complete");
        }
        Some(self.progress)
    }
}

impl Default for EntranceTimeline {
    fn default() -> Self {
        Self::new(EntranceConfig::default())
    }
}
