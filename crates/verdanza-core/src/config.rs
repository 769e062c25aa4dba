use crate::constants::MAX_FRAME_DT;
use crate::entrance::EntranceConfig;
use crate::error::ConfigError;
use crate::scroll::ScrollConfig;
use crate::spring::SpringParams;
use crate::ticker::Ticker;
use std::time::Duration;

/// Everything tunable about the ambient motion. `Default` reproduces the
/// shipped feel from `constants.rs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub spotlight_spring: SpringParams,
    pub scroll_spring: SpringParams,
    pub scroll: ScrollConfig,
    pub entrance: EntranceConfig,
    pub max_frame_dt: Duration,
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spotlight_spring.validate()?;
        self.scroll_spring.validate()?;
        self.scroll.validate()?;
        self.entrance.validate()?;
        if self.max_frame_dt.is_zero() {
            return Err(ConfigError::ZeroFrameCap);
        }
        Ok(())
    }

    /// A frame scheduler capping deltas at `max_frame_dt`.
    pub fn ticker(&self) -> Ticker {
        Ticker::with_max_dt(self.max_frame_dt)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spotlight_spring: SpringParams::spotlight(),
            scroll_spring: SpringParams::scroll(),
            scroll: ScrollConfig::default(),
            entrance: EntranceConfig::default(),
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}
