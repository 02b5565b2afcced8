use crate::constants::*;
use crate::error::{non_negative_ms, Error, Result};

/// Every tunable delay, interval and factor used by the page effects.
///
/// Front-ends build one of these (usually `Default`) and hand the relevant
/// fields to each component.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTimings {
    pub scroll_throttle_ms: f64,
    pub parallax_throttle_ms: f64,
    pub type_delay_ms: f64,
    pub type_start_delay_ms: f64,
    pub counter_duration_ms: f64,
    pub counter_stagger_ms: f64,
    pub skill_bar_delay_ms: f64,
    pub glow_smoothing: f64,
    pub form_reset_ms: f64,
    pub nav_initial_update_ms: f64,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            parallax_throttle_ms: PARALLAX_THROTTLE_MS,
            type_delay_ms: TYPE_DELAY_MS,
            type_start_delay_ms: TYPE_START_DELAY_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_stagger_ms: COUNTER_STAGGER_MS,
            skill_bar_delay_ms: SKILL_BAR_DELAY_MS,
            glow_smoothing: GLOW_SMOOTHING,
            form_reset_ms: FORM_RESET_MS,
            nav_initial_update_ms: NAV_INITIAL_UPDATE_MS,
        }
    }
}

impl EffectTimings {
    /// Check the same preconditions the components enforce, up front.
    pub fn validate(&self) -> Result<()> {
        for interval in [self.scroll_throttle_ms, self.parallax_throttle_ms] {
            if !non_negative_ms(interval) {
                return Err(Error::InvalidInterval(interval));
            }
        }
        if !non_negative_ms(self.counter_duration_ms) {
            return Err(Error::InvalidDuration(self.counter_duration_ms));
        }
        for delay in [
            self.type_delay_ms,
            self.type_start_delay_ms,
            self.counter_stagger_ms,
            self.skill_bar_delay_ms,
            self.form_reset_ms,
            self.nav_initial_update_ms,
        ] {
            if !non_negative_ms(delay) {
                return Err(Error::InvalidDelay(delay));
            }
        }
        if !(self.glow_smoothing > 0.0 && self.glow_smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(self.glow_smoothing));
        }
        Ok(())
    }
}
