use combat_core::ConfigError;

/// Health thresholds that split decisions into defensive, balanced and
/// aggressive bands.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorConfig {
    /// Below this hp ratio the tiered strategy prefers healing.
    pub low_hp_threshold: f32,
    /// Above this hp ratio the tiered strategy prefers its strongest attack.
    pub high_hp_threshold: f32,
}

impl SelectorConfig {
    pub const DEFAULT_LOW_HP_THRESHOLD: f32 = 0.30;
    pub const DEFAULT_HIGH_HP_THRESHOLD: f32 = 0.70;
    /// The defensive strategy heals whenever it is below half health.
    pub const DEFENSIVE_HEAL_THRESHOLD: f32 = 0.50;

    pub fn new() -> Self {
        Self {
            low_hp_threshold: Self::DEFAULT_LOW_HP_THRESHOLD,
            high_hp_threshold: Self::DEFAULT_HIGH_HP_THRESHOLD,
        }
    }

    pub fn with_thresholds(low_hp_threshold: f32, high_hp_threshold: f32) -> Self {
        Self {
            low_hp_threshold,
            high_hp_threshold,
        }
    }

    /// Both thresholds must lie in `[0, 1]` and `low <= high`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("low_hp_threshold", self.low_hp_threshold)?;
        check_unit("high_hp_threshold", self.high_hp_threshold)?;

        if self.low_hp_threshold > self.high_hp_threshold {
            return Err(ConfigError::ThresholdsInverted {
                low: self.low_hp_threshold,
                high: self.high_hp_threshold,
            });
        }
        Ok(())
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}
