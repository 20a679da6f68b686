use crate::constants::{DEFAULT_SETTLE_DELAY, DEFAULT_VELOCITY_THRESHOLD, MAX_SETTLE_DELAY};
use std::fmt;
use std::time::Duration;

/// How the "current" card is derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexStrategy {
    /// Card whose frame overlaps the viewport the most; first wins ties.
    /// Tolerates irregular spacing because it reads the host's real frames.
    #[default]
    IntersectionMax,
    /// Rounds the viewport center onto the card stride. Matches
    /// `IntersectionMax` for evenly spaced cards with symmetric insets.
    ArithmeticCentering,
}

/// Where a snapped card ends up inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapAlignment {
    /// Offset is `index * stride`; the card sits one leading inset from the edge.
    Leading,
    /// Card is centered in the viewport.
    #[default]
    Centered,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidVelocityThreshold(f32),
    SettleDelayTooLong(Duration),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVelocityThreshold(value) => {
                write!(f, "velocity threshold must be finite and >= 0, got {value}")
            }
            ConfigError::SettleDelayTooLong(delay) => {
                write!(
                    f,
                    "settle delay {}ms exceeds the {}ms limit",
                    delay.as_millis(),
                    MAX_SETTLE_DELAY.as_millis()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tuning for a [`SnapController`](crate::SnapController).
///
/// Fixed for the lifetime of the controller; there is no setter on the
/// controller side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    pub velocity_threshold: f32,
    pub index_strategy: IndexStrategy,
    pub alignment: SnapAlignment,
    /// Whether programmatic snaps are animated by the host.
    pub animate: bool,
    /// Only read by the decide-after-settle policy.
    pub settle_delay: Duration,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            index_strategy: IndexStrategy::default(),
            alignment: SnapAlignment::default(),
            animate: true,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl SnapConfig {
    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_index_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.index_strategy = strategy;
        self
    }

    pub fn with_alignment(mut self, alignment: SnapAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            return Err(ConfigError::InvalidVelocityThreshold(
                self.velocity_threshold,
            ));
        }
        if self.settle_delay > MAX_SETTLE_DELAY {
            return Err(ConfigError::SettleDelayTooLong(self.settle_delay));
        }
        Ok(())
    }
}
