//! Game configuration with bounds validation

use std::time::Duration;

use thiserror::Error;

/// Errors raised by configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameConfigError {
    #[error("grid size {size} outside supported range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
}

/// User-facing settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of regular rows and columns (the grid is square).
    pub size: usize,
    /// Cadence of the timer tick while playing.
    pub tick_interval: Duration,
}

impl GameConfig {
    pub const MIN_SIZE: usize = 2;
    pub const MAX_SIZE: usize = 12;
    pub const DEFAULT_SIZE: usize = 10;
    pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

    /// Creates a configuration with the given grid size.
    ///
    /// # Returns
    /// The configuration, or GameConfigError if the size is outside
    /// the supported range.
    pub fn with_size(size: usize) -> Result<GameConfig, GameConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(GameConfigError::SizeOutOfRange {
                size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(GameConfig {
            size,
            tick_interval: Self::TICK_INTERVAL,
        })
    }

    /// Clamps an arbitrary size into the supported range.
    pub fn sanitize_size(size: usize) -> usize {
        size.clamp(Self::MIN_SIZE, Self::MAX_SIZE)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: Self::DEFAULT_SIZE,
            tick_interval: Self::TICK_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let config = GameConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn with_size_validates_bounds() {
        assert!(GameConfig::with_size(2).is_ok());
        assert!(GameConfig::with_size(12).is_ok());

        assert_eq!(
            GameConfig::with_size(1),
            Err(GameConfigError::SizeOutOfRange {
                size: 1,
                min: 2,
                max: 12
            })
        );
        assert!(GameConfig::with_size(13).is_err());
    }

    #[test]
    fn sanitize_clamps_into_range() {
        assert_eq!(GameConfig::sanitize_size(0), 2);
        assert_eq!(GameConfig::sanitize_size(7), 7);
        assert_eq!(GameConfig::sanitize_size(100), 12);
    }
}
