//! Board configuration
//!
//! Immutable layout and timing parameters shared by the board model and the
//! session. Loaded from JSON when provided, otherwise defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Board dimensions, layout spacing and motion timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns (odd, at least 5)
    pub width: u32,
    /// Number of rows (at least 3). Must be odd for a pass to wrap into the
    /// next column; on even heights a column completion ends in a fault.
    pub height: u32,

    // === Layout ===
    /// Pixels per grid step (a piece spans two steps)
    pub dpi: f32,
    /// Display scale applied to the drawing
    pub scale: f32,
    /// Ball radius in pixels
    pub ball_radius: f32,

    // === Timing ===
    /// Duration of a single ball motion
    pub duration_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dpi: DPI,
            scale: SCALE,
            ball_radius: BALL_RADIUS,
            duration_ms: MOTION_DURATION_MS,
        }
    }
}

impl BoardConfig {
    /// Config with the given dimensions and default layout/timing
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check dimensions and that spacing/timing are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 5 {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if self.width % 2 == 0 {
            return Err(ConfigError::EvenWidth(self.width));
        }
        if self.height < 3 {
            return Err(ConfigError::HeightTooSmall(self.height));
        }
        if !(self.dpi > 0.0) {
            return Err(ConfigError::NonPositive("dpi"));
        }
        if !(self.scale > 0.0) {
            return Err(ConfigError::NonPositive("scale"));
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::NonPositive("duration_ms"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Unscaled drawing extent: one step of margin around the grid
    pub fn view_box(&self) -> Vec2 {
        Vec2::new(
            self.dpi + self.dpi * self.width as f32,
            self.dpi + self.dpi * self.height as f32,
        )
    }

    /// On-screen size of the drawing
    pub fn display_size(&self) -> Vec2 {
        self.view_box() * self.scale
    }

    /// Top-left corner of the piece at (row, col)
    #[inline]
    pub fn piece_origin(&self, row: i32, col: i32) -> Vec2 {
        Vec2::new(self.dpi * col as f32, self.dpi * row as f32)
    }

    /// Delay before a bistable piece shows its flipped kind
    pub fn flip_delay_ms(&self) -> u32 {
        self.duration_ms / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dpi, 100.0);
        assert_eq!(config.duration_ms, 200);
        assert_eq!(config.flip_delay_ms(), 100);
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(
            BoardConfig::new(3, 5).validate(),
            Err(ConfigError::WidthTooSmall(3))
        );
        assert_eq!(
            BoardConfig::new(6, 5).validate(),
            Err(ConfigError::EvenWidth(6))
        );
        assert_eq!(
            BoardConfig::new(5, 2).validate(),
            Err(ConfigError::HeightTooSmall(2))
        );
        assert!(BoardConfig::new(5, 3).validate().is_ok());
        assert!(BoardConfig::new(9, 4).validate().is_ok());
    }

    #[test]
    fn test_validate_layout() {
        let config = BoardConfig {
            dpi: 0.0,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositive("dpi")));

        let config = BoardConfig {
            duration_ms: 0,
            ..BoardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive("duration_ms"))
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = BoardConfig::from_json(r#"{ "width": 9, "height": 7 }"#).unwrap();
        assert_eq!(config.width, 9);
        assert_eq!(config.height, 7);
        assert_eq!(config.scale, SCALE);

        assert!(matches!(
            BoardConfig::from_json(r#"{ "width": 8 }"#),
            Err(ConfigError::EvenWidth(8))
        ));
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BoardConfig::new(11, 6);
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_layout_helpers() {
        let config = BoardConfig::new(5, 4);
        assert_eq!(config.view_box(), Vec2::new(600.0, 500.0));
        assert_eq!(config.display_size(), Vec2::new(240.0, 200.0));
        assert_eq!(config.piece_origin(1, 3), Vec2::new(300.0, 100.0));
    }
}
