//! Page indicator style tokens
//!
//! Every field has a documented default so a style file only needs the keys
//! it wants to override:
//!
//! ```toml
//! fill_color = "#FF33B5E5"
//! radius = 6.0
//! snap = true
//! ```

use std::fs;
use std::path::Path;

use pip_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Default fill color (white)
pub const DEFAULT_FILL_COLOR: Color = Color::WHITE;
/// Default stroke color (white)
pub const DEFAULT_STROKE_COLOR: Color = Color::WHITE;
/// Default circle radius in pixels
pub const DEFAULT_RADIUS: f32 = 4.0;
/// Circles are centered in the available width by default
pub const DEFAULT_CENTERED: bool = true;
/// The fill marker follows the drag offset by default
pub const DEFAULT_SNAP: bool = false;
/// Default outline width of the stroked circles
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Construction-time style of a circle page indicator
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorStyle {
    /// Color of the filled (current page) circle
    #[serde(with = "hex_color")]
    pub fill_color: Color,
    /// Color of the stroked circles
    #[serde(with = "hex_color")]
    pub stroke_color: Color,
    /// Circle radius in pixels
    pub radius: f32,
    /// Outline width of the stroked circles
    pub stroke_width: f32,
    /// Center the row of circles horizontally
    pub centered: bool,
    /// Jump the fill circle to the settled page instead of following drags
    pub snap: bool,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR,
            stroke_color: DEFAULT_STROKE_COLOR,
            radius: DEFAULT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            centered: DEFAULT_CENTERED,
            snap: DEFAULT_SNAP,
        }
    }
}

impl IndicatorStyle {
    /// Create the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let style: IndicatorStyle = toml::from_str(content)?;
        style.validate()?;
        tracing::debug!(?style, "Parsed indicator style");
        Ok(style)
    }

    /// Load a style from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the widget cannot draw with
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ThemeError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Set the fill color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the stroke color
    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the circle radius
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set whether the row is centered
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Set snap mode
    pub fn snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }
}

/// Colors are stored as `#AARRGGBB` strings; `#RRGGBB` is accepted on input
mod hex_color {
    use pip_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{:08X}", color.to_argb_hex()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid color `{raw}`, expected #RRGGBB or #AARRGGBB"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = IndicatorStyle::default();
        assert_eq!(style.fill_color, Color::WHITE);
        assert_eq!(style.stroke_color, Color::WHITE);
        assert_eq!(style.radius, 4.0);
        assert!(style.centered);
        assert!(!style.snap);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let style = IndicatorStyle::from_toml_str("").unwrap();
        assert_eq!(style, IndicatorStyle::default());
    }

    #[test]
    fn test_partial_override() {
        let style = IndicatorStyle::from_toml_str(
            r##"
            fill_color = "#FF33B5E5"
            radius = 6.0
            snap = true
            "##,
        )
        .unwrap();

        assert_eq!(style.fill_color, Color::from_argb_hex(0xFF33B5E5));
        assert_eq!(style.stroke_color, Color::WHITE);
        assert_eq!(style.radius, 6.0);
        assert!(style.centered);
        assert!(style.snap);
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = IndicatorStyle::from_toml_str(r##"stroke_color = "#12""##).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let err = IndicatorStyle::from_toml_str("radius = 0.0").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidRadius(_)));

        let err = IndicatorStyle::from_toml_str("radius = -2.0").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidRadius(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let style = IndicatorStyle::default()
            .fill_color(Color::from_argb_hex(0x8033B5E5))
            .radius(3.0)
            .centered(false);

        let text = style.to_toml_string().unwrap();
        assert!(text.contains("#8033B5E5"));

        let parsed = IndicatorStyle::from_toml_str(&text).unwrap();
        assert_eq!(parsed.fill_color.to_argb_hex(), 0x8033B5E5);
        assert_eq!(parsed.radius, 3.0);
        assert!(!parsed.centered);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = IndicatorStyle::load_from_file(Path::new("/nonexistent/pip-style.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("pip-style.toml"));
    }
}
