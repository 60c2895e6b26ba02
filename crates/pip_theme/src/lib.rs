//! Pip Theme
//!
//! Style tokens for Pip widgets. Styles carry documented defaults and can be
//! loaded from TOML so applications restyle widgets without code changes.
//!
//! # Example
//!
//! ```rust
//! use pip_theme::IndicatorStyle;
//!
//! let style = IndicatorStyle::from_toml_str("radius = 6.0\nsnap = true").unwrap();
//! assert_eq!(style.radius, 6.0);
//! assert!(style.centered);
//! ```

pub mod error;
pub mod indicator;

pub use error::{Result, ThemeError};
pub use indicator::{
    IndicatorStyle, DEFAULT_CENTERED, DEFAULT_FILL_COLOR, DEFAULT_RADIUS, DEFAULT_SNAP,
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
};
