//! Configuration types for Wallplan rendering.
//!
//! This module provides configuration structures that control how plans are
//! styled and composited. All types implement [`serde::Deserialize`] so they
//! can be loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and canvas settings.
//! - [`StyleConfig`] - Overrides for the annotation inks, dimension line style and label font.
//! - [`CanvasConfig`] - Padding and background of the composited document.
//!
//! # Example
//!
//! ```
//! # use wallplan::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().annotation_style().is_ok());
//! assert_eq!(config.canvas().padding(), 100.0);
//! ```

use serde::Deserialize;

use wallplan_core::{
    color::Color,
    draw::{StrokeCap, StrokeStyle},
    geometry::Insets,
};

use crate::render::AnnotationStyle;

/// Padding, in wall units, added around the wall on every side of the document.
const DEFAULT_CANVAS_PADDING: f32 = 100.0;

/// Top-level application configuration combining style and canvas settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and canvas configurations.
    pub fn new(style: StyleConfig, canvas: CanvasConfig) -> Self {
        Self { style, canvas }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }
}

/// Visual overrides for the annotation renderer.
///
/// Fields that are not set keep the [`AnnotationStyle`] defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Ink of the wall outline, frames, diagonals and markers.
    #[serde(default)]
    outline_color: Option<String>,

    /// Ink of dimension lines and labels.
    #[serde(default)]
    dimension_color: Option<String>,

    /// Line style of the dimension lines: `solid`, `dashed`, `dotted` or a dash pattern.
    #[serde(default)]
    dimension_line_style: Option<String>,

    /// Cap of the dimension line ends: `butt`, `round` or `square`.
    #[serde(default)]
    dimension_line_cap: Option<String>,

    #[serde(default)]
    dimension_line_width: Option<f32>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<u16>,

    /// Radius of the circles around the wire attachment points.
    #[serde(default)]
    marker_radius: Option<f32>,
}

impl StyleConfig {
    /// Builds the [`AnnotationStyle`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a color, line style or line cap cannot be parsed,
    /// or if a width or radius is not a positive number.
    pub fn annotation_style(&self) -> Result<AnnotationStyle, String> {
        let mut style = AnnotationStyle::default();

        if let Some(color) = &self.outline_color {
            let color = Color::new(color)
                .map_err(|err| format!("Invalid outline color in config: {err}"))?;
            style.set_outline_color(color);
        }

        if let Some(color) = &self.dimension_color {
            let color = Color::new(color)
                .map_err(|err| format!("Invalid dimension color in config: {err}"))?;
            style.set_dimension_color(color);
        }

        if let Some(line_style) = &self.dimension_line_style {
            let line_style = line_style
                .parse::<StrokeStyle>()
                .map_err(|err| format!("Invalid dimension line style in config: {err}"))?;
            style.dimension_mut().set_style(line_style);
        }

        if let Some(cap) = &self.dimension_line_cap {
            let cap = cap
                .parse::<StrokeCap>()
                .map_err(|err| format!("Invalid dimension line cap in config: {err}"))?;
            style.dimension_mut().set_cap(cap);
        }

        if let Some(width) = self.dimension_line_width {
            if !(width.is_finite() && width > 0.0) {
                return Err(format!(
                    "Invalid dimension line width in config: {width} is not a positive number"
                ));
            }
            style.dimension_mut().set_width(width);
        }

        if let Some(family) = &self.font_family {
            style.label_mut().set_font_family(family);
        }

        if let Some(size) = self.font_size {
            if size == 0 {
                return Err("Invalid font size in config: must be greater than zero".to_string());
            }
            style.label_mut().set_font_size(size);
        }

        if let Some(radius) = self.marker_radius {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(format!(
                    "Invalid marker radius in config: {radius} is not a positive number"
                ));
            }
            style.set_marker_radius(radius);
        }

        Ok(style)
    }
}

/// Composition settings for the finished document.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    /// Padding added around the wall on every side.
    #[serde(default = "default_canvas_padding")]
    padding: f32,

    /// Background [`Color`] of the document, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

fn default_canvas_padding() -> f32 {
    DEFAULT_CANVAS_PADDING
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_CANVAS_PADDING,
            background_color: None,
        }
    }
}

impl CanvasConfig {
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the padding as uniform [`Insets`].
    ///
    /// # Errors
    ///
    /// Returns an error if the padding is negative or not finite.
    pub fn insets(&self) -> Result<Insets, String> {
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(format!(
                "Invalid canvas padding in config: {} is not a non-negative number",
                self.padding
            ));
        }
        Ok(Insets::uniform(self.padding))
    }

    /// Returns the parsed background [`Color`], white when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map(|color| color.unwrap_or_else(Color::white))
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
