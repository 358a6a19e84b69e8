//! Error types for Wallplan operations.
//!
//! This module provides the main error type [`WallplanError`] which wraps
//! the error conditions that can occur while loading, laying out and
//! rendering a plan.

use std::io;

use thiserror::Error;

use wallplan_core::error::GeometryError;

/// The main error type for Wallplan operations.
#[derive(Debug, Error)]
pub enum WallplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid plan file: {}", err.message())]
    PlanSyntax { err: toml::de::Error, src: String },

    #[error("Invalid picture at index {index}: {source}")]
    Picture {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("Invalid style: {0}")]
    Style(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WallplanError {
    /// Create a new `PlanSyntax` error keeping the plan source for reporting.
    pub fn new_plan_syntax_error(err: toml::de::Error, src: &str) -> Self {
        Self::PlanSyntax {
            err,
            src: src.to_string(),
        }
    }

    /// Create a new `Picture` error for the picture at `index` (zero-based).
    pub fn new_picture_error(index: usize, source: GeometryError) -> Self {
        Self::Picture { index, source }
    }
}
