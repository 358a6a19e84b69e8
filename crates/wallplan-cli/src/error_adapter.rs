//! Error adapter for converting WallplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Plan-file syntax errors carry the plan source and the offending span, so
//! they are rendered with a labeled snippet. Every other error is rendered as
//! a plain message with a code and, where it helps, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use wallplan::WallplanError;
use wallplan_core::error::GeometryError;

/// Adapter for a plan-file syntax error with its source.
pub struct PlanSyntaxAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> PlanSyntaxAdapter<'a> {
    /// Create a new plan syntax adapter.
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for PlanSyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanSyntaxAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for PlanSyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid plan file: {}", self.err.message())
    }
}

impl std::error::Error for PlanSyntaxAdapter<'_> {}

impl MietteDiagnostic for PlanSyntaxAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("wallplan::plan::syntax"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a plan needs a [wall] table with width and height, and [[pictures]] entries with width, height and suspension = { distance, padding }",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.err.message().to_string()), span),
        )))
    }
}

/// Adapter for [`WallplanError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a WallplanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WallplanError::Io(_) => "wallplan::io",
            WallplanError::Geometry(_) => "wallplan::geometry",
            WallplanError::PlanSyntax { .. } => "wallplan::plan::syntax",
            WallplanError::Picture { .. } => "wallplan::plan::picture",
            WallplanError::Style(_) => "wallplan::style",
            WallplanError::Config(_) => "wallplan::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            WallplanError::Geometry(GeometryError::NotPositioned) => {
                "lay out the plan before rendering it"
            }
            WallplanError::Geometry(GeometryError::InvalidWall { .. }) => {
                "wall width and height must be positive numbers"
            }
            WallplanError::Picture { .. } => {
                "the suspension distance must be smaller than the picture width and the padding smaller than half its height"
            }
            WallplanError::Style(_) => "check the [style] and [canvas] sections of the configuration",
            WallplanError::Config(_) => {
                "check the [style] and [canvas] sections of the configuration file, or pass another file with --config"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a plan syntax error with its source or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A syntax error with source location information.
    PlanSyntax(PlanSyntaxAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::PlanSyntax(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::PlanSyntax(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::PlanSyntax(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::PlanSyntax(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::PlanSyntax(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::PlanSyntax(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`WallplanError`] into a reportable error.
pub fn to_reportable(err: &WallplanError) -> Reportable<'_> {
    match err {
        WallplanError::PlanSyntax { err, src } => {
            Reportable::PlanSyntax(PlanSyntaxAdapter::new(err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use wallplan::plan::parse_plan;

    use super::*;

    fn code_of(reportable: &Reportable<'_>) -> Option<String> {
        reportable.code().map(|code| code.to_string())
    }

    #[test]
    fn test_plan_syntax_error_has_label() {
        let err = parse_plan("[wall]\nwidth = \"wide\"\nheight = 10\n").unwrap_err();

        let reportable = to_reportable(&err);

        assert!(matches!(reportable, Reportable::PlanSyntax(_)));
        assert_eq!(code_of(&reportable).as_deref(), Some("wallplan::plan::syntax"));
        assert!(reportable.source_code().is_some());
        assert!(reportable.help().is_some());
        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_picture_error() {
        let source = "[wall]\nwidth = 100\nheight = 100\n\n[[pictures]]\nwidth = 50\nheight = 50\nsuspension = { distance = 60, padding = 5 }\n";
        let err = parse_plan(source).unwrap_err();

        let reportable = to_reportable(&err);

        match &reportable {
            Reportable::Error(e) => {
                assert!(e.to_string().starts_with("Invalid picture at index 0"));
            }
            Reportable::PlanSyntax(_) => panic!("Expected Error"),
        }
        assert_eq!(code_of(&reportable).as_deref(), Some("wallplan::plan::picture"));
        assert!(reportable.help().is_some());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = WallplanError::Io(std::io::Error::other("disk full"));

        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "I/O error: disk full");
        assert_eq!(code_of(&reportable).as_deref(), Some("wallplan::io"));
        assert!(reportable.help().is_none());
    }

    #[test]
    fn test_config_error_has_code_and_help() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[style]\nmarker_radius = -1.0\n").unwrap();
        let err = crate::config::load_config(Some(&path)).unwrap_err();

        let reportable = to_reportable(&err);

        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(code_of(&reportable).as_deref(), Some("wallplan::config"));
        let help = reportable.help().map(|help| help.to_string()).unwrap();
        assert!(help.contains("--config"));
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_not_positioned_help() {
        let err = WallplanError::Geometry(GeometryError::NotPositioned);

        let reportable = to_reportable(&err);

        let help = reportable.help().map(|help| help.to_string());
        assert_eq!(help.as_deref(), Some("lay out the plan before rendering it"));
    }
}
