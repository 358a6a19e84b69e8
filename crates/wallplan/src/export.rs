//! Output surfaces for rendered plans.
//!
//! The renderer only knows the [`Surface`](wallplan_core::draw::Surface)
//! trait. This module provides the concrete surfaces that turn primitives
//! into files.

pub mod svg;
