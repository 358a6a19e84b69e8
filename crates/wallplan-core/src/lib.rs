//! Wallplan Core Types and Definitions
//!
//! This crate provides the foundational types for planning where pictures
//! hang on a wall. It includes:
//!
//! - **Geometry**: Points, sizes and boxes in wall coordinates ([`geometry`] module)
//! - **Model**: Walls, pictures and their suspension geometry ([`model`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Strokes, text styles and the [`draw::Surface`] primitives are issued to
//! - **Errors**: [`error::GeometryError`]

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod model;
