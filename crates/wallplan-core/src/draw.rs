//! Drawing primitives and the surface they are issued to.
//!
//! The renderer never rasterizes anything itself. It issues primitives
//! (rectangles, lines, ellipses, text) to a [`Surface`], grouped by the
//! [`Annotation`] they belong to. Concrete surfaces decide what a primitive
//! becomes: SVG elements, pixels, or a [`RecordingSurface`] log for tests.
mod annotation;
mod recording;
mod stroke;
mod text;

pub use annotation::Annotation;
pub use recording::{DrawCommand, RecordingSurface};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::TextDefinition;

use crate::geometry::{Bounds, Point};

/// A drawing capability that receives primitives in wall coordinates.
///
/// Primitive methods are infallible: a surface buffers what it is given and
/// reports I/O problems when it is finalized, not per call.
pub trait Surface {
    /// Draws the outline of an axis-aligned rectangle.
    fn rectangle(&mut self, bounds: Bounds, stroke: &StrokeDefinition);

    /// Draws a straight segment between two points.
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition);

    /// Draws the outline of the ellipse inscribed in `bounds`.
    fn ellipse(&mut self, bounds: Bounds, stroke: &StrokeDefinition);

    /// Draws `content` with its top-left corner at `position`.
    fn text(&mut self, position: Point, content: &str, style: &TextDefinition);

    /// Marks the start of the primitives belonging to one annotation.
    fn begin_group(&mut self, _annotation: Annotation) {}

    /// Closes the group opened by the last [`Surface::begin_group`].
    fn end_group(&mut self) {}
}
