//! Annotation rendering.
//!
//! [`Renderer`] turns a laid-out wall into drawing primitives on a
//! [`Surface`]. The sequence is fixed: the wall outline first, then for each
//! picture, in order, the five annotations of [`Annotation::PER_PICTURE`]:
//!
//! 1. frame
//! 2. diagonals (centering guides)
//! 3. circles around both wire attachment points
//! 4. vertical dimension from the wall's top edge to the attachment line
//! 5. horizontal dimension between the attachment points
//!
//! Each annotation is wrapped in a [`Surface::begin_group`] /
//! [`Surface::end_group`] pair, so a wall with `N` pictures produces exactly
//! `1 + 5 * N` groups.

use log::{debug, trace};

use wallplan_core::{
    color::Color,
    draw::{Annotation, StrokeDefinition, Surface, TextDefinition},
    error::GeometryError,
    geometry::{Point, Size},
    model::{Picture, PlacedPicture, Wall},
};

/// Offset of the `"<{mid.x}"` label from the top of the vertical dimension line.
const VERTICAL_LABEL_OFFSET: Point = Point::new(5.0, 5.0);

/// Visual settings for every annotation the renderer draws.
///
/// The defaults reproduce the classic hanging diagram: black wall outline
/// (width 5), black frames and diagonals (width 2), thin black suspension
/// markers of radius 10, and blue dimension lines (width 2) with blue labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyle {
    wall: StrokeDefinition,
    frame: StrokeDefinition,
    diagonal: StrokeDefinition,
    marker: StrokeDefinition,
    dimension: StrokeDefinition,
    label: TextDefinition,
    marker_radius: f32,
}

impl AnnotationStyle {
    pub fn wall(&self) -> &StrokeDefinition {
        &self.wall
    }

    pub fn frame(&self) -> &StrokeDefinition {
        &self.frame
    }

    pub fn diagonal(&self) -> &StrokeDefinition {
        &self.diagonal
    }

    pub fn marker(&self) -> &StrokeDefinition {
        &self.marker
    }

    pub fn dimension(&self) -> &StrokeDefinition {
        &self.dimension
    }

    pub fn label(&self) -> &TextDefinition {
        &self.label
    }

    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    /// Sets the ink of the wall outline, frames, diagonals and markers.
    pub fn set_outline_color(&mut self, color: Color) {
        self.wall.set_color(color);
        self.frame.set_color(color);
        self.diagonal.set_color(color);
        self.marker.set_color(color);
    }

    /// Sets the ink of the dimension lines and their labels.
    pub fn set_dimension_color(&mut self, color: Color) {
        self.dimension.set_color(color);
        self.label.set_color(color);
    }

    pub fn dimension_mut(&mut self) -> &mut StrokeDefinition {
        &mut self.dimension
    }

    pub fn label_mut(&mut self) -> &mut TextDefinition {
        &mut self.label
    }

    pub fn set_marker_radius(&mut self, radius: f32) {
        self.marker_radius = radius;
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            wall: StrokeDefinition::solid(Color::black(), 5.0),
            frame: StrokeDefinition::solid(Color::black(), 2.0),
            diagonal: StrokeDefinition::solid(Color::black(), 2.0),
            marker: StrokeDefinition::solid(Color::black(), 1.0),
            dimension: StrokeDefinition::solid(Color::blue(), 2.0),
            label: TextDefinition::new(Color::blue()),
            marker_radius: 10.0,
        }
    }
}

/// Rounds to two decimal places, the precision of the attachment-line label.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Draws annotated hanging diagrams onto a [`Surface`].
///
/// The renderer holds only its style; it can be reused for any number of
/// diagrams as long as each call gets a fresh surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: AnnotationStyle,
}

impl Renderer {
    pub fn new(style: AnnotationStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }

    /// Renders the wall and every picture onto `surface`.
    ///
    /// Rendering is all-or-nothing: every picture is checked before the first
    /// primitive is issued, so a failed call leaves the surface untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotPositioned`] if any picture has not been
    /// laid out.
    pub fn render<S>(
        &self,
        wall: &Wall,
        pictures: &[Picture],
        surface: &mut S,
    ) -> Result<(), GeometryError>
    where
        S: Surface + ?Sized,
    {
        let placed = pictures
            .iter()
            .map(Picture::placed)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(pictures = placed.len(); "Rendering annotations");

        self.group(surface, Annotation::WallOutline, |surface| {
            surface.rectangle(wall.bounds(), &self.style.wall);
        });

        for picture in &placed {
            trace!(mid:? = picture.mid(), label:? = picture.picture().label(); "Annotating picture");
            self.draw_frame(picture, surface);
            self.draw_diagonals(picture, surface);
            self.draw_suspension_markers(picture.suspension_positions(), surface);
            self.draw_vertical_dimension(picture, surface);
            self.draw_horizontal_dimension(picture, surface);
        }

        Ok(())
    }

    fn group<S>(&self, surface: &mut S, annotation: Annotation, draw: impl FnOnce(&mut S))
    where
        S: Surface + ?Sized,
    {
        surface.begin_group(annotation);
        draw(surface);
        surface.end_group();
    }

    fn draw_frame<S: Surface + ?Sized>(&self, picture: &PlacedPicture<'_>, surface: &mut S) {
        self.group(surface, Annotation::Frame, |surface| {
            surface.rectangle(picture.frame(), &self.style.frame);
        });
    }

    fn draw_diagonals<S: Surface + ?Sized>(&self, picture: &PlacedPicture<'_>, surface: &mut S) {
        self.group(surface, Annotation::Diagonals, |surface| {
            surface.line(picture.top_left(), picture.bottom_right(), &self.style.diagonal);
            surface.line(picture.top_right(), picture.bottom_left(), &self.style.diagonal);
        });
    }

    /// Each circle is centered on its own attachment point, y included.
    fn draw_suspension_markers<S: Surface + ?Sized>(
        &self,
        attachments: [Point; 2],
        surface: &mut S,
    ) {
        let diameter = self.style.marker_radius * 2.0;
        let marker_size = Size::new(diameter, diameter);

        self.group(surface, Annotation::SuspensionMarkers, |surface| {
            for attachment in attachments {
                surface.ellipse(attachment.to_bounds(marker_size), &self.style.marker);
            }
        });
    }

    fn draw_vertical_dimension<S: Surface + ?Sized>(
        &self,
        picture: &PlacedPicture<'_>,
        surface: &mut S,
    ) {
        let x = picture.mid().x();
        let top = Point::new(x, 0.0);
        let bottom = Point::new(x, picture.attachment_y());

        self.group(surface, Annotation::VerticalDimension, |surface| {
            surface.line(top, bottom, &self.style.dimension);
            surface.text(
                top.add_point(VERTICAL_LABEL_OFFSET),
                &format!("<{x}"),
                &self.style.label,
            );
        });
    }

    fn draw_horizontal_dimension<S: Surface + ?Sized>(
        &self,
        picture: &PlacedPicture<'_>,
        surface: &mut S,
    ) {
        let [left, right] = picture.suspension_positions();
        let distance = picture.suspension().distance();
        let half = distance / 2.0;
        let label = &self.style.label;

        self.group(surface, Annotation::HorizontalDimension, |surface| {
            surface.line(left, right, &self.style.dimension);

            // Height of the attachment line, above the middle of the wire.
            surface.text(
                Point::new(left.x() + half + 5.0, left.y() - 15.0),
                &format!("^{}", round2(left.y())),
                label,
            );
            // Full spread, below the middle of the wire.
            surface.text(
                Point::new(left.x() + half - 15.0, left.y() + 5.0),
                &format!("<{distance}>"),
                label,
            );
            // Half spread, measured inward from each attachment point.
            surface.text(
                Point::new(left.x() + 10.0, left.y() + 10.0),
                &format!("{half}>"),
                label,
            );
            surface.text(
                Point::new(right.x() - 60.0, right.y() + 10.0),
                &format!("<{half}"),
                label,
            );
        });
    }
}

/// Renders with the default [`AnnotationStyle`].
///
/// # Errors
///
/// Returns [`GeometryError::NotPositioned`] if any picture has not been laid out.
pub fn render<S>(wall: &Wall, pictures: &[Picture], surface: &mut S) -> Result<(), GeometryError>
where
    S: Surface + ?Sized,
{
    Renderer::default().render(wall, pictures, surface)
}
