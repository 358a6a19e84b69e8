//! SVG drawing surface and padded canvas.
//!
//! [`SvgSurface`] collects primitives as SVG elements, one `<g>` per
//! annotation group. [`SvgCanvas`] owns a surface sized to the wall and
//! composites it onto a background enlarged by a fixed padding on every side.

use log::{debug, warn};
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use wallplan_core::{
    apply_stroke,
    color::Color,
    draw::{Annotation, StrokeDefinition, Surface, TextDefinition},
    geometry::{Bounds, Insets, Point, Size},
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// A [`Surface`] that builds SVG elements in wall coordinates.
#[derive(Debug)]
pub struct SvgSurface {
    /// Open groups, innermost last. The first entry is the ungrouped root.
    open: Vec<(Option<Annotation>, Vec<SvgNode>)>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            open: vec![(None, Vec::new())],
        }
    }

    fn push(&mut self, node: SvgNode) {
        if let Some((_, nodes)) = self.open.last_mut() {
            nodes.push(node);
        }
    }

    fn close_group(&mut self) {
        if self.open.len() < 2 {
            warn!("Ignoring end of group without a matching begin");
            return;
        }
        if let Some((annotation, nodes)) = self.open.pop() {
            let mut group = svg_element::Group::new();
            if let Some(annotation) = annotation {
                group = group.set("data-annotation", annotation.name());
            }
            let group = nodes.into_iter().fold(group, |group, node| group.add(node));
            self.push(Box::new(group));
        }
    }

    /// Closes any groups left open and returns the top-level nodes in draw order.
    pub fn into_nodes(mut self) -> Vec<SvgNode> {
        while self.open.len() > 1 {
            self.close_group();
        }
        self.open.pop().map(|(_, nodes)| nodes).unwrap_or_default()
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SvgSurface {
    fn rectangle(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", "none");
        self.push(Box::new(apply_stroke!(rect, stroke)));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        self.push(Box::new(apply_stroke!(line, stroke)));
    }

    fn ellipse(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        let center = bounds.center();
        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", bounds.width() / 2.0)
            .set("ry", bounds.height() / 2.0)
            .set("fill", "none");
        self.push(Box::new(apply_stroke!(ellipse, stroke)));
    }

    fn text(&mut self, position: Point, content: &str, style: &TextDefinition) {
        let text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("dominant-baseline", "hanging")
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", style.color())
            .add(SvgText::new(content));
        self.push(Box::new(text));
    }

    fn begin_group(&mut self, annotation: Annotation) {
        self.open.push((Some(annotation), Vec::new()));
    }

    fn end_group(&mut self) {
        self.close_group();
    }
}

/// A drawing area the size of the wall, padded and backed when finished.
#[derive(Debug)]
pub struct SvgCanvas {
    size: Size,
    padding: Insets,
    background: Color,
    surface: SvgSurface,
}

impl SvgCanvas {
    /// Creates a canvas for a drawing of `size` with a white background and no padding.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::default(),
            background: Color::white(),
            surface: SvgSurface::new(),
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Size of the finished document, padding included.
    pub fn document_size(&self) -> Size {
        self.size.add_padding(self.padding)
    }

    /// Runs `draw` on the canvas surface and composites the result.
    ///
    /// The canvas is consumed either way: on error the partial drawing is
    /// dropped and the error returned.
    pub fn paint<E>(
        mut self,
        draw: impl FnOnce(&mut SvgSurface) -> Result<(), E>,
    ) -> Result<Document, E> {
        draw(&mut self.surface)?;
        Ok(self.finish())
    }

    /// Composites the drawing onto the padded background.
    pub fn finish(self) -> Document {
        let document_size = self.document_size();
        debug!(
            width = document_size.width(),
            height = document_size.height();
            "Compositing SVG canvas"
        );

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", document_size.width())
            .set("height", document_size.height())
            .set("fill", self.background);

        let drawing = self
            .surface
            .into_nodes()
            .into_iter()
            .fold(
                svg_element::Group::new().set(
                    "transform",
                    format!("translate({}, {})", self.padding.left(), self.padding.top()),
                ),
                |group, node| group.add(node),
            );

        Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", document_size.width(), document_size.height()),
            )
            .set("width", document_size.width())
            .set("height", document_size.height())
            .add(background)
            .add(drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> StrokeDefinition {
        StrokeDefinition::solid(Color::black(), 2.0)
    }

    #[test]
    fn test_primitives_become_svg_elements() {
        let mut surface = SvgSurface::new();
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));

        surface.rectangle(bounds, &stroke());
        surface.line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), &stroke());
        surface.ellipse(bounds, &stroke());
        surface.text(Point::new(1.0, 2.0), "250", &TextDefinition::new(Color::blue()));

        let rendered: Vec<String> = surface
            .into_nodes()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert_eq!(rendered.len(), 4);
        assert!(rendered[0].starts_with("<rect"));
        assert!(rendered[0].contains("width=\"30\""));
        assert!(rendered[0].contains("fill=\"none\""));
        assert!(rendered[1].starts_with("<line"));
        assert!(rendered[1].contains("x2=\"5\""));
        assert!(rendered[2].starts_with("<ellipse"));
        assert!(rendered[2].contains("cx=\"25\""));
        assert!(rendered[2].contains("rx=\"15\""));
        assert!(rendered[3].starts_with("<text"));
        assert!(rendered[3].contains("250"));
        assert!(rendered[3].contains("font-size=\"12\""));
    }

    #[test]
    fn test_groups_wrap_their_primitives() {
        let mut surface = SvgSurface::new();

        surface.begin_group(Annotation::Diagonals);
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &stroke());
        surface.line(Point::new(1.0, 0.0), Point::new(0.0, 1.0), &stroke());
        surface.end_group();

        let nodes = surface.into_nodes();
        assert_eq!(nodes.len(), 1);
        let group = nodes[0].to_string();
        assert!(group.contains("data-annotation=\"diagonals\""));
        assert_eq!(group.matches("<line").count(), 2);
    }

    #[test]
    fn test_unclosed_groups_are_closed_on_finish() {
        let mut surface = SvgSurface::new();
        surface.begin_group(Annotation::Frame);
        surface.begin_group(Annotation::Diagonals);
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &stroke());

        let nodes = surface.into_nodes();
        assert_eq!(nodes.len(), 1);
        let rendered = nodes[0].to_string();
        assert!(rendered.contains("data-annotation=\"frame\""));
        assert!(rendered.contains("data-annotation=\"diagonals\""));
    }

    #[test]
    fn test_stray_end_group_is_ignored() {
        let mut surface = SvgSurface::new();
        surface.end_group();
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &stroke());

        assert_eq!(surface.into_nodes().len(), 1);
    }

    #[test]
    fn test_canvas_adds_padding_around_drawing() {
        let canvas = SvgCanvas::new(Size::new(4000.0, 2000.0)).with_padding(Insets::uniform(100.0));
        assert_eq!(canvas.document_size(), Size::new(4200.0, 2200.0));

        let document = canvas.finish().to_string();
        assert!(document.contains("viewBox=\"0 0 4200 2200\""));
        assert!(document.contains("translate(100, 100)"));
        assert_eq!(document.matches("<rect").count(), 1);
    }

    #[test]
    fn test_paint_returns_error_from_drawing() {
        let canvas = SvgCanvas::new(Size::new(10.0, 10.0));

        let result: Result<Document, &str> = canvas.paint(|_| Err("boom"));

        assert_eq!(result.err(), Some("boom"));
    }

    #[test]
    fn test_paint_composites_drawing() {
        let canvas = SvgCanvas::new(Size::new(10.0, 10.0))
            .with_background(Color::new("#eeeeee").unwrap());

        let document = canvas
            .paint(|surface| {
                surface.line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &stroke());
                Ok::<(), ()>(())
            })
            .unwrap()
            .to_string();

        assert!(document.contains("<line"));
        assert!(document.contains("<svg"));
    }
}
