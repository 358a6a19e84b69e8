//! A [`Surface`] that records every call instead of drawing.

use crate::{
    draw::{Annotation, StrokeDefinition, Surface, TextDefinition},
    geometry::{Bounds, Point},
};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginGroup(Annotation),
    EndGroup,
    Rectangle {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Ellipse {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Text {
        position: Point,
        content: String,
        style: TextDefinition,
    },
}

impl DrawCommand {
    /// Returns true for commands that put ink on the surface.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::BeginGroup(_) | Self::EndGroup)
    }
}

/// Records the calls made to it, in order.
///
/// # Examples
///
/// ```
/// # use wallplan_core::draw::{Annotation, RecordingSurface, StrokeDefinition, Surface};
/// # use wallplan_core::geometry::Point;
/// let mut surface = RecordingSurface::new();
/// surface.begin_group(Annotation::Diagonals);
/// surface.line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &StrokeDefinition::default());
/// surface.end_group();
///
/// assert_eq!(surface.groups(), vec![Annotation::Diagonals]);
/// assert_eq!(surface.primitives().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The annotation of every opened group, in call order.
    pub fn groups(&self) -> Vec<Annotation> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::BeginGroup(annotation) => Some(*annotation),
                _ => None,
            })
            .collect()
    }

    /// Commands that put ink on the surface, skipping group markers.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.is_primitive())
    }

    /// The primitives recorded inside each group, one entry per group.
    pub fn grouped(&self) -> Vec<(Annotation, Vec<&DrawCommand>)> {
        let mut groups: Vec<(Annotation, Vec<&DrawCommand>)> = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::BeginGroup(annotation) => groups.push((*annotation, Vec::new())),
                DrawCommand::EndGroup => {}
                primitive => {
                    if let Some((_, members)) = groups.last_mut() {
                        members.push(primitive);
                    }
                }
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn rectangle(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        self.commands.push(DrawCommand::Rectangle {
            bounds,
            stroke: stroke.clone(),
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn ellipse(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        self.commands.push(DrawCommand::Ellipse {
            bounds,
            stroke: stroke.clone(),
        });
    }

    fn text(&mut self, position: Point, content: &str, style: &TextDefinition) {
        self.commands.push(DrawCommand::Text {
            position,
            content: content.to_string(),
            style: style.clone(),
        });
    }

    fn begin_group(&mut self, annotation: Annotation) {
        self.commands.push(DrawCommand::BeginGroup(annotation));
    }

    fn end_group(&mut self) {
        self.commands.push(DrawCommand::EndGroup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, geometry::Size};

    #[test]
    fn test_records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        let bounds = Bounds::new_from_top_left(Point::default(), Size::new(10.0, 10.0));
        surface.begin_group(Annotation::Frame);
        surface.rectangle(bounds, &StrokeDefinition::default());
        surface.end_group();
        surface.begin_group(Annotation::SuspensionMarkers);
        surface.ellipse(bounds, &StrokeDefinition::default());
        let mut label = TextDefinition::new(Color::blue());
        label.set_font_family("serif");
        label.set_font_size(20);
        surface.text(Point::new(1.0, 2.0), "label", &label);
        surface.end_group();

        assert_eq!(surface.commands().len(), 7);
        assert_eq!(
            surface.groups(),
            vec![Annotation::Frame, Annotation::SuspensionMarkers]
        );
        assert_eq!(surface.primitives().count(), 3);

        let grouped = surface.grouped();
        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[1].1.len(), 2);
        assert_eq!(
            grouped[1].1[1],
            &DrawCommand::Text {
                position: Point::new(1.0, 2.0),
                content: "label".to_string(),
                style: label,
            }
        );
    }

    #[test]
    fn test_primitives_outside_groups_are_not_grouped() {
        let mut surface = RecordingSurface::new();
        surface.line(Point::default(), Point::new(1.0, 1.0), &StrokeDefinition::default());

        assert!(surface.grouped().is_empty());
        assert_eq!(surface.primitives().count(), 1);
    }
}
