//! Wall, picture and suspension geometry.
//!
//! A [`Picture`] goes through two phases: it is created with its size and
//! [`Suspension`] but no position, and the layout engine later places its
//! center (`mid`) on the [`Wall`]. Derived points (corners, wire attachment
//! points) only exist for placed pictures, so they live on the
//! [`PlacedPicture`] view returned by [`Picture::placed`].
//!
//! ```
//! # use wallplan_core::model::{Picture, Suspension};
//! # use wallplan_core::geometry::Point;
//! # use wallplan_core::error::GeometryError;
//! let mut picture = Picture::new(600.0, 500.0, Suspension::new(500.0, 80.0)?)?;
//! assert_eq!(picture.top_left(), Err(GeometryError::NotPositioned));
//!
//! picture.place(Point::new(1000.0, 700.0));
//! let placed = picture.placed()?;
//! assert_eq!(placed.top_left(), Point::new(700.0, 450.0));
//! # Ok::<(), GeometryError>(())
//! ```

use crate::{
    error::GeometryError,
    geometry::{Bounds, Point, Position, Size},
};

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// The rectangular surface pictures hang on, with its origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    width: f32,
    height: f32,
}

impl Wall {
    /// Creates a wall.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidWall`] unless both dimensions are
    /// positive and finite.
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        if !is_positive(width) || !is_positive(height) {
            return Err(GeometryError::InvalidWall { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The wall as a box from `(0, 0)` to `(width, height)`.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.size())
    }
}

/// Wire attachment geometry on the back of a picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suspension {
    /// Horizontal spread between the two attachment points.
    distance: f32,
    /// Vertical offset from the picture's top edge down to the attachment line.
    padding: f32,
}

impl Suspension {
    /// Creates a suspension.
    ///
    /// How it fits a particular picture is checked by [`Picture::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSuspension`] if `distance` is not
    /// positive or `padding` is negative or not finite.
    pub fn new(distance: f32, padding: f32) -> Result<Self, GeometryError> {
        if !is_positive(distance) {
            return Err(GeometryError::InvalidSuspension(format!(
                "distance must be positive, got {distance}"
            )));
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(GeometryError::InvalidSuspension(format!(
                "padding must not be negative, got {padding}"
            )));
        }
        Ok(Self { distance, padding })
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// Whether a picture has been given a center on the wall yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Placement {
    #[default]
    Unpositioned,
    Positioned(Position),
}

/// A rectangular picture to be hung.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    width: f32,
    height: f32,
    suspension: Suspension,
    label: Option<String>,
    placement: Placement,
}

impl Picture {
    /// Creates an unpositioned picture.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidPicture`] unless both dimensions are positive
    ///   and finite.
    /// - [`GeometryError::InvalidSuspension`] if the attachment points do not
    ///   lie strictly inside the frame (`distance >= width`) or the attachment
    ///   line is not in the upper half (`padding >= height / 2`).
    pub fn new(width: f32, height: f32, suspension: Suspension) -> Result<Self, GeometryError> {
        if !is_positive(width) || !is_positive(height) {
            return Err(GeometryError::InvalidPicture { width, height });
        }
        if suspension.distance >= width {
            return Err(GeometryError::InvalidSuspension(format!(
                "distance {} must be less than the picture width {width}",
                suspension.distance
            )));
        }
        if suspension.padding >= height / 2.0 {
            return Err(GeometryError::InvalidSuspension(format!(
                "padding {} must be less than half the picture height {height}",
                suspension.padding
            )));
        }

        Ok(Self {
            width,
            height,
            suspension,
            label: None,
            placement: Placement::Unpositioned,
        })
    }

    /// Attaches a free-text label, e.g. the picture's title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn suspension(&self) -> Suspension {
        self.suspension
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The picture's center, if it has been placed.
    pub fn mid(&self) -> Option<Position> {
        match self.placement {
            Placement::Unpositioned => None,
            Placement::Positioned(mid) => Some(mid),
        }
    }

    /// Centers the picture at `mid`. This is the layout engine's hook.
    pub fn place(&mut self, mid: Position) {
        self.placement = Placement::Positioned(mid);
    }

    /// Returns the positioned view of this picture.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotPositioned`] if the picture has no center yet.
    pub fn placed(&self) -> Result<PlacedPicture<'_>, GeometryError> {
        match self.placement {
            Placement::Unpositioned => Err(GeometryError::NotPositioned),
            Placement::Positioned(mid) => Ok(PlacedPicture { picture: self, mid }),
        }
    }

    pub fn top_left(&self) -> Result<Position, GeometryError> {
        Ok(self.placed()?.top_left())
    }

    pub fn top_right(&self) -> Result<Position, GeometryError> {
        Ok(self.placed()?.top_right())
    }

    pub fn bottom_right(&self) -> Result<Position, GeometryError> {
        Ok(self.placed()?.bottom_right())
    }

    pub fn bottom_left(&self) -> Result<Position, GeometryError> {
        Ok(self.placed()?.bottom_left())
    }

    /// The left and right wire attachment points.
    pub fn suspension_positions(&self) -> Result<[Position; 2], GeometryError> {
        Ok(self.placed()?.suspension_positions())
    }
}

/// A picture together with its center on the wall.
///
/// Every accessor is a pure function of the center, the picture size and its
/// suspension; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct PlacedPicture<'a> {
    picture: &'a Picture,
    mid: Position,
}

impl<'a> PlacedPicture<'a> {
    pub fn picture(&self) -> &'a Picture {
        self.picture
    }

    pub fn mid(&self) -> Position {
        self.mid
    }

    pub fn suspension(&self) -> Suspension {
        self.picture.suspension
    }

    fn half_width(&self) -> f32 {
        self.picture.width / 2.0
    }

    fn half_height(&self) -> f32 {
        self.picture.height / 2.0
    }

    pub fn top_left(&self) -> Position {
        Point::new(self.mid.x() - self.half_width(), self.mid.y() - self.half_height())
    }

    pub fn top_right(&self) -> Position {
        Point::new(self.mid.x() + self.half_width(), self.mid.y() - self.half_height())
    }

    pub fn bottom_right(&self) -> Position {
        Point::new(self.mid.x() + self.half_width(), self.mid.y() + self.half_height())
    }

    pub fn bottom_left(&self) -> Position {
        Point::new(self.mid.x() - self.half_width(), self.mid.y() + self.half_height())
    }

    /// The frame from the top-left to the bottom-right corner.
    pub fn frame(&self) -> Bounds {
        Bounds::new_from_corners(self.top_left(), self.bottom_right())
    }

    /// The y-coordinate of the line the wire is attached on.
    pub fn attachment_y(&self) -> f32 {
        self.top_left().y() + self.picture.suspension.padding
    }

    /// The left and right wire attachment points, symmetric about `mid.x`.
    pub fn suspension_positions(&self) -> [Position; 2] {
        let half_distance = self.picture.suspension.distance / 2.0;
        let y = self.attachment_y();
        [
            Point::new(self.mid.x() - half_distance, y),
            Point::new(self.mid.x() + half_distance, y),
        ]
    }
}

/// One wall and the pictures to hang on it, in left-to-right order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    wall: Wall,
    pictures: Vec<Picture>,
}

impl Plan {
    pub fn new(wall: Wall, pictures: Vec<Picture>) -> Self {
        Self { wall, pictures }
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn pictures_mut(&mut self) -> &mut [Picture] {
        &mut self.pictures
    }

    /// Splits the plan into its wall and a mutable view of the pictures.
    pub fn parts_mut(&mut self) -> (&Wall, &mut [Picture]) {
        (&self.wall, &mut self.pictures)
    }

    /// True once every picture has a center.
    pub fn is_positioned(&self) -> bool {
        self.pictures.iter().all(|picture| picture.mid().is_some())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn picture(width: f32, height: f32, distance: f32, padding: f32) -> Picture {
        Picture::new(width, height, Suspension::new(distance, padding).unwrap()).unwrap()
    }

    #[test]
    fn test_wall_rejects_non_positive_dimensions() {
        assert!(Wall::new(4000.0, 2000.0).is_ok());
        assert_eq!(
            Wall::new(0.0, 2000.0),
            Err(GeometryError::InvalidWall {
                width: 0.0,
                height: 2000.0
            })
        );
        assert!(Wall::new(4000.0, -1.0).is_err());
        assert!(Wall::new(f32::NAN, 10.0).is_err());
        assert!(Wall::new(f32::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_wall_bounds() {
        let wall = Wall::new(4000.0, 2000.0).unwrap();
        let bounds = wall.bounds();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.width(), 4000.0);
        assert_eq!(bounds.height(), 2000.0);
    }

    #[test]
    fn test_suspension_validation() {
        assert!(Suspension::new(500.0, 0.0).is_ok());
        assert!(matches!(
            Suspension::new(0.0, 10.0),
            Err(GeometryError::InvalidSuspension(_))
        ));
        assert!(Suspension::new(500.0, -1.0).is_err());
        assert!(Suspension::new(500.0, f32::NAN).is_err());
    }

    #[test]
    fn test_picture_rejects_suspension_wider_than_frame() {
        let suspension = Suspension::new(600.0, 80.0).unwrap();
        assert!(matches!(
            Picture::new(600.0, 500.0, suspension),
            Err(GeometryError::InvalidSuspension(_))
        ));
    }

    #[test]
    fn test_picture_rejects_attachment_line_in_lower_half() {
        let suspension = Suspension::new(500.0, 250.0).unwrap();
        assert!(matches!(
            Picture::new(600.0, 500.0, suspension),
            Err(GeometryError::InvalidSuspension(_))
        ));
    }

    #[test]
    fn test_picture_rejects_non_positive_size() {
        let suspension = Suspension::new(10.0, 1.0).unwrap();
        assert_eq!(
            Picture::new(-5.0, 500.0, suspension),
            Err(GeometryError::InvalidPicture {
                width: -5.0,
                height: 500.0
            })
        );
    }

    #[test]
    fn test_unpositioned_picture_has_no_derived_points() {
        let picture = picture(600.0, 500.0, 500.0, 80.0);

        assert_eq!(picture.mid(), None);
        assert_eq!(picture.placement(), Placement::Unpositioned);
        assert!(matches!(picture.placed(), Err(GeometryError::NotPositioned)));
        assert_eq!(picture.top_left(), Err(GeometryError::NotPositioned));
        assert_eq!(picture.top_right(), Err(GeometryError::NotPositioned));
        assert_eq!(picture.bottom_right(), Err(GeometryError::NotPositioned));
        assert_eq!(picture.bottom_left(), Err(GeometryError::NotPositioned));
        assert_eq!(
            picture.suspension_positions(),
            Err(GeometryError::NotPositioned)
        );
    }

    #[test]
    fn test_corners_of_placed_picture() {
        let mut picture = picture(600.0, 500.0, 500.0, 80.0);
        picture.place(Point::new(1000.0, 700.0));

        assert_eq!(picture.top_left(), Ok(Point::new(700.0, 450.0)));
        assert_eq!(picture.top_right(), Ok(Point::new(1300.0, 450.0)));
        assert_eq!(picture.bottom_right(), Ok(Point::new(1300.0, 950.0)));
        assert_eq!(picture.bottom_left(), Ok(Point::new(700.0, 950.0)));

        let frame = picture.placed().unwrap().frame();
        assert_eq!(frame.width(), 600.0);
        assert_eq!(frame.height(), 500.0);
        assert_eq!(frame.center(), Point::new(1000.0, 700.0));
    }

    #[test]
    fn test_reference_picture_points() {
        let mut picture = picture(600.0, 500.0, 500.0, 80.0);
        picture.place(Point::new(1000.0, 666.67));
        let placed = picture.placed().unwrap();

        let top_left = placed.top_left();
        assert_approx_eq!(f32, top_left.x(), 700.0, epsilon = 0.01);
        assert_approx_eq!(f32, top_left.y(), 416.67, epsilon = 0.01);

        let [left, right] = placed.suspension_positions();
        assert_approx_eq!(f32, left.x(), 750.0, epsilon = 0.01);
        assert_approx_eq!(f32, right.x(), 1250.0, epsilon = 0.01);
        assert_approx_eq!(f32, left.y(), 496.67, epsilon = 0.01);
        assert_approx_eq!(f32, right.y(), 496.67, epsilon = 0.01);
    }

    #[test]
    fn test_place_overwrites_previous_position() {
        let mut picture = picture(600.0, 500.0, 500.0, 80.0);
        picture.place(Point::new(1.0, 2.0));
        picture.place(Point::new(300.0, 400.0));
        assert_eq!(picture.mid(), Some(Point::new(300.0, 400.0)));
    }

    #[test]
    fn test_label() {
        let picture = picture(600.0, 500.0, 500.0, 80.0);
        assert_eq!(picture.label(), None);
        assert_eq!(picture.with_label("Harbour").label(), Some("Harbour"));
    }

    #[test]
    fn test_plan_is_positioned() {
        let wall = Wall::new(4000.0, 2000.0).unwrap();
        let mut plan = Plan::new(
            wall,
            vec![picture(600.0, 500.0, 500.0, 80.0), picture(400.0, 400.0, 300.0, 50.0)],
        );
        assert!(!plan.is_positioned());

        plan.pictures_mut()[0].place(Point::new(1000.0, 500.0));
        assert!(!plan.is_positioned());

        let (_, pictures) = plan.parts_mut();
        pictures[1].place(Point::new(2000.0, 500.0));
        assert!(plan.is_positioned());
        assert_eq!(plan.wall(), &wall);
        assert_eq!(plan.pictures().len(), 2);
    }

    #[test]
    fn test_empty_plan_is_positioned() {
        let plan = Plan::new(Wall::new(10.0, 10.0).unwrap(), Vec::new());
        assert!(plan.is_positioned());
    }
}
