//! Placement of pictures along a wall.
//!
//! The wall width is split into `N + 1` equal parts and the pictures are
//! centered on the `N` inner division marks, left to right. Every picture
//! shares the same vertical center, one third of the way down the wall.
//!
//! ```text
//!  ┌──────────────────────────────────────┐
//!  │                                      │
//!  │   ┌───┐       ┌───┐       ┌───┐      │  y = H / 3
//!  │   │ 1 │       │ 2 │       │ 3 │      │
//!  │   └───┘       └───┘       └───┘      │
//!  │                                      │
//!  └──────────────────────────────────────┘
//!      W/4         2W/4        3W/4
//! ```
//!
//! This is a placement policy, not a solver: pictures wider than their share
//! of the wall overlap their neighbours and nothing detects it.

use log::{debug, trace};

use wallplan_core::{
    geometry::Point,
    model::{Picture, Plan, Wall},
};

/// Pictures are centered at `1 / VERTICAL_DIVISOR` of the wall height.
const VERTICAL_DIVISOR: f32 = 3.0;

/// Centers every picture on the wall, overwriting any previous placement.
///
/// The i-th of `N` pictures (zero-based) gets `mid = (W * (i + 1) / (N + 1), H / 3)`.
/// An empty slice is a no-op. The result depends only on the wall and the
/// number of pictures, so running it twice gives identical placements.
///
/// # Examples
///
/// ```
/// # use wallplan::layout::layout;
/// # use wallplan::model::{Picture, Suspension, Wall};
/// # use wallplan::geometry::Point;
/// let wall = Wall::new(4000.0, 3000.0)?;
/// let picture = Picture::new(600.0, 500.0, Suspension::new(500.0, 80.0)?)?;
/// let mut pictures = vec![picture.clone(), picture.clone(), picture];
///
/// layout(&wall, &mut pictures);
///
/// assert_eq!(pictures[0].mid(), Some(Point::new(1000.0, 1000.0)));
/// assert_eq!(pictures[2].mid(), Some(Point::new(3000.0, 1000.0)));
/// # Ok::<(), wallplan::WallplanError>(())
/// ```
pub fn layout(wall: &Wall, pictures: &mut [Picture]) {
    let parts = (pictures.len() + 1) as f32;
    let y = wall.height() / VERTICAL_DIVISOR;

    debug!(
        pictures = pictures.len(),
        spacing = wall.width() / parts,
        y;
        "Spacing pictures along wall"
    );

    for (index, picture) in pictures.iter_mut().enumerate() {
        let x = wall.width() * (index + 1) as f32 / parts;
        trace!(index, x, y; "Placing picture");
        picture.place(Point::new(x, y));
    }
}

/// Lays out every picture of a plan on its own wall.
pub fn layout_plan(plan: &mut Plan) {
    let (wall, pictures) = plan.parts_mut();
    layout(wall, pictures);
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use wallplan_core::model::Suspension;

    use super::*;

    /// Every picture sits on its division mark at one third of the wall height.
    fn check_even_spacing(width: f32, height: f32, count: usize) -> Result<(), TestCaseError> {
        let wall = Wall::new(width, height).expect("strategy keeps the wall valid");
        let template = Picture::new(100.0, 100.0, Suspension::new(50.0, 10.0).expect("valid"))
            .expect("valid");
        let mut pictures = vec![template; count];

        layout(&wall, &mut pictures);

        for (index, picture) in pictures.iter().enumerate() {
            let mid = picture.mid().expect("layout places every picture");
            let expected_x = width * (index + 1) as f32 / (count + 1) as f32;
            prop_assert!(approx_eq!(f32, mid.x(), expected_x, epsilon = 0.01));
            prop_assert!(approx_eq!(f32, mid.y(), height / 3.0, epsilon = 0.01));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn even_spacing(width in 1.0f32..10000.0, height in 1.0f32..10000.0, count in 0usize..12) {
            check_even_spacing(width, height, count)?;
        }
    }
}
