//! Random example plans.
//!
//! Used by the CLI when no plan file is given. Every generated picture
//! satisfies the geometry invariants by construction: the suspension distance
//! stays 50 to 100 units inside the picture width and the padding stays above
//! the frame's horizontal center line.

use log::debug;
use rand::Rng;

use wallplan_core::model::{Picture, Plan, Suspension, Wall};

use crate::WallplanError;

const EXAMPLE_WALL_WIDTH: f32 = 4000.0;
const EXAMPLE_WALL_HEIGHT: f32 = 2000.0;
const EXAMPLE_PICTURES: usize = 3;

/// Generates a picture with whole-unit dimensions.
///
/// Width and height fall in `[400, 1000)`, the suspension distance in
/// `[width - 100, width - 50)` and the padding in `[50, height / 2)`.
///
/// # Errors
///
/// Never fails for the ranges above; the result is still checked by
/// [`Picture::new`] and propagated.
pub fn random_picture<R>(rng: &mut R) -> Result<Picture, WallplanError>
where
    R: Rng,
{
    let width: u32 = rng.random_range(400..1000);
    let height: u32 = rng.random_range(400..1000);
    let distance: u32 = rng.random_range(width - 100..width - 50);
    let padding: u32 = rng.random_range(50..height / 2);

    let suspension = Suspension::new(distance as f32, padding as f32)?;
    Ok(Picture::new(width as f32, height as f32, suspension)?)
}

/// Builds the example plan: a 4000 × 2000 wall with three random pictures.
///
/// # Errors
///
/// Propagates any error from [`random_picture`].
pub fn example_plan<R>(rng: &mut R) -> Result<Plan, WallplanError>
where
    R: Rng,
{
    let wall = Wall::new(EXAMPLE_WALL_WIDTH, EXAMPLE_WALL_HEIGHT)?;
    let pictures = (0..EXAMPLE_PICTURES)
        .map(|_| random_picture(rng))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(pictures = pictures.len(); "Generated example plan");
    Ok(Plan::new(wall, pictures))
}
