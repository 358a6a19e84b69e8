//! TOML plan files.
//!
//! A plan file describes one wall and the pictures to hang on it, in the
//! order they should appear from left to right:
//!
//! ```toml
//! [wall]
//! width = 4000
//! height = 2000
//!
//! [[pictures]]
//! label = "Harbour"
//! width = 600
//! height = 500
//! suspension = { distance = 500, padding = 80 }
//! ```
//!
//! Plan files only describe sizes. Positions are always computed by
//! [`layout`](crate::layout), so the parsed [`Plan`] starts unpositioned.

use log::{debug, trace};
use serde::Deserialize;

use wallplan_core::{
    error::GeometryError,
    model::{Picture, Plan, Suspension, Wall},
};

use crate::WallplanError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    wall: WallEntry,
    #[serde(default)]
    pictures: Vec<PictureEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WallEntry {
    width: f32,
    height: f32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PictureEntry {
    #[serde(default)]
    label: Option<String>,
    width: f32,
    height: f32,
    suspension: SuspensionEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuspensionEntry {
    distance: f32,
    padding: f32,
}

impl PictureEntry {
    fn into_picture(self) -> Result<Picture, GeometryError> {
        let suspension = Suspension::new(self.suspension.distance, self.suspension.padding)?;
        let picture = Picture::new(self.width, self.height, suspension)?;
        Ok(match self.label {
            Some(label) => picture.with_label(label),
            None => picture,
        })
    }
}

/// Parses and validates a plan file.
///
/// # Errors
///
/// Returns [`WallplanError::PlanSyntax`] for malformed TOML or missing and
/// unknown keys, [`WallplanError::Geometry`] for an invalid wall, and
/// [`WallplanError::Picture`] naming the zero-based index of the first
/// picture that violates its geometry invariants.
pub fn parse_plan(source: &str) -> Result<Plan, WallplanError> {
    let file: PlanFile = toml::from_str(source)
        .map_err(|err| WallplanError::new_plan_syntax_error(err, source))?;
    trace!(file:?; "Plan file deserialized");

    let wall = Wall::new(file.wall.width, file.wall.height)?;

    let pictures = file
        .pictures
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_picture()
                .map_err(|err| WallplanError::new_picture_error(index, err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        wall_width = wall.width(),
        wall_height = wall.height(),
        pictures = pictures.len();
        "Plan parsed"
    );

    Ok(Plan::new(wall, pictures))
}
