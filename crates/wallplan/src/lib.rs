//! Wallplan - hanging plans for pictures on a wall.
//!
//! Spaces pictures evenly along a wall and draws an annotated diagram with
//! frames, centering diagonals, wire attachment markers and the dimensions
//! needed to mark the nails on the real wall.

pub mod config;
pub mod example;
pub mod export;
pub mod layout;
pub mod plan;
pub mod render;

mod error;

pub use wallplan_core::{color, draw, geometry, model};

pub use error::WallplanError;

use log::{debug, info, trace};
use rand::Rng;

use config::AppConfig;
use export::svg::SvgCanvas;
use model::Plan;
use render::Renderer;

/// Builder for loading, laying out and rendering hanging plans.
///
/// # Examples
///
/// ```
/// use wallplan::{PlanBuilder, config::AppConfig};
///
/// let source = r#"
///     [wall]
///     width = 4000
///     height = 2000
///
///     [[pictures]]
///     width = 600
///     height = 500
///     suspension = { distance = 500, padding = 80 }
/// "#;
///
/// let builder = PlanBuilder::new(AppConfig::default());
///
/// let mut plan = builder.parse(source)?;
/// builder.layout(&mut plan);
/// let svg = builder.render_svg(&plan)?;
///
/// assert!(svg.contains("data-annotation=\"frame\""));
/// # Ok::<(), wallplan::WallplanError>(())
/// ```
#[derive(Debug, Default)]
pub struct PlanBuilder {
    config: AppConfig,
}

impl PlanBuilder {
    /// Create a new plan builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML plan file into an unpositioned [`Plan`].
    ///
    /// # Errors
    ///
    /// See [`plan::parse_plan`].
    pub fn parse(&self, source: &str) -> Result<Plan, WallplanError> {
        info!("Parsing plan");
        let plan = plan::parse_plan(source)?;
        trace!(plan:?; "Parsed plan");
        Ok(plan)
    }

    /// Generate the random example plan.
    ///
    /// # Errors
    ///
    /// See [`example::example_plan`].
    pub fn example<R>(&self, rng: &mut R) -> Result<Plan, WallplanError>
    where
        R: Rng,
    {
        info!("Generating example plan");
        example::example_plan(rng)
    }

    /// Position every picture of the plan on its wall.
    pub fn layout(&self, plan: &mut Plan) {
        info!(pictures = plan.pictures().len(); "Laying out plan");
        layout::layout_plan(plan);
    }

    /// Render a laid-out plan to an SVG string.
    ///
    /// The configuration is resolved before anything is drawn. The drawing
    /// is composited onto the configured canvas only if rendering succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`WallplanError::Style`] for an invalid configuration and
    /// [`WallplanError::Geometry`] if any picture has not been laid out.
    pub fn render_svg(&self, plan: &Plan) -> Result<String, WallplanError> {
        let style = self
            .config
            .style()
            .annotation_style()
            .map_err(WallplanError::Style)?;
        let padding = self
            .config
            .canvas()
            .insets()
            .map_err(WallplanError::Style)?;
        let background = self
            .config
            .canvas()
            .background_color()
            .map_err(WallplanError::Style)?;

        let renderer = Renderer::new(style);
        let canvas = SvgCanvas::new(plan.wall().size())
            .with_padding(padding)
            .with_background(background);
        debug!(size:? = canvas.document_size(); "Rendering plan to SVG");

        let document =
            canvas.paint(|surface| renderer.render(plan.wall(), plan.pictures(), surface))?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
