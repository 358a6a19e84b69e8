//! Example: Building a plan from the model types
//!
//! This example demonstrates how to build a hanging plan programmatically,
//! without a plan file, and inspect the computed nail positions.

use wallplan::{
    PlanBuilder,
    model::{Picture, Plan, Suspension, Wall},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let wall = Wall::new(3600.0, 2400.0)?;

    let pictures = vec![
        Picture::new(700.0, 500.0, Suspension::new(620.0, 90.0)?)?.with_label("Lighthouse"),
        Picture::new(450.0, 600.0, Suspension::new(380.0, 70.0)?)?.with_label("Portrait"),
    ];

    let builder = PlanBuilder::default();
    let mut plan = Plan::new(wall, pictures);
    builder.layout(&mut plan);

    for picture in plan.pictures() {
        let placed = picture.placed()?;
        let [left, right] = placed.suspension_positions();
        println!(
            "{}: nails at ({}, {}) and ({}, {})",
            picture.label().unwrap_or("untitled"),
            left.x(),
            left.y(),
            right.x(),
            right.y()
        );
    }

    let svg = builder.render_svg(&plan)?;
    println!("\nRendered {} bytes of SVG", svg.len());

    Ok(())
}
