//! Build two small drawings, merge them side by side, tile a few copies in a
//! grid and print the results.
//!
//! Run with `RUST_LOG=debug cargo run --example basic --features tracing` to
//! see layout decisions.

use svgtree::{Document, GridOptions, Margins, Node, PathBuilder, Point, merge, merge_grid, polar_points};
use tracing_subscriber::EnvFilter;

fn target() -> Document {
    let mut doc = Document::new();
    doc.push(Node::circle(0.0, 0.0, 60.0))
        .push(Node::circle(0.0, 0.0, 40.0))
        .push(Node::circle(0.0, 0.0, 20.0));
    doc.style("circle")
        .set_str("fill", "none")
        .set_str("stroke", "#000000");
    doc
}

fn star() -> Document {
    // inner points sit halfway between the tips
    let half_step = Point::from_angle(std::f64::consts::PI / 5.0);
    let tips = polar_points(5, 0.0, 0.0, 50.0);
    let notches = polar_points(5, 0.0, 0.0, 20.0);
    let mut pen = PathBuilder::new();
    for (tip, notch) in tips.into_iter().zip(notches) {
        let notch = notch.rotate(half_step);
        pen.line_to(tip.x, tip.y).line_to(notch.x, notch.y);
    }
    pen.close();

    let mut doc = Document::new();
    doc.push(Node::path(pen.build()))
        .push(Node::text(-20.0, 70.0, "star"));
    doc
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut single = target();
    single.autoscale(Margins::uniform(5.0))?;
    println!("{single}\n");

    let pair = merge(target(), star())?;
    println!("{pair}\n");

    let frames = (0..5)
        .map(|i| if i % 2 == 0 { target() } else { star() })
        .collect();
    let grid = merge_grid(frames, GridOptions::new(400.0, 120.0))?;
    println!("{grid}");
    Ok(())
}
