//! A dot travelling along a line, one frame per position, played at 4 fps.

use svgtree::{Document, Node, animate};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let track = Node::line(0.0, 0.0, 200.0, 100.0);
    let segment = track.segment()?;

    let frames: Vec<Document> = (0..=8)
        .map(|step| {
            let at = segment.along(step as f64 / 8.0);
            let mut frame = Document::new();
            frame
                .push(Node::line(0.0, 0.0, 200.0, 100.0))
                .push(Node::circle_at(at, 6.0));
            frame
        })
        .collect();

    let movie = animate(frames, 4.0)?;
    println!("{movie}");
    Ok(())
}
