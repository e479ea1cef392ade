//! Sizing, composition and geometry queries through the public API

use svgtree::{
    BBox, ComposeError, Document, GridOptions, Margins, Node, Point, ViewBox, bounding_polygon,
    merge, merge_grid, merge_with, polar_points,
};

fn two_circles() -> Document {
    let mut doc = Document::new();
    doc.push(Node::circle(-100.0, -100.0, 100.0))
        .push(Node::circle(100.0, 100.0, 100.0));
    doc
}

/// A document that autoscales (with default margins) to `width` x `height`
fn frame(width: f64, height: f64) -> Document {
    let mut doc = Document::new();
    doc.push(Node::rect(0.0, 0.0, width - 20.0, height - 20.0));
    doc
}

fn close(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn autoscale_two_circles_without_margins() {
    let mut doc = two_circles();
    assert_eq!(doc.bbox().unwrap(), BBox::new(-200.0, 200.0, -200.0, 200.0));

    doc.autoscale(Margins::NONE).unwrap();
    assert_eq!(doc.get("width"), Some("400.0"));
    assert_eq!(doc.get("height"), Some("400.0"));
    assert_eq!(
        doc.view_box().unwrap(),
        Some(ViewBox {
            min_x: -200.0,
            min_y: -200.0,
            width: 400.0,
            height: 400.0,
        })
    );
}

#[test]
fn merged_pair_is_840_by_420() {
    let merged = merge(two_circles(), two_circles()).unwrap();
    assert_eq!(merged.width().unwrap(), 840.0);
    assert_eq!(merged.height().unwrap(), 420.0);
    assert_eq!(merged.children().len(), 2);
}

#[test]
fn merges_nest() {
    let pair = merge(two_circles(), two_circles()).unwrap();
    let triple = merge(pair, frame(100.0, 500.0)).unwrap();
    // the pair's own width is recomputed from its content on the second merge
    let sides = triple.immediate_children(Some("svg"));
    assert_eq!(sides[1].x().unwrap(), sides[0].width().unwrap());
    assert_eq!(triple.height().unwrap(), 500.0);
}

#[test]
fn grid_height_is_sum_of_row_maxima() {
    let frames = vec![
        frame(100.0, 40.0),
        frame(100.0, 70.0),
        frame(100.0, 50.0),
        frame(100.0, 30.0),
        frame(100.0, 90.0),
    ];
    let grid = merge_grid(frames, GridOptions::new(300.0, 1000.0)).unwrap();

    // rows: [40, 70, 50] and [30, 90]
    assert_eq!(grid.width().unwrap(), 300.0);
    assert_eq!(grid.height().unwrap(), 70.0 + 90.0);
    assert_eq!(grid.get("viewBox"), Some("0.0 0.0 300.0 160.0"));

    let rows: Vec<f64> = grid
        .immediate_children(Some("svg"))
        .iter()
        .map(|f| f.y().unwrap())
        .collect();
    assert_eq!(rows, [0.0, 0.0, 0.0, 70.0, 70.0]);
}

#[test]
fn grid_scales_before_packing() {
    let frames = vec![frame(400.0, 200.0), frame(100.0, 100.0)];
    let grid = merge_grid(frames, GridOptions::new(250.0, 200.0)).unwrap();

    let placed = grid.immediate_children(Some("svg"));
    assert_eq!(placed[0].width().unwrap(), 200.0);
    assert_eq!(placed[0].height().unwrap(), 100.0);
    assert_eq!((placed[1].x().unwrap(), placed[1].y().unwrap()), (0.0, 100.0));
    assert_eq!(grid.height().unwrap(), 200.0);
}

#[test]
fn bad_shape_data_surfaces_from_composition() {
    let mut broken = Document::new();
    broken.push(Node::path("M 0 0 L 10"));
    let err = merge_grid(vec![broken], GridOptions::new(100.0, 100.0)).unwrap_err();
    assert!(matches!(err, ComposeError::Attr(_)));
}

#[test]
fn arc_paths_take_part_in_layout() {
    // a half disc of radius 50 bulging upward
    let mut arch = Document::new();
    arch.push(Node::path("M 0 100 A 50 50 0 0 1 100 100 Z"));

    let bbox = arch.bbox().unwrap();
    assert!((bbox.y_min - 50.0).abs() < 1e-9, "{bbox:?}");
    assert_eq!((bbox.x_min, bbox.x_max, bbox.y_max), (0.0, 100.0, 100.0));

    let merged = merge_with(arch, frame(40.0, 40.0), Margins::NONE).unwrap();
    let sides = merged.immediate_children(Some("svg"));
    assert_eq!(sides[1].x().unwrap(), 100.0);
    assert_eq!(merged.height().unwrap(), 150.0);
}

#[test]
fn hull_around_mixed_shapes() {
    let mut doc = Document::new();
    doc.push(Node::rect(0.0, 0.0, 10.0, 10.0))
        .push(Node::circle(20.0, 5.0, 2.0))
        .push(Node::polygon(&[
            Point::new(5.0, -10.0),
            Point::new(6.0, 0.0),
            Point::new(4.0, 0.0),
        ]));

    let hull = bounding_polygon(doc.descendants()).unwrap();
    for corner in [
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(22.0, 3.0),
        Point::new(22.0, 7.0),
        Point::new(5.0, -10.0),
    ] {
        assert!(hull.contains(&corner), "{corner} missing from {hull:?}");
    }
    assert!(!hull.contains(&Point::new(6.0, 0.0)));
}

#[test]
fn points_along_a_line_element() {
    let line = Node::line(0.0, 0.0, 30.0, 40.0);
    let segment = line.segment().unwrap();
    assert!(close(segment.along(0.0), Point::new(0.0, 0.0)));
    assert!(close(segment.along(0.5), Point::new(15.0, 20.0)));
    assert!(close(segment.along(1.0), Point::new(30.0, 40.0)));

    let vertical = Node::line(5.0, 40.0, 5.0, 0.0).segment().unwrap();
    assert!(close(vertical.along(0.25), Point::new(5.0, 30.0)));
    assert!(close(vertical.along(1.0), Point::new(5.0, 0.0)));
}

#[test]
fn polygon_from_polar_points() {
    let corners = polar_points(6, 50.0, 50.0, 10.0);
    let hexagon = Node::polygon(&corners);
    let bbox = hexagon.bbox().unwrap();
    assert_eq!(bbox.x_min, 40.0);
    assert_eq!(bbox.x_max, 60.0);
    assert_eq!(bbox.y_min, 41.3);
    assert_eq!(bbox.y_max, 58.7);
}
