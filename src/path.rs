//! Path data (`d` attribute): a small builder and a vertex extractor.
//!
//! Vertices are every coordinate the path passes through or is pulled toward:
//! segment end points plus curve control points. A Bezier curve always lies
//! inside the convex hull of its control polygon, so boxes and hulls computed
//! from these vertices are conservative for curved paths and exact for
//! polylines. An elliptical arc contributes its end point and every point
//! where it reaches furthest along an axis, which keeps its box exact.

use std::f64::consts::{PI, TAU};

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::attrs::format_num;
use crate::errors::AttrError;
use crate::types::Point;

#[derive(Parser)]
#[grammar = "path.pest"]
struct PathParser;

/// Incrementally writes path data, like drawing with a pen
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    data: String,
    start: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new subpath at (x, y)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data
            .push_str(&format!("M {} {}", format_num(x), format_num(y)));
        self.start = Some(Point::new(x, y));
        self
    }

    /// Draw a straight line to (x, y). Starts the path there if nothing was drawn yet.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        if self.start.is_none() {
            return self.move_to(x, y);
        }
        self.data
            .push_str(&format!(" L {} {}", format_num(x), format_num(y)));
        self
    }

    /// Line back to the start of the current subpath
    pub fn close(&mut self) -> &mut Self {
        if self.start.is_some() {
            self.data.push_str(" Z");
        }
        self
    }

    /// The `d` attribute text written so far
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn build(&self) -> String {
        self.data.clone()
    }
}

/// Pen state while walking the commands
#[derive(Debug, Clone, Copy, Default)]
struct Pen {
    current: Point,
    subpath_start: Point,
    /// Second control point of the previous cubic, for `S`
    last_cubic: Option<Point>,
    /// Control point of the previous quadratic, for `T`
    last_quad: Option<Point>,
}

impl Pen {
    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative { self.current + p } else { p }
    }

    /// Reflection of a previous control point through the current point
    fn reflect(&self, control: Option<Point>) -> Point {
        control.map_or(self.current, |c| self.current * 2.0 - c)
    }
}

/// Parse path data and return its vertices in drawing order
pub fn path_vertices(data: &str) -> Result<Vec<Point>, AttrError> {
    let mut pairs = PathParser::parse(Rule::path, data).map_err(|e| {
        let span: SourceSpan = match e.location {
            InputLocation::Pos(pos) => (pos, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        AttrError::InvalidPathData {
            src: NamedSource::new("d", data.to_string()),
            span,
            message: e.variant.message().into_owned(),
        }
    })?;

    let mut vertices = Vec::new();
    let mut pen = Pen::default();

    let Some(path) = pairs.next() else {
        return Ok(vertices);
    };

    for segment in path.into_inner() {
        let rule = segment.as_rule();
        if rule == Rule::EOI {
            continue;
        }
        if rule == Rule::close {
            pen.current = pen.subpath_start;
            pen.last_cubic = None;
            pen.last_quad = None;
            continue;
        }

        let span = segment.as_span();
        let mut inner = segment.into_inner();
        let relative = inner
            .next()
            .map(|cmd| cmd.as_str().chars().all(|c| c.is_ascii_lowercase()))
            .unwrap_or(false);

        match rule {
            Rule::horizontal | Rule::vertical => {
                for value in inner {
                    let v = parse_number(&value);
                    let mut next = pen.current;
                    if rule == Rule::horizontal {
                        next.x = if relative { pen.current.x + v } else { v };
                    } else {
                        next.y = if relative { pen.current.y + v } else { v };
                    }
                    pen.current = next;
                    vertices.push(next);
                }
                pen.last_cubic = None;
                pen.last_quad = None;
            }
            Rule::arc => {
                for args in inner {
                    let arc = parse_arc(&args, &pen, relative);
                    vertices.extend(arc.extremes(pen.current));
                    vertices.push(arc.end);
                    pen.current = arc.end;
                }
                pen.last_cubic = None;
                pen.last_quad = None;
            }
            _ => {
                let coords: Vec<Point> = inner.map(|pair| parse_pair(&pair)).collect();
                let arity = match rule {
                    Rule::cubic => 3,
                    Rule::smooth_cubic | Rule::quadratic => 2,
                    _ => 1,
                };
                if coords.len() % arity != 0 {
                    return Err(AttrError::InvalidPathData {
                        src: NamedSource::new("d", data.to_string()),
                        span: (span.start(), span.end() - span.start()).into(),
                        message: format!("expected coordinate pairs in groups of {arity}"),
                    });
                }

                for (i, group) in coords.chunks(arity).enumerate() {
                    match rule {
                        Rule::move_to => {
                            let p = pen.resolve(group[0], relative);
                            // Pairs after the first are implicit line-tos
                            if i == 0 {
                                pen.subpath_start = p;
                            }
                            pen.current = p;
                            pen.last_cubic = None;
                            pen.last_quad = None;
                            vertices.push(p);
                        }
                        Rule::line_to => {
                            let p = pen.resolve(group[0], relative);
                            pen.current = p;
                            pen.last_cubic = None;
                            pen.last_quad = None;
                            vertices.push(p);
                        }
                        Rule::smooth_quadratic => {
                            let control = pen.reflect(pen.last_quad);
                            let end = pen.resolve(group[0], relative);
                            vertices.extend([control, end]);
                            pen.current = end;
                            pen.last_quad = Some(control);
                            pen.last_cubic = None;
                        }
                        Rule::cubic => {
                            let c1 = pen.resolve(group[0], relative);
                            let c2 = pen.resolve(group[1], relative);
                            let end = pen.resolve(group[2], relative);
                            vertices.extend([c1, c2, end]);
                            pen.current = end;
                            pen.last_cubic = Some(c2);
                            pen.last_quad = None;
                        }
                        Rule::smooth_cubic => {
                            let c1 = pen.reflect(pen.last_cubic);
                            let c2 = pen.resolve(group[0], relative);
                            let end = pen.resolve(group[1], relative);
                            vertices.extend([c1, c2, end]);
                            pen.current = end;
                            pen.last_cubic = Some(c2);
                            pen.last_quad = None;
                        }
                        Rule::quadratic => {
                            let control = pen.resolve(group[0], relative);
                            let end = pen.resolve(group[1], relative);
                            vertices.extend([control, end]);
                            pen.current = end;
                            pen.last_quad = Some(control);
                            pen.last_cubic = None;
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    Ok(vertices)
}

fn parse_number(pair: &Pair<'_, Rule>) -> f64 {
    // The grammar only admits well-formed decimal literals
    pair.as_str().parse().unwrap_or(f64::NAN)
}

fn parse_pair(pair: &Pair<'_, Rule>) -> Point {
    let mut numbers = pair.clone().into_inner();
    let x = numbers.next().map_or(f64::NAN, |n| parse_number(&n));
    let y = numbers.next().map_or(f64::NAN, |n| parse_number(&n));
    Point::new(x, y)
}

/// One elliptical arc segment, end point already resolved
#[derive(Debug, Clone, Copy)]
struct Arc {
    radii: Point,
    /// x-axis rotation in degrees
    rotation: f64,
    large_arc: bool,
    sweep: bool,
    end: Point,
}

fn parse_arc(pair: &Pair<'_, Rule>, pen: &Pen, relative: bool) -> Arc {
    let mut args = pair.clone().into_inner();
    let mut number = || args.next().map_or(f64::NAN, |n| parse_number(&n));
    let rx = number();
    let ry = number();
    let rotation = number();
    let large_arc = number() != 0.0;
    let sweep = number() != 0.0;
    let end = args
        .next()
        .map_or(Point::NAN, |p| pen.resolve(parse_pair(&p), relative));
    Arc {
        radii: Point::new(rx.abs(), ry.abs()),
        rotation,
        large_arc,
        sweep,
        end,
    }
}

impl Arc {
    /// Points strictly along the arc from `start` where it is furthest left,
    /// right, up or down. Uses the endpoint-to-center conversion from the SVG
    /// implementation notes (F.6.5), including the radius correction (F.6.6).
    fn extremes(&self, start: Point) -> Vec<Point> {
        let Point { x: mut rx, y: mut ry } = self.radii;
        if rx == 0.0 || ry == 0.0 || start == self.end {
            return Vec::new();
        }
        let (sin_phi, cos_phi) = self.rotation.to_radians().sin_cos();
        let half = (start - self.end) / 2.0;
        let p = Point::new(
            cos_phi * half.x + sin_phi * half.y,
            -sin_phi * half.x + cos_phi * half.y,
        );

        let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let num = rx * rx * ry * ry - rx * rx * p.y * p.y - ry * ry * p.x * p.x;
        let den = rx * rx * p.y * p.y + ry * ry * p.x * p.x;
        let sign = if self.large_arc == self.sweep { -1.0 } else { 1.0 };
        let coef = sign * (num / den).max(0.0).sqrt();
        let center_p = Point::new(coef * rx * p.y / ry, -coef * ry * p.x / rx);
        let mid = (start + self.end) / 2.0;
        let center = Point::new(
            cos_phi * center_p.x - sin_phi * center_p.y + mid.x,
            sin_phi * center_p.x + cos_phi * center_p.y + mid.y,
        );

        let angle = |u: Point, v: Point| u.perp_dot(v).atan2(u.dot(v));
        let from = Point::new((p.x - center_p.x) / rx, (p.y - center_p.y) / ry);
        let to = Point::new((-p.x - center_p.x) / rx, (-p.y - center_p.y) / ry);
        let theta_start = angle(Point::X, from);
        let mut theta_span = angle(from, to);
        if !self.sweep && theta_span > 0.0 {
            theta_span -= TAU;
        } else if self.sweep && theta_span < 0.0 {
            theta_span += TAU;
        }

        let on_ellipse = |theta: f64| {
            let (sin_t, cos_t) = theta.sin_cos();
            Point::new(
                center.x + rx * cos_phi * cos_t - ry * sin_phi * sin_t,
                center.y + rx * sin_phi * cos_t + ry * cos_phi * sin_t,
            )
        };
        let swept = |theta: f64| {
            if theta_span >= 0.0 {
                (theta - theta_start).rem_euclid(TAU) <= theta_span
            } else {
                (theta_start - theta).rem_euclid(TAU) <= -theta_span
            }
        };

        // Parameters where dx/dtheta = 0 and dy/dtheta = 0
        let theta_x = (-ry * sin_phi).atan2(rx * cos_phi);
        let theta_y = (ry * cos_phi).atan2(rx * sin_phi);
        [theta_x, theta_x + PI, theta_y, theta_y + PI]
            .into_iter()
            .filter(|&theta| swept(theta))
            .map(on_ellipse)
            .collect()
    }
}
