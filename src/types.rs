//! Geometry primitives shared by every layer of the crate.
//!
//! Coordinates are raw `f64` in SVG user units. A missing coordinate is NaN,
//! and the NaN-aware combinators here make such values drop out of unions
//! instead of poisoning them.

use std::fmt;

use glam::DVec2;

/// A point in SVG user space (y grows downward)
pub type Point = DVec2;

/// Minimum of two values where NaN means "unset".
///
/// If exactly one side is NaN the other wins; if both are NaN the result
/// stays NaN.
#[inline]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() {
        b
    } else if b.is_nan() {
        a
    } else {
        a.min(b)
    }
}

/// Maximum of two values where NaN means "unset". See [`nan_min`].
#[inline]
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() {
        b
    } else if b.is_nan() {
        a
    } else {
        a.max(b)
    }
}

/// Axis-aligned bounding box.
///
/// Each field may independently be NaN. A box with all four fields NaN is the
/// sentinel: "no geometry yet".
#[derive(Clone, Copy, Debug)]
pub struct BBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BBox {
    /// The box that contributes nothing to a union
    pub const SENTINEL: BBox = BBox {
        x_min: f64::NAN,
        x_max: f64::NAN,
        y_min: f64::NAN,
        y_max: f64::NAN,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        BBox {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Smallest box holding every point. Empty input gives the sentinel.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        points
            .into_iter()
            .fold(BBox::SENTINEL, |acc, p| acc.union(&BBox::new(p.x, p.x, p.y, p.y)))
    }

    /// True when every field is unset
    pub fn is_sentinel(&self) -> bool {
        self.x_min.is_nan() && self.x_max.is_nan() && self.y_min.is_nan() && self.y_max.is_nan()
    }

    /// Field-wise NaN-aware union
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x_min: nan_min(self.x_min, other.x_min),
            x_max: nan_max(self.x_max, other.x_max),
            y_min: nan_min(self.y_min, other.y_min),
            y_max: nan_max(self.y_max, other.y_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_min, self.y_max),
            Point::new(self.x_max, self.y_max),
        ]
    }
}

impl Default for BBox {
    fn default() -> Self {
        BBox::SENTINEL
    }
}

/// Two boxes are equal when every field is equal or both sides are unset.
impl PartialEq for BBox {
    fn eq(&self, other: &Self) -> bool {
        fn same(a: f64, b: f64) -> bool {
            (a.is_nan() && b.is_nan()) || a == b
        }
        same(self.x_min, other.x_min)
            && same(self.x_max, other.x_max)
            && same(self.y_min, other.y_min)
            && same(self.y_max, other.y_max)
    }
}

/// Padding on each side of an auto-fitted document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const NONE: Margins = Margins::uniform(0.0);
    pub const DEFAULT: Margins = Margins::uniform(crate::defaults::DEFAULT_MARGIN);

    pub const fn uniform(value: f64) -> Self {
        Margins {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::DEFAULT
    }
}

/// The `viewBox` rectangle of a document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.p$} {:.p$} {:.p$} {:.p$}",
            self.min_x,
            self.min_y,
            self.width,
            self.height,
            p = crate::defaults::DECIMAL_PLACES
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== NaN-aware min/max ====================

    #[test]
    fn nan_min_prefers_the_set_value() {
        assert_eq!(nan_min(f64::NAN, 3.0), 3.0);
        assert_eq!(nan_min(3.0, f64::NAN), 3.0);
        assert_eq!(nan_min(2.0, 3.0), 2.0);
        assert!(nan_min(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn nan_max_prefers_the_set_value() {
        assert_eq!(nan_max(f64::NAN, -3.0), -3.0);
        assert_eq!(nan_max(-3.0, f64::NAN), -3.0);
        assert_eq!(nan_max(2.0, 3.0), 3.0);
        assert!(nan_max(f64::NAN, f64::NAN).is_nan());
    }

    // ==================== BBox ====================

    #[test]
    fn bbox_default_is_sentinel() {
        assert!(BBox::default().is_sentinel());
        assert_eq!(BBox::default(), BBox::SENTINEL);
    }

    #[test]
    fn bbox_union_with_sentinel_is_identity() {
        let b = BBox::new(-1.0, 4.0, 2.0, 5.0);
        assert_eq!(b.union(&BBox::SENTINEL), b);
        assert_eq!(BBox::SENTINEL.union(&b), b);
        assert!(BBox::SENTINEL.union(&BBox::SENTINEL).is_sentinel());
    }

    #[test]
    fn bbox_union_is_commutative() {
        let boxes = [
            BBox::new(0.0, 1.0, 0.0, 1.0),
            BBox::new(-5.0, -2.0, 3.0, 9.0),
            BBox::new(f64::NAN, 7.0, f64::NAN, 2.0),
            BBox::SENTINEL,
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.union(b), b.union(a), "union({a:?}, {b:?})");
            }
        }
    }

    #[test]
    fn bbox_union_is_associative() {
        let a = BBox::new(0.0, 1.0, 0.0, 1.0);
        let b = BBox::new(f64::NAN, 7.0, -4.0, f64::NAN);
        let c = BBox::new(-3.0, 0.5, 2.0, 8.0);
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn bbox_union_field_rules() {
        let a = BBox::new(f64::NAN, 2.0, 1.0, f64::NAN);
        let b = BBox::new(-1.0, f64::NAN, 3.0, f64::NAN);
        let u = a.union(&b);
        assert_eq!(u.x_min, -1.0);
        assert_eq!(u.x_max, 2.0);
        assert_eq!(u.y_min, 1.0);
        assert!(u.y_max.is_nan());
    }

    #[test]
    fn bbox_from_points() {
        let pts = [Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, -1.0)];
        let b = BBox::from_points(&pts);
        assert_eq!(b, BBox::new(-2.0, 4.0, -1.0, 5.0));
        assert!(BBox::from_points(&[]).is_sentinel());
    }

    #[test]
    fn bbox_corners() {
        let b = BBox::new(0.0, 2.0, 1.0, 3.0);
        assert_eq!(
            b.corners(),
            [
                Point::new(0.0, 1.0),
                Point::new(2.0, 1.0),
                Point::new(0.0, 3.0),
                Point::new(2.0, 3.0),
            ]
        );
    }

    // ==================== Margins / ViewBox ====================

    #[test]
    fn margins_defaults() {
        assert_eq!(Margins::default(), Margins::uniform(10.0));
        assert_eq!(Margins::NONE.left, 0.0);
    }

    #[test]
    fn viewbox_formats_one_decimal() {
        let vb = ViewBox {
            min_x: -200.0,
            min_y: -200.0,
            width: 400.0,
            height: 400.0,
        };
        assert_eq!(vb.to_string(), "-200.0 -200.0 400.0 400.0");
    }
}
