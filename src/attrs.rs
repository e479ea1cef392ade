//! String-keyed attribute storage.
//!
//! Every value is kept as the string that will be written out. Numbers go
//! through [`format_num`] so geometry written back into a document always has
//! exactly one decimal digit.

use std::collections::BTreeMap;

use crate::defaults::DECIMAL_PLACES;
use crate::errors::AttrError;
use crate::types::Point;

/// Format a number with exactly one decimal place (`3.14159` -> `"3.1"`)
pub fn format_num(value: f64) -> String {
    format!("{:.*}", DECIMAL_PLACES, value)
}

/// Format a point as `x,y`
pub fn format_point(point: Point) -> String {
    format!("{},{}", format_num(point.x), format_num(point.y))
}

/// Attribute dictionary of a single element. Iteration is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a number, formatted with one decimal place
    pub fn set_num(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.map.insert(key.into(), format_num(value));
        self
    }

    /// Store a string verbatim
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.remove(key)
    }

    /// Read a numeric attribute.
    ///
    /// A missing key reads as NaN. A present but unparsable value is an error.
    pub fn numeric(&self, key: &str) -> Result<f64, AttrError> {
        match self.map.get(key) {
            None => Ok(f64::NAN),
            Some(value) => value.trim().parse().map_err(|_| AttrError::InvalidNumber {
                key: key.to_string(),
                value: value.clone(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_num_keeps_one_decimal() {
        assert_eq!(format_num(std::f64::consts::PI), "3.1");
        assert_eq!(format_num(400.0), "400.0");
        assert_eq!(format_num(-200.0), "-200.0");
        assert_eq!(format_num(2.96), "3.0");
    }

    #[test]
    fn format_point_joins_with_comma() {
        assert_eq!(format_point(Point::new(1.0, -2.5)), "1.0,-2.5");
    }

    #[test]
    fn set_num_formats() {
        let mut attrs = Attributes::new();
        attrs.set_num("r", 12.345).set_str("fill", "red");
        assert_eq!(attrs.get("r"), Some("12.3"));
        assert_eq!(attrs.get("fill"), Some("red"));
    }

    #[test]
    fn missing_numeric_is_nan() {
        let attrs = Attributes::new();
        assert!(attrs.numeric("x").unwrap().is_nan());
    }

    #[test]
    fn numeric_parses_with_whitespace() {
        let attrs: Attributes = [("x", " 42.5 ")].into_iter().collect();
        assert_eq!(attrs.numeric("x").unwrap(), 42.5);
    }

    #[test]
    fn unparsable_numeric_is_an_error() {
        let attrs: Attributes = [("width", "wide")].into_iter().collect();
        let err = attrs.numeric("width").unwrap_err();
        assert!(matches!(err, AttrError::InvalidNumber { ref key, .. } if key == "width"));
    }

    #[test]
    fn iteration_is_sorted() {
        let attrs: Attributes = [("y2", "1"), ("cx", "2"), ("r", "3")].into_iter().collect();
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["cx", "r", "y2"]);
    }
}
