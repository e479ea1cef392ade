//! Document stylesheet: CSS rules and `@keyframes` blocks.

use std::collections::BTreeMap;

use crate::attrs::Attributes;

/// One `@keyframes` block: breakpoints in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyframes {
    stops: Vec<(String, Attributes)>,
}

impl Keyframes {
    /// Declarations at a breakpoint such as `"50.0%"`, created on first use
    pub fn stop(&mut self, offset: impl Into<String>) -> &mut Attributes {
        let offset = offset.into();
        let index = match self.stops.iter().position(|(o, _)| *o == offset) {
            Some(index) => index,
            None => {
                self.stops.push((offset, Attributes::new()));
                self.stops.len() - 1
            }
        };
        &mut self.stops[index].1
    }

    pub fn stops(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.stops.iter().map(|(o, a)| (o.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Contents of a `<style>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: BTreeMap<String, Attributes>,
    keyframes: BTreeMap<String, Keyframes>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations for a selector, created on first use
    pub fn rule(&mut self, selector: impl Into<String>) -> &mut Attributes {
        self.rules.entry(selector.into()).or_default()
    }

    /// Named `@keyframes` block, created on first use
    pub fn keyframes(&mut self, name: impl Into<String>) -> &mut Keyframes {
        self.keyframes.entry(name.into()).or_default()
    }

    pub fn get_rule(&self, selector: &str) -> Option<&Attributes> {
        self.rules.get(selector)
    }

    pub fn get_keyframes(&self, name: &str) -> Option<&Keyframes> {
        self.keyframes.get(name)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.rules.iter().map(|(s, a)| (s.as_str(), a))
    }

    pub fn all_keyframes(&self) -> impl Iterator<Item = (&str, &Keyframes)> {
        self.keyframes.iter().map(|(n, k)| (n.as_str(), k))
    }
}
