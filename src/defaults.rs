//! Default sizes and settings

/// Namespace written on every document root
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Padding applied on each side by a plain `autoscale()`
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Digits after the decimal point when a number is written into an attribute
pub const DECIMAL_PLACES: usize = 1;

/// Prefix of the id given to each animation frame (`frame_0`, `frame_1`, ...)
pub const FRAME_ID_PREFIX: &str = "frame_";

/// Suffix of the keyframe block driving a frame (`frame_0_anim`)
pub const KEYFRAME_SUFFIX: &str = "_anim";

/// Class shared by every animation frame
pub const ANIMATION_CLASS: &str = "animation";
