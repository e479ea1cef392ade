//! Combining finished documents: side by side, in a grid, or as animation
//! frames.
//!
//! Every operation consumes its input documents and returns a new root that
//! owns them as nested `<svg>` children.

use crate::attrs::format_num;
use crate::defaults::{ANIMATION_CLASS, FRAME_ID_PREFIX, KEYFRAME_SUFFIX};
use crate::document::Document;
use crate::errors::{AttrError, ComposeError};
use crate::log::{debug, warn};
use crate::tree::Node;
use crate::types::{Margins, ViewBox};

/// Place `left` and `right` next to each other.
///
/// Each side is autoscaled with [`Margins::DEFAULT`]. The result is as wide
/// as both sides together and as tall as the taller one.
pub fn merge(left: Document, right: Document) -> Result<Document, AttrError> {
    merge_with(left, right, Margins::DEFAULT)
}

/// [`merge`] with each side autoscaled to `margins` instead
pub fn merge_with(
    left: Document,
    right: Document,
    margins: Margins,
) -> Result<Document, AttrError> {
    let mut out = Document::new();
    let mut x = 0.0;
    let mut height: f64 = 0.0;

    for mut side in [left, right] {
        side.autoscale(margins)?;
        side.move_to(x, 0.0);
        x += side.width()?;
        height = height.max(side.height()?);
        out.push(side.into_node());
    }

    debug!(width = x, height, "merged documents");
    out.set_num("width", x).set_num("height", height);
    Ok(out)
}

/// Width limits for [`merge_grid`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    /// A row wraps once the next frame would push it past this width
    pub max_width: f64,
    /// Wider frames are scaled down, keeping their aspect ratio
    pub max_frame_width: f64,
}

impl GridOptions {
    pub fn new(max_width: f64, max_frame_width: f64) -> Self {
        GridOptions {
            max_width,
            max_frame_width,
        }
    }

    fn validate(&self) -> Result<(), ComposeError> {
        for (name, value) in [
            ("max_width", self.max_width),
            ("max_frame_width", self.max_frame_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ComposeError::InvalidWidthLimit { name, value });
            }
        }
        Ok(())
    }
}

/// Tile `frames` left to right, wrapping into rows no wider than
/// `options.max_width`.
///
/// A row is as tall as its tallest frame and the result is exactly as large
/// as the rows it holds.
pub fn merge_grid(frames: Vec<Document>, options: GridOptions) -> Result<Document, ComposeError> {
    options.validate()?;

    let mut out = Document::new();
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f64 = 0.0;
    let mut total_width: f64 = 0.0;

    for mut frame in frames {
        frame.autoscale(Margins::DEFAULT)?;
        let (mut width, mut height) = (frame.width()?, frame.height()?);

        if width > options.max_frame_width {
            let scale = options.max_frame_width / width;
            debug!(width, scale, "downscaling frame");
            if !frame.attrs().contains("viewBox") {
                let view_box = ViewBox {
                    min_x: 0.0,
                    min_y: 0.0,
                    width,
                    height,
                };
                frame.set_str("viewBox", view_box.to_string());
            }
            frame
                .set_num("width", width * scale)
                .set_num("height", height * scale);
            (width, height) = (frame.width()?, frame.height()?);
        }

        if width > options.max_width {
            warn!(width, max_width = options.max_width, "frame is wider than a row");
        }

        // A row always takes at least one frame
        if x > 0.0 && x + width > options.max_width {
            debug!(y, row_height, "wrapping to a new row");
            y += row_height;
            x = 0.0;
            row_height = 0.0;
        }

        frame.move_to(x, y);
        x += width;
        row_height = row_height.max(height);
        total_width = total_width.max(x);
        out.push(frame.into_node());
    }

    let total_height = y + row_height;
    let view_box = ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: total_width,
        height: total_height,
    };
    out.set_str("viewBox", view_box.to_string())
        .set_num("width", total_width)
        .set_num("height", total_height);
    Ok(out)
}

/// Stack `frames` on top of each other and show one at a time, looping
/// forever at `fps` frames per second.
///
/// Frame `i` gets id `frame_<i>` and a keyframe block `frame_<i>_anim` that
/// makes it visible from `i / n` to `(i + 1) / n` of the cycle. Frames are
/// centered within the largest frame size.
pub fn animate(frames: Vec<Document>, fps: f64) -> Result<Document, ComposeError> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(ComposeError::InvalidFrameRate { fps });
    }

    let mut out = Document::new();
    if frames.is_empty() {
        out.set_num("width", 0.0).set_num("height", 0.0);
        return Ok(out);
    }

    let count = frames.len();
    let duration = count as f64 / fps;

    let mut sized = Vec::with_capacity(count);
    let (mut max_width, mut max_height): (f64, f64) = (0.0, 0.0);
    for mut frame in frames {
        frame.autoscale(Margins::DEFAULT)?;
        let (width, height) = (frame.width()?, frame.height()?);
        max_width = max_width.max(width);
        max_height = max_height.max(height);
        sized.push((frame, width, height));
    }

    let mut container = Node::group();
    for (i, (mut frame, width, height)) in sized.into_iter().enumerate() {
        let id = format!("{FRAME_ID_PREFIX}{i}");
        let name = format!("{id}{KEYFRAME_SUFFIX}");
        let start = i as f64 / count as f64 * 100.0;
        let end = (i + 1) as f64 / count as f64 * 100.0;

        let offset_x = (max_width - width) / 2.0;
        let offset_y = (max_height - height) / 2.0;
        debug!(frame = i, offset_x, offset_y, start, end, "placing frame");

        frame
            .set_str("id", id.as_str())
            .set_str("class", ANIMATION_CLASS)
            .move_to(offset_x, offset_y);

        let keyframes = out.keyframes(name.as_str());
        keyframes
            .stop(format!("{}%", format_num(start)))
            .set_str("opacity", "1");
        keyframes
            .stop(format!("{}%", format_num(end)))
            .set_str("opacity", "0");
        out.style(format!("#{id}")).set_str("animation-name", name);

        container.push(frame.into_node());
    }

    out.style(format!("svg.{ANIMATION_CLASS}"))
        .set_str("animation-iteration-count", "infinite")
        .set_str("animation-timing-function", "step-end")
        .set_str("animation-duration", format!("{}s", format_num(duration)))
        .set_str("opacity", "0");

    out.push(container);
    out.set_num("width", max_width).set_num("height", max_height);
    Ok(out)
}
