//! Error types with rich diagnostics using miette
//!
//! A missing attribute is never an error (it reads as NaN). These errors cover
//! attribute text that is present but cannot be understood, and composition
//! parameters that make no sense.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Attribute Errors
// ============================================================================

/// Errors raised while reading geometry out of attribute strings
#[derive(Error, Diagnostic, Debug)]
pub enum AttrError {
    #[error("attribute `{key}` is not a number: {value:?}")]
    #[diagnostic(code(svgtree::attr::invalid_number))]
    InvalidNumber { key: String, value: String },

    #[error("invalid path data")]
    #[diagnostic(
        code(svgtree::attr::invalid_path_data),
        help("supported commands are M, L, H, V, C, S, Q, T, A and Z (absolute or relative)")
    )]
    InvalidPathData {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("invalid point list: {value:?}")]
    #[diagnostic(
        code(svgtree::attr::invalid_points),
        help("points are written as `x,y` pairs separated by whitespace")
    )]
    InvalidPoints { value: String },
}

// ============================================================================
// Composition Errors
// ============================================================================

/// Errors raised while merging, tiling or animating documents
#[derive(Error, Diagnostic, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Attr(#[from] AttrError),

    #[error("invalid frame rate: {fps}")]
    #[diagnostic(
        code(svgtree::compose::invalid_frame_rate),
        help("the frame rate must be a finite number greater than zero")
    )]
    InvalidFrameRate { fps: f64 },

    #[error("invalid {name}: {value}")]
    #[diagnostic(
        code(svgtree::compose::invalid_width_limit),
        help("width limits must be finite numbers greater than zero")
    )]
    InvalidWidthLimit { name: &'static str, value: f64 },
}
