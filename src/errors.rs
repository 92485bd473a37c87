//! Error types with rich diagnostics using miette
//!
//! Render and layout errors are plain data; chart parse errors carry the
//! JSON source and a span so reports can point at the offending input.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Render Errors
// ============================================================================

/// Fatal conditions that abort a render before any scene is produced
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("malformed house set: expected 12 house cusps, got {count}")]
    #[diagnostic(
        code(mandala::render::malformed_house_set),
        help("a chart wheel is divided into exactly 12 houses; check the calculation service response")
    )]
    MalformedHouseSet { count: usize },

    #[error("non-finite degree for {subject}: {reason}")]
    #[diagnostic(
        code(mandala::render::non_finite_degree),
        help("positions must be finite numbers of degrees")
    )]
    NonFiniteDegree {
        subject: String,
        reason: NumericError,
    },
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors raised while validating a ring layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid {what}: {reason}")]
    #[diagnostic(code(mandala::layout::invalid_value))]
    InvalidValue {
        what: &'static str,
        reason: NumericError,
    },

    #[error("ring radii out of order: zodiac {zodiac} > house {house} > planet {planet} must hold")]
    #[diagnostic(
        code(mandala::layout::radii_out_of_order),
        help("concentric rings overlap unless zodiac > house > planet > 0")
    )]
    RadiiOutOfOrder { zodiac: f64, house: f64, planet: f64 },

    #[error("outer boundary radius {outer} is smaller than the zodiac radius {zodiac}")]
    #[diagnostic(code(mandala::layout::outer_inside_zodiac))]
    OuterInsideZodiac { outer: f64, zodiac: f64 },
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while reading chart JSON
#[derive(Error, Diagnostic, Debug)]
pub enum ChartParseError {
    #[error("invalid chart JSON: {message}")]
    #[diagnostic(code(mandala::parse::invalid_json))]
    InvalidJson {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl ChartParseError {
    /// Build a diagnostic from a serde_json error, translating its
    /// line/column into a byte offset in `source`.
    pub(crate) fn from_json(name: &str, source: &str, err: serde_json::Error) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        ChartParseError::InvalidJson {
            message: err.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((offset, 0)),
        }
    }
}

/// serde_json reports 1-based lines and columns; column 0 means "before the
/// first character of the line".
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let within = column.saturating_sub(1).min(text.len());
            return offset + within;
        }
        offset += text.len();
    }
    source.len()
}
