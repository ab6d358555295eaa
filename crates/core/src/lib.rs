//! Core library for `cstrip`.
//!
//! Removes `/* ... */` block comments from decoded C source text while
//! leaving string and character literals untouched. The main entry points
//! are [`strip_block_comments`] for the bare transformation and [`convert`]
//! for the full text pipeline the CLI runs (strip, then normalize line
//! endings).

#![warn(missing_docs)]

/// CR+LF to LF normalization.
pub mod line_endings;
/// Segment scanner and comment stripper.
pub mod scan;
/// C scalar type-name table.
pub mod types;

use std::borrow::Cow;

use log::debug;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use line_endings::normalize_line_endings;
pub use scan::{Quote, Segment, SegmentKind, Segments, segments, strip_block_comments};
pub use types::{ScalarType, c_type_name};

// ── Conversion pipeline ─────────────────────────────────────────────────────

/// Options for [`convert`].
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Replace CR+LF with LF after stripping. Defaults to `true`.
    pub normalize_line_endings: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
        }
    }
}

/// Counters gathered while converting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of block comments removed, unterminated ones included.
    pub comments_removed: usize,
    /// Bytes of comment text removed.
    pub comment_bytes: usize,
    /// Bytes dropped by CR+LF normalization.
    pub crlf_collapsed: usize,
}

/// Result of [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Transformed text.
    pub text: String,
    /// What the conversion did.
    pub stats: ConvertStats,
}

/// Strip block comments from `input`, then apply `options`.
pub fn convert(input: &str, options: &ConvertOptions) -> Converted {
    let mut stats = ConvertStats::default();
    let mut text = String::with_capacity(input.len());

    for seg in segments(input) {
        if seg.kind.is_kept() {
            text.push_str(seg.text(input));
        } else {
            stats.comments_removed += 1;
            stats.comment_bytes += seg.range.len();
        }
    }

    if options.normalize_line_endings {
        let before = text.len();
        let normalized = match normalize_line_endings(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = normalized {
            text = s;
        }
        stats.crlf_collapsed = before - text.len();
    }

    debug!(
        "converted {} -> {} bytes ({} comments, {} comment bytes, {} CRs collapsed)",
        input.len(),
        text.len(),
        stats.comments_removed,
        stats.comment_bytes,
        stats.crlf_collapsed
    );

    Converted { text, stats }
}
