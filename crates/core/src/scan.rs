//! Block-comment scanner.
//!
//! Walks decoded C source text and classifies it into contiguous
//! [`Segment`]s: plain code runs, string/char literals, and `/* ... */`
//! block comments. [`strip_block_comments`] keeps everything except the
//! comments.
//!
//! Only `/*` ... `*/` comments are recognized. Comments do not nest, and
//! comment-like text inside `"..."` or `'...'` literals is left alone.
//! Unterminated comments and literals run to end of input without error.

use std::ops::Range;

/// Quote character that opened a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"..."` string literal.
    Double,
    /// `'...'` character literal.
    Single,
}

impl Quote {
    /// The delimiter character.
    pub const fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

/// Classification of a scanned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Text outside comments and literals.
    Code,
    /// A quoted literal, delimiters and escapes included.
    Literal {
        /// Opening (and closing, if present) delimiter.
        quote: Quote,
        /// `false` when input ended before the closing delimiter.
        terminated: bool,
    },
    /// A `/* ... */` comment, delimiters included.
    BlockComment {
        /// `false` when input ended before `*/`.
        terminated: bool,
    },
}

impl SegmentKind {
    /// Whether the segment is copied to the stripped output.
    pub const fn is_kept(self) -> bool {
        !matches!(self, SegmentKind::BlockComment { .. })
    }
}

/// A classified byte range of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// What the range holds.
    pub kind: SegmentKind,
    /// Byte range into the scanned input. Always on `char` boundaries.
    pub range: Range<usize>,
}

impl Segment {
    /// The text of this segment within `input`.
    ///
    /// `input` must be the string the segment was scanned from.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.range.clone()]
    }
}

/// Iterator over the [`Segment`]s of a string. Created by [`segments`].
///
/// Segments are contiguous: the first starts at 0, each one starts where the
/// previous one ended, and the last ends at `input.len()`.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

/// Scan `input` into segments.
pub fn segments(input: &str) -> Segments<'_> {
    Segments { input, pos: 0 }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        let (kind, end) = match bytes[start] {
            b'/' if bytes.get(start + 1) == Some(&b'*') => scan_block_comment(bytes, start),
            b'"' => scan_literal(self.input, start, Quote::Double),
            b'\'' => scan_literal(self.input, start, Quote::Single),
            _ => (SegmentKind::Code, scan_code_run(bytes, start)),
        };

        debug_assert!(end > start, "scanner must always advance");
        self.pos = end;
        Some(Segment {
            kind,
            range: start..end,
        })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Remove every `/* ... */` comment from `input`.
///
/// String and character literals are copied verbatim, so `"/* x */"` is
/// kept. Removed comments are not replaced by anything: `a/**/b` becomes
/// `ab`. Never fails; malformed input degrades as described in the module
/// docs.
#[must_use]
pub fn strip_block_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for seg in segments(input).filter(|s| s.kind.is_kept()) {
        out.push_str(seg.text(input));
    }
    out
}

/// Bytes that end a default run: comment and literal openers, plus `\`.
const fn is_run_stop(b: u8) -> bool {
    matches!(b, b'/' | b'"' | b'\'' | b'\\')
}

/// End of a code run starting at `start`. The first character is always
/// taken, even when it is a stop byte (a lone `/`, or a `\` outside a
/// literal).
fn scan_code_run(bytes: &[u8], start: usize) -> usize {
    // Stop bytes are ASCII, so they never split a multi-byte char.
    bytes[start + 1..]
        .iter()
        .position(|&b| is_run_stop(b))
        .map_or(bytes.len(), |n| start + 1 + n)
}

fn scan_block_comment(bytes: &[u8], start: usize) -> (SegmentKind, usize) {
    let body = start + 2;
    match bytes[body..].windows(2).position(|w| w == b"*/") {
        Some(n) => (SegmentKind::BlockComment { terminated: true }, body + n + 2),
        None => (SegmentKind::BlockComment { terminated: false }, bytes.len()),
    }
}

fn scan_literal(input: &str, start: usize, quote: Quote) -> (SegmentKind, usize) {
    let bytes = input.as_bytes();
    let delim = quote.as_byte();
    let mut i = start + 1;

    while i < bytes.len() {
        match bytes[i] {
            b if b == delim => {
                let kind = SegmentKind::Literal {
                    quote,
                    terminated: true,
                };
                return (kind, i + 1);
            }
            b'\\' => {
                // Escape takes exactly one following char, whatever it is.
                let escaped = input[i + 1..].chars().next().map_or(0, char::len_utf8);
                i += 1 + escaped;
            }
            _ => i += 1,
        }
    }

    let kind = SegmentKind::Literal {
        quote,
        terminated: false,
    };
    (kind, bytes.len())
}
