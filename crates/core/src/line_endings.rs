//! Line-ending normalization.

use std::borrow::Cow;

/// Replace every CR+LF pair with a single LF.
///
/// A lone CR is left as is. Returns the input borrowed when it holds no
/// CR+LF pair.
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if input.contains("\r\n") {
        Cow::Owned(input.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
