//! Math notation normalization for display.
//!
//! The backend answers in LaTeX bracket notation (`\[ ... \]` for block
//! equations, `\( ... \)` inline); the renderer wants dollar delimiters.
//! Applied exactly once per turn, on the raw prompt and on the raw answer,
//! before the text is stored in the transcript.
//!
//! Known limitation: literal `$` already present in the input is not
//! escaped, so pre-dollared text can end up with mixed delimiters.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

static DISPLAY_DELIMS: OnceLock<Regex> = OnceLock::new();
static INLINE_DELIMS: OnceLock<Regex> = OnceLock::new();

/// Replace LaTeX math delimiters with dollar-delimited equivalents:
/// every `\[` or `\]` becomes `$$`, every `\(` or `\)` becomes `$`.
/// Text without delimiters is returned unchanged.
pub fn normalize(text: &str) -> String {
    let display = DISPLAY_DELIMS.get_or_init(|| Regex::new(r"\\\[|\\\]").expect("valid pattern"));
    let inline = INLINE_DELIMS.get_or_init(|| Regex::new(r"\\\(|\\\)").expect("valid pattern"));

    // NoExpand: the replacement is literal text, not a capture template.
    let out = display.replace_all(text, NoExpand("$$"));
    inline.replace_all(&out, NoExpand("$")).into_owned()
}
