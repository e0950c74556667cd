//! Context analysis modules
//!
//! - `utils`: cursor clamping, line location and token helpers
//! - `analyzer`: line classification with bounded caches

mod analyzer;
mod utils;

pub use analyzer::ContextAnalyzer;
pub use utils::{
    clamp_cursor, first_token, is_comment, is_prefix_candidate, line_number_at, locate_line,
    LineSpan,
    COMMENT_MARKER, LINE_COMMENT_MARKER,
};
