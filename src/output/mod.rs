//! Terminal output formatting
//!
//! Share text, share destinations and colored display of game state.

pub mod display;
pub mod formatters;
mod share;
mod sink;

pub use display::{print_board, print_hint, print_outcome, print_stats, print_status};
pub use share::{SHARE_TRAILER, WIN_MARK, format_share};
pub use sink::{FileSink, ShareSink, StdoutSink};
