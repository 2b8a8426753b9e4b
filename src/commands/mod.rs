//! Command implementations

pub mod audit;
pub mod hint;
pub mod share;
pub mod silhouette;
pub mod simple;

pub use audit::{AuditReport, PickCount, print_audit_report, run_audit};
pub use hint::{HintKind, HintResult, take_hint};
pub use share::share_result;
pub use silhouette::render_silhouette;
pub use simple::run_simple;
