//! Output formatting for CIDR summaries.
//!
//! - [`summary`] - labeled rows per CIDR block
//! - [`terminal`] - colored terminal output
//! - [`json`] - JSON output

mod json;
mod summary;
mod terminal;

pub use json::render_json;
pub use summary::{summary, CidrReport, SummaryRow};
pub use terminal::{color_parts, format_field, render_ranges, render_report};
