//! Operations over one or more CIDR blocks.
//!
//! - [`range`] - address ranges, shared span and overlap detection
//! - [`step`] - named stepping operations (host, subnet, prefix)

mod range;
mod step;

// Re-export public functions
pub use range::{overlapping_pairs, span, AddressRange};
pub use step::{apply_steps, Step};
