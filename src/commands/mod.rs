//! CLI command implementations.
//!
//! - **strip**: rewrite every eligible file under the root without diacritics

pub mod strip;

pub use strip::{handle_strip, run_strip};
