//! Command-line interface for ghfeed.

pub mod args;

pub use args::{Cli, VERSION};
