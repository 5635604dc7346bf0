//! Common utilities for the tincture workspace.
//!
//! This crate provides shared infrastructure used by the color core and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for lossy or
//!   ignored input

pub mod warning;
