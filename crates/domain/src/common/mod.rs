//! Common utility functions shared by the data and app crates.
//!
//! Pure functions only: no I/O, no allocation beyond the returned values.

pub mod string;

pub use string::{capitalize, normalize_whitespace, title_case_slug};
