//! ledmock — preview addressable LED strip patterns in a true-color terminal.

pub mod config;
pub mod driver;
pub mod error;
pub mod led;
pub mod pattern;
pub mod strip;
pub mod term;

pub use error::LedmockError;
