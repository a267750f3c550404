//! Placeholder API outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `PlaceholderSource` port.

mod http_source;

pub use http_source::{PlaceholderHttpSource, PlaceholderHttpSourceError};
