//! # Strategy Registry
//!
//! Runtime selection of response strategies. Selection is a lookup keyed by
//! destination identifier and endpoint over a fixed set of variants.

pub mod destination;

pub use destination::Destination;
