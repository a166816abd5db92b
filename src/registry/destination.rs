//! # Destination Lookup
//!
//! Maps a destination identifier plus the endpoint that was called onto the
//! response strategy that understands its responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::batching::BatchOptions;
use crate::constants::iterable;
use crate::error::ReconcilerError;
use crate::strategy::{GenericStrategy, ResponseStrategyKind, TrackIdentifyStrategy};

/// Destinations with a response strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Destination {
    Iterable,
}

impl Destination {
    pub const ALL: &'static [Destination] = &[Destination::Iterable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Iterable => iterable::DESTINATION_ID,
        }
    }

    /// Strategy for a call to `endpoint` on this destination
    pub fn strategy_for(&self, endpoint: &str, batch_options: BatchOptions) -> ResponseStrategyKind {
        match self {
            Destination::Iterable => {
                let path = endpoint.split(['?', '#']).next().unwrap_or(endpoint);
                let is_bulk = iterable::BULK_ENDPOINT_SUFFIXES
                    .iter()
                    .any(|suffix| path.trim_end_matches('/').ends_with(suffix));

                if is_bulk {
                    ResponseStrategyKind::IterableTrackIdentify(TrackIdentifyStrategy::new(
                        batch_options,
                    ))
                } else {
                    ResponseStrategyKind::IterableGeneric(GenericStrategy)
                }
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ReconcilerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .iter()
            .copied()
            .find(|destination| destination.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReconcilerError::UnsupportedDestination(s.to_string()))
    }
}
