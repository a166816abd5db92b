//! # Batched Iteration
//!
//! Walks an ordered slice in contiguous chunks, handing each item to a callback
//! together with its absolute position in the full slice. Chunking only bounds
//! how much work happens per slice; the observable sequence of callbacks is the
//! same as a plain in-order loop.
//!
//! ```rust
//! use delivery_reconciler::batching::{for_each_in_batches, BatchOptions};
//!
//! let items = vec!["a", "b", "c", "d", "e"];
//! let mut seen = Vec::new();
//! for_each_in_batches(&items, |item, index| seen.push((index, *item)), BatchOptions::new(2));
//!
//! assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c"), (3, "d"), (4, "e")]);
//! ```

use std::convert::Infallible;
use std::num::NonZeroUsize;

use crate::constants::DEFAULT_BATCH_SIZE;

/// Chunking options for [`for_each_in_batches`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub batch_size: NonZeroUsize,
}

impl BatchOptions {
    /// Build options from a raw size; `0` is clamped to `1` so no item is ever skipped
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: NonZeroUsize::new(batch_size).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

/// Invoke `f(item, absolute_index)` for every item, chunk by chunk
pub fn for_each_in_batches<T, F>(items: &[T], mut f: F, options: BatchOptions)
where
    F: FnMut(&T, usize),
{
    let result = try_for_each_in_batches(
        items,
        |item, index| {
            f(item, index);
            Ok::<(), Infallible>(())
        },
        options,
    );

    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible variant: the first `Err` stops iteration and is returned as-is
pub fn try_for_each_in_batches<T, E, F>(items: &[T], mut f: F, options: BatchOptions) -> Result<(), E>
where
    F: FnMut(&T, usize) -> Result<(), E>,
{
    let batch_size = options.batch_size.get();

    for (chunk_index, chunk) in items.chunks(batch_size).enumerate() {
        let offset = chunk_index * batch_size;
        tracing::trace!(
            chunk_index = chunk_index,
            chunk_len = chunk.len(),
            offset = offset,
            "Processing batch chunk"
        );

        for (local_index, item) in chunk.iter().enumerate() {
            f(item, offset + local_index)?;
        }
    }

    Ok(())
}
