//! batcher.rs
//! Accumulates token records into numbered batches.
//!
//! State machine:
//! - `push` inserts into the open batch; when `batch_size` is set and reached,
//!   the batch is moved out as a `FlushedBatch` and a fresh one opened.
//! - `finish` consumes the batcher. It emits the open batch when it is
//!   non-empty, or unconditionally in unbounded mode (so an empty run still
//!   yields one empty batch there).

use std::num::NonZeroUsize;

use crate::types::{Batch, FlushedBatch, PrepareError, TokenRecord};

#[derive(Debug)]
pub struct Batcher {
    batch_size: Option<NonZeroUsize>,
    open: Batch,
    next_index: u64,
}

impl Batcher {
    pub fn new(batch_size: Option<NonZeroUsize>) -> Self {
        Self {
            batch_size,
            open: Batch::new(),
            next_index: 0,
        }
    }

    #[inline]
    pub fn batch_size(&self) -> Option<NonZeroUsize> {
        self.batch_size
    }

    /// Records waiting in the open batch.
    #[inline]
    pub fn pending(&self) -> usize {
        self.open.len()
    }

    /// Index the next flushed batch will carry.
    #[inline]
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Add one record; returns the batch if this record filled it.
    pub fn push(
        &mut self,
        token_id: String,
        record: TokenRecord,
    ) -> Result<Option<FlushedBatch>, PrepareError> {
        self.open.insert(token_id, record)?;

        match self.batch_size {
            Some(size) if self.open.len() == size.get() => Ok(Some(self.take())),
            _ => Ok(None),
        }
    }

    /// End of input.
    pub fn finish(mut self) -> Option<FlushedBatch> {
        if self.batch_size.is_none() || !self.open.is_empty() {
            Some(self.take())
        } else {
            None
        }
    }

    fn take(&mut self) -> FlushedBatch {
        let batch = std::mem::take(&mut self.open);
        let index = self.next_index;
        self.next_index += 1;
        FlushedBatch { index, batch }
    }
}
