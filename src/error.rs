//! Error types for ring navigation.

use crate::host::BufferId;
use thiserror::Error;

/// Failures a ring jump can hit.
#[derive(Debug, Error)]
pub enum NavError {
    /// The recorded buffer no longer exists.
    #[error("buffer {buffer:?} no longer exists")]
    TargetGone { buffer: BufferId },

    /// The recorded offset falls outside the buffer's accessible range
    /// and widening is disabled.
    #[error("offset {offset} outside accessible range {start}..{end}")]
    OutOfRange {
        offset: usize,
        start: usize,
        end: usize,
    },
}
