/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use std::{error::Error, fmt::Display};

/// The error type shared by all codec operations in this crate.
///
/// Every variant describes a local, recoverable condition. A failed decode or encode produces **no** partial output, and the crate never retries internally; retry policy, if any, belongs to the caller that issued the underlying TSS command.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodecError {
    /// A capability response had a length other than 1 or 4 bytes, so its scalar width cannot be inferred.
    UnsupportedValueWidth { length: usize },
    /// A table buffer ended before the record at `offset` could be read in full.
    TruncatedTable { offset: usize, needed: usize, available: usize },
    /// The declared entry count does not account for the table buffer exactly.
    EntryCountMismatch { entry_count: u32, entry_size: usize, actual_len: usize },
    /// The output buffer supplied to an envelope `fill()` does not have the measured size.
    BufferTooSmall { required: usize, provided: usize },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::UnsupportedValueWidth { length } => write!(f, "unsupported capability value width: {} byte(s)", length),
            Self::TruncatedTable { offset, needed, available } => {
                write!(f, "table truncated at offset {}: {} byte(s) needed, {} available", offset, needed, available)
            }
            Self::EntryCountMismatch { entry_count, entry_size, actual_len } => {
                write!(f, "entry count mismatch: {} entries of {} byte(s) declared, but table holds {} byte(s)", entry_count, entry_size, actual_len)
            }
            Self::BufferTooSmall { required, provided } => write!(f, "output buffer holds {} byte(s), envelope requires exactly {}", provided, required),
        }
    }
}

impl Error for CodecError {}

// ==========================================================================
// Unit tests
// ==========================================================================
