/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Decoding of capability-query responses whose scalar width is not fixed.
//!
//! Different TPM firmware revisions legitimately return the *same* logical capability as either a single boolean-like byte or a 4-byte unsigned word. The response length is the only discriminator; a conforming caller must never assume one fixed width for a given capability identifier.

use crate::CodecError;
use log::{debug, trace};

/// A scalar capability value, disambiguated solely by the response length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CapabilityValue {
    /// A single-byte truthy/falsy response.
    Bool(bool),
    /// A 4-byte unsigned word response (little-endian on the wire, as delivered by the TSS boundary).
    Word(u32),
}

impl CapabilityValue {
    /// Decodes a raw capability response.
    ///
    /// A 1-byte response yields [`Bool`](Self::Bool), a 4-byte response yields [`Word`](Self::Word); any other length fails with [`CodecError::UnsupportedValueWidth`].
    pub fn decode(raw: &[u8]) -> Result<Self, CodecError> {
        trace!("Decoding capability response of {} byte(s)", raw.len());
        match raw.len() {
            1usize => Ok(Self::Bool(raw[0] != 0u8)),
            4usize => Ok(Self::Word(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))),
            length => {
                debug!("Capability response width {} is neither 1 nor 4, rejecting!", length);
                Err(CodecError::UnsupportedValueWidth { length })
            }
        }
    }

    /// The boolean view of this value, or `None` if it was returned as a word.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(value) => Some(value),
            Self::Word(_) => None,
        }
    }

    /// The word view of this value, or `None` if it was returned as a boolean.
    pub fn as_word(&self) -> Option<u32> {
        match *self {
            Self::Bool(_) => None,
            Self::Word(value) => Some(value),
        }
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================
