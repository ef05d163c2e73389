/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Encoding of native text into the little-endian double-byte string format that the TSS policy-prompt ("popup") subsystem expects.
//!
//! The mapping is a pure zero-extension: each 8-bit input code unit becomes one 16-bit little-endian code unit, followed by one all-zero terminator code unit. No locale-aware transcoding and no multi-byte input interpretation takes place.
//!
//! Note that this format is little-endian while the table records and the envelope header are big-endian. Both byte orders are mandated by the respective wire conventions and are intentionally distinct.

/// Computes the encoded byte length for a native string of `native_len` code units, including the terminator: `2 * (native_len + 1)`.
pub fn encoded_size(native_len: usize) -> usize {
    2usize * (native_len + 1usize)
}

/// Encodes a native 8-bit string into the double-byte popup-string format.
///
/// Each input byte is emitted as its value followed by a zero high-order byte, and one additional all-zero 16-bit terminator is appended. The output length is therefore always `2 * (native.len() + 1)`, even for an empty input (which encodes to exactly two zero bytes).
///
/// This operation is total; there is no failure case.
pub fn encode_unicode(native: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(encoded_size(native.len()));
    for byte in native {
        encoded.push(*byte);
        encoded.push(0u8);
    }
    encoded.push(0u8);
    encoded.push(0u8);
    encoded
}

// ==========================================================================
// Unit tests
// ==========================================================================
