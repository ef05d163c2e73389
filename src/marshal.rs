/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Bounds-checked cursor primitives for the big-endian (network order) wire convention used by the table records and the envelope header.
//!
//! The little-endian string and capability formats do **not** go through these cursors; their byte order differs on purpose and the two conventions must not be unified.

use crate::CodecError;

// ==========================================================================
// WireReader
// ==========================================================================

/// A read cursor over a borrowed byte buffer. All multi-byte getters decode big-endian.
///
/// Every read is bounds-checked; an underflow yields [`CodecError::TruncatedTable`] carrying the offset at which the buffer ran out.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0usize }
    }

    /// The current cursor position, in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes that have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Verify that at least `needed` more bytes are available at the cursor.
    pub fn require(&self, needed: usize) -> Result<(), CodecError> {
        if self.remaining() < needed {
            Err(CodecError::TruncatedTable { offset: self.pos, needed, available: self.remaining() })
        } else {
            Ok(())
        }
    }

    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        self.require(1usize)?;
        let value = self.data[self.pos];
        self.pos += 1usize;
        Ok(value)
    }

    pub fn get_u16(&mut self) -> Result<u16, CodecError> {
        self.require(2usize)?;
        let value = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1usize]]);
        self.pos += 2usize;
        Ok(value)
    }

    pub fn get_u32(&mut self) -> Result<u32, CodecError> {
        self.require(4usize)?;
        let value = u32::from_be_bytes([self.data[self.pos], self.data[self.pos + 1usize], self.data[self.pos + 2usize], self.data[self.pos + 3usize]]);
        self.pos += 4usize;
        Ok(value)
    }

    pub fn get_bytes(&mut self, length: usize) -> Result<&'a [u8], CodecError> {
        self.require(length)?;
        let value = &self.data[self.pos..self.pos + length];
        self.pos += length;
        Ok(value)
    }
}

// ==========================================================================
// WireWriter
// ==========================================================================

/// A write cursor that builds an owned byte buffer. All multi-byte putters encode big-endian.
#[derive(Debug, Default)]
pub struct WireWriter {
    data: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_u32(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================
