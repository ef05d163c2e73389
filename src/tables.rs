/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Decoding of the delegation *family table* and *delegation table* records that the TPM returns packed contiguously in a flat byte buffer.
//!
//! The record layouts are specification-fixed and **not** self-describing: neither a per-record tag nor an inline entry count is present on the wire. The entry count is supplied by the caller out of band, from the separate length field of the read-tables response. All multi-byte fields are big-endian, per the module wire convention.
//!
//! Entry order is semantically meaningful. The records correspond to the TPM's internal enumeration order, and a caller typically drives one follow-up action per decoded entry (e.g. one family invalidation per [`FamilyTableEntry`]); the decoder itself performs no such action.

use crate::{
    CodecError,
    marshal::{WireReader, WireWriter},
};
use log::{debug, trace};

/* Family flag bits */
const FAMFLAG_ENABLED: u32 = 0x00000001;
const FAMFLAG_ADMIN_LOCK: u32 = 0x00000002;

// ==========================================================================
// TableEntry trait
// ==========================================================================

/// A fixed-size record that can be read from, and written to, its big-endian wire layout.
pub trait TableEntry: Sized {
    /// The fixed wire size of one record, in bytes.
    const WIRE_SIZE: usize;

    /// Parses one record at the reader's cursor, advancing it by exactly [`WIRE_SIZE`](Self::WIRE_SIZE) bytes.
    fn unmarshal(reader: &mut WireReader) -> Result<Self, CodecError>;

    /// Appends this record's wire layout to the writer.
    fn marshal(&self, writer: &mut WireWriter);

    /// Parses one record from a standalone buffer. Fails with [`CodecError::TruncatedTable`] if the buffer is too short.
    fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        Self::unmarshal(&mut WireReader::new(raw))
    }

    /// Serializes this record into an owned, exactly-sized buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(Self::WIRE_SIZE);
        self.marshal(&mut writer);
        writer.into_vec()
    }
}

// ==========================================================================
// Family table
// ==========================================================================

/// One row of the delegation family table.
///
/// The family identifier is the value a caller feeds back into the per-family maintenance commands (e.g. family invalidation).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FamilyTableEntry {
    pub family_id: u32,
    pub label: u8,
    pub verification_count: u32,
    pub flags: u32,
}

impl FamilyTableEntry {
    /// Whether the family's enable bit is set.
    pub fn enabled(&self) -> bool {
        self.flags & FAMFLAG_ENABLED != 0u32
    }

    /// Whether the family's delegation-admin lock bit is set.
    pub fn locked(&self) -> bool {
        self.flags & FAMFLAG_ADMIN_LOCK != 0u32
    }
}

impl TableEntry for FamilyTableEntry {
    const WIRE_SIZE: usize = 13;

    fn unmarshal(reader: &mut WireReader) -> Result<Self, CodecError> {
        Ok(Self {
            family_id: reader.get_u32()?,
            label: reader.get_u8()?,
            verification_count: reader.get_u32()?,
            flags: reader.get_u32()?,
        })
    }

    fn marshal(&self, writer: &mut WireWriter) {
        writer.put_u32(self.family_id);
        writer.put_u8(self.label);
        writer.put_u32(self.verification_count);
        writer.put_u32(self.flags);
    }
}

// ==========================================================================
// Delegation table
// ==========================================================================

/// One row of the delegation table.
///
/// `index` is the TPM-assigned row index; the two permission words carry the delegated ordinal bits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DelegationTableEntry {
    pub index: u32,
    pub label: u8,
    pub family_id: u32,
    pub verification_count: u32,
    pub permission1: u32,
    pub permission2: u32,
}

impl TableEntry for DelegationTableEntry {
    const WIRE_SIZE: usize = 21;

    fn unmarshal(reader: &mut WireReader) -> Result<Self, CodecError> {
        Ok(Self {
            index: reader.get_u32()?,
            label: reader.get_u8()?,
            family_id: reader.get_u32()?,
            verification_count: reader.get_u32()?,
            permission1: reader.get_u32()?,
            permission2: reader.get_u32()?,
        })
    }

    fn marshal(&self, writer: &mut WireWriter) {
        writer.put_u32(self.index);
        writer.put_u8(self.label);
        writer.put_u32(self.family_id);
        writer.put_u32(self.verification_count);
        writer.put_u32(self.permission1);
        writer.put_u32(self.permission2);
    }
}

// ==========================================================================
// Table decode/encode
// ==========================================================================

/// Decodes `entry_count` packed records of type `T` from a flat buffer, preserving input order.
///
/// The buffer must be accounted for exactly: `entry_count * T::WIRE_SIZE == raw.len()` is verified up front and a violation fails with [`CodecError::EntryCountMismatch`], so a lying count is distinguishable from a short buffer ([`CodecError::TruncatedTable`], raised by the cursor if a record read would overrun). No partial result is ever returned.
pub fn decode_table<T: TableEntry>(raw: &[u8], entry_count: u32) -> Result<Vec<T>, CodecError> {
    trace!("Decoding table: {} entries of {} byte(s) from a {} byte buffer", entry_count, T::WIRE_SIZE, raw.len());

    let expected_len = (entry_count as usize).checked_mul(T::WIRE_SIZE);
    if expected_len != Some(raw.len()) {
        debug!("Table length mismatch, rejecting: {}", hex::encode(&raw[..raw.len().min(64usize)]));
        return Err(CodecError::EntryCountMismatch { entry_count, entry_size: T::WIRE_SIZE, actual_len: raw.len() });
    }

    let mut reader = WireReader::new(raw);
    let mut entries = Vec::with_capacity(entry_count as usize);
    for _index in 0u32..entry_count {
        reader.require(T::WIRE_SIZE)?;
        entries.push(T::unmarshal(&mut reader)?);
    }
    Ok(entries)
}

/// Serializes a slice of records into their packed wire layout. Round-trips with [`decode_table`] exactly.
pub fn encode_table<T: TableEntry>(entries: &[T]) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(entries.len() * T::WIRE_SIZE);
    for entry in entries {
        entry.marshal(&mut writer);
    }
    writer.into_vec()
}

// ==========================================================================
// Unit tests
// ==========================================================================
