/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Wrapping of an opaque key blob into the type-tagged TSS blob envelope.
//!
//! The envelope is a fixed 12-byte big-endian header (structure version, blob type tag, blob length) followed by a verbatim copy of the inner blob. Encoding follows the two-call length-negotiation idiom of the source API: [`required_size()`](Envelope::required_size) measures, [`fill()`](Envelope::fill) writes into a caller-supplied buffer of exactly that size. Callers that do not reuse buffers should prefer [`to_vec()`](Envelope::to_vec), which returns an owned, exactly-sized buffer in one call.

use crate::{CodecError, marshal::WireWriter};
use log::trace;

/* Envelope header layout */
const STRUCT_VERSION: u32 = 0x00000001;
const HEADER_SIZE: usize = 12;

// ==========================================================================
// Blob types
// ==========================================================================

/// The type discriminator carried in the envelope header.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
#[non_exhaustive]
pub enum BlobType {
    /// A wrapped key blob.
    Key,
    /// A public key blob.
    PublicKey,
    /// A migratable key blob.
    MigrationKey,
    /// A sealed data bundle.
    SealedData,
    /// A bound data bundle.
    BoundData,
    /// A migration ticket.
    MigrationTicket,
    /// A modified private key blob.
    PrivateKeyMod,
    /// A random XOR mask blob.
    RandomXor,
}

impl BlobType {
    /// The fixed wire tag of this blob type.
    pub fn tag(self) -> u32 {
        match self {
            Self::Key => 0x00000001,
            Self::PublicKey => 0x00000002,
            Self::MigrationKey => 0x00000003,
            Self::SealedData => 0x00000004,
            Self::BoundData => 0x00000005,
            Self::MigrationTicket => 0x00000006,
            Self::PrivateKeyMod => 0x00000007,
            Self::RandomXor => 0x00000008,
        }
    }
}

// ==========================================================================
// Envelope
// ==========================================================================

/// A type-tagged envelope around a borrowed inner blob.
///
/// The struct borrows the inner blob, so measuring and filling operate on the same `(type, inner)` pair by construction; [`required_size()`](Self::required_size) is idempotent and may be called any number of times before [`fill()`](Self::fill) without affecting the result.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    blob_type: BlobType,
    inner: &'a [u8],
}

impl<'a> Envelope<'a> {
    pub fn new(blob_type: BlobType, inner: &'a [u8]) -> Self {
        Self { blob_type, inner }
    }

    /// The measure call: returns the exact byte length the encoded envelope will occupy, without allocating the output buffer.
    pub fn required_size(&self) -> usize {
        HEADER_SIZE + self.inner.len()
    }

    /// The fill call: writes the envelope into a caller-supplied buffer of exactly [`required_size()`](Self::required_size) bytes and returns the number of bytes written.
    ///
    /// Fails with [`CodecError::BufferTooSmall`] unless the supplied buffer's length matches the measured size exactly; nothing is written on failure.
    pub fn fill(&self, out: &mut [u8]) -> Result<usize, CodecError> {
        let required = self.required_size();
        if out.len() != required {
            return Err(CodecError::BufferTooSmall { required, provided: out.len() });
        }
        trace!("Filling {:?} envelope: {} header byte(s) + {} inner byte(s)", self.blob_type, HEADER_SIZE, self.inner.len());

        out[0usize..4usize].copy_from_slice(&STRUCT_VERSION.to_be_bytes());
        out[4usize..8usize].copy_from_slice(&self.blob_type.tag().to_be_bytes());
        out[8usize..12usize].copy_from_slice(&(self.inner.len() as u32).to_be_bytes());
        out[HEADER_SIZE..].copy_from_slice(self.inner);
        Ok(required)
    }

    /// The single-call form: encodes into an owned, exactly-sized buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(self.required_size());
        writer.put_u32(STRUCT_VERSION);
        writer.put_u32(self.blob_type.tag());
        writer.put_u32(self.inner.len() as u32);
        writer.put_bytes(self.inner);
        writer.into_vec()
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================
