/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! # TSS Wire Codec
//!
//! The **`tss-codec-rs`** crate implements the small family of fixed wire formats exchanged with, or derived from, a TSS (TCG Software Stack) service:
//!
//! - [`encode_unicode()`] — conversion of native text into the little-endian double-byte string encoding used for policy prompt strings.
//! - [`CapabilityValue`] — decoding of capability-query responses whose scalar width (1 or 4 bytes) must be inferred from the response size.
//! - [`decode_table()`] / [`encode_table()`] — cursor-based decoding of the delegation [`FamilyTableEntry`] and [`DelegationTableEntry`] records packed contiguously in a flat byte buffer, plus the symmetric encoder.
//! - [`Envelope`] — the two-pass (measure, then fill) encoder that wraps an opaque key blob in a type-tagged outer envelope.
//!
//! The crate's boundary is exclusively in-memory byte buffers and their lengths. It is consumed by a command layer that talks to a hardware or software TPM and by a key-management layer that supplies blobs for envelope wrapping; both are external collaborators. The crate defines no file format, no network protocol and no CLI surface, and it performs no TPM command processing of its own.
//!
//! All operations are pure, stateless functions of their inputs. They may be invoked concurrently from multiple threads without coordination.
//!
//! ### Byte order
//!
//! Multi-byte scalar fields inside table records and the envelope header are **big-endian** (network order), matching the wire convention of the TPM protocol. The double-byte string encoding is **little-endian**, matching the host string convention of the policy-prompt subsystem. These two differing byte orders are both load-bearing and must not be unified.
//!
//! ### Example
//!
//! ```rust
//! use log::debug;
//! use tss_codec_rs::{CapabilityValue, FamilyTableEntry, decode_table};
//!
//! fn handle_response(capability: &[u8], table: &[u8], entry_count: u32) {
//!     // Width of the capability response is inferred from its size
//!     match CapabilityValue::decode(capability) {
//!         Ok(value) => debug!("Capability value: {:?}", value),
//!         Err(error) => debug!("Capability decode failed: {}", error),
//!     }
//!
//!     // Entry count comes out of band, from the response's length field
//!     match decode_table::<FamilyTableEntry>(table, entry_count) {
//!         Ok(entries) => {
//!             for entry in entries {
//!                 debug!("Family {} (enabled: {})", entry.family_id, entry.enabled());
//!             }
//!         }
//!         Err(error) => debug!("Table decode failed: {}", error),
//!     }
//! }
//! ```

mod capability;
mod envelope;
mod error;
mod marshal;
mod tables;
mod unicode;

pub use capability::CapabilityValue;
pub use envelope::{BlobType, Envelope};
pub use error::CodecError;
pub use marshal::{WireReader, WireWriter};
pub use tables::{DelegationTableEntry, FamilyTableEntry, TableEntry, decode_table, encode_table};
pub use unicode::{encode_unicode, encoded_size};
