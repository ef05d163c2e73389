/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

pub mod common;

use common::random::{create_seed, generate_bytes};
use function_name::named;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tss_codec_rs::{CapabilityValue, CodecError};

// ==========================================================================
// Test cases
// ==========================================================================

/// Test that a 1-byte response always decodes as a boolean-like scalar
#[test]
#[named]
fn test_capability_bool_width() {
    common::setup::init();

    repeat_test!(|_i| {
        for value in 0u16..=0xFFu16 {
            let decoded = CapabilityValue::decode(&[value as u8]).expect("1-byte response must decode");
            assert_eq!(decoded, CapabilityValue::Bool(value != 0u16));
            assert_eq!(decoded.as_bool(), Some(value != 0u16));
            assert_eq!(decoded.as_word(), None);
        }
    });
}

/// Test that a 4-byte response always decodes as a little-endian word
#[test]
#[named]
fn test_capability_word_width() {
    common::setup::init();

    repeat_test!(|i| {
        let mut rand_gen = ChaChaRng::from_seed(create_seed(i));

        for _round in 0usize..256usize {
            let raw: [u8; 4] = generate_bytes(&mut rand_gen);
            let decoded = CapabilityValue::decode(&raw).expect("4-byte response must decode");
            assert_eq!(decoded, CapabilityValue::Word(u32::from_le_bytes(raw)));
            assert_eq!(decoded.as_bool(), None);
        }

        // The same logical capability may come back in either width; both must decode
        debug!("Both widths accepted for the same query");
        assert!(CapabilityValue::decode(&[0x01u8]).is_ok());
        assert!(CapabilityValue::decode(&[0x01u8, 0x00u8, 0x00u8, 0x00u8]).is_ok());
    });
}

/// Test that every other response width is rejected with the distinct error kind
#[test]
#[named]
fn test_capability_unsupported_widths() {
    common::setup::init();

    repeat_test!(|_i| {
        for length in (0usize..=32usize).filter(|len| (*len != 1usize) && (*len != 4usize)) {
            let raw = vec![0xA5u8; length];
            assert_eq!(CapabilityValue::decode(&raw), Err(CodecError::UnsupportedValueWidth { length }));
        }
    });
}
