/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use rand::{Rng, RngCore};
use std::fmt::Debug;

/// Create seed value from index, so every repeat iteration is reproducible from its loop counter.
pub fn create_seed<const N: usize, T: TryInto<u64> + Debug>(value: T) -> [u8; N]
where
    <T as TryInto<u64>>::Error: std::fmt::Debug,
{
    let mut seed_data = [0u8; N];
    let value_bytes = value.try_into().unwrap().to_be_bytes();
    if N > value_bytes.len() {
        seed_data[N - value_bytes.len()..].copy_from_slice(&value_bytes[..]);
    } else {
        seed_data[..].copy_from_slice(&value_bytes[value_bytes.len() - N..]);
    }
    seed_data
}

/// Generate pseudo-random bytes of a fixed length
pub fn generate_bytes<const N: usize>(rand_gen: &mut impl RngCore) -> [u8; N] {
    let mut rand_data = [0u8; N];
    rand_gen.fill_bytes(&mut rand_data);
    rand_data
}

/// Generate pseudo-random bytes of a random length in the given range
pub fn generate_buffer(rand_gen: &mut impl RngCore, min_len: usize, max_len: usize) -> Vec<u8> {
    let length = rand_gen.random_range(min_len..=max_len);
    let mut rand_data = vec![0u8; length];
    rand_gen.fill_bytes(&mut rand_data);
    rand_data
}
