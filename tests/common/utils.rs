/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use log::info;
use std::sync::OnceLock;

/* Defaults */
const LOOPS_DEFAULT_VALUE: usize = 3;

/* One-time initialization */
static TEST_LOOPS: OnceLock<usize> = OnceLock::new();

/// Repeat the given function (e.g. test) `n` times. Should be invoked by using the `repeat_test!()` macro!
pub fn _repeat_test<F: Fn(usize)>(name: &str, test_fn: F) {
    let loops = *TEST_LOOPS.get_or_init(|| option_env!("TSS_CODEC_TEST_LOOP").and_then(|str| str.parse::<usize>().ok()).unwrap_or(LOOPS_DEFAULT_VALUE));
    for i in 0..loops {
        info!("\u{25B6} {}, execution {} of {} \u{25C0}", name, i + 1, loops);
        test_fn(i);
    }
}

/// Repeat the given function (e.g. test) `n` times.
#[macro_export]
macro_rules! repeat_test {
    ($func:expr) => {
        $crate::common::utils::_repeat_test(function_name!(), $func)
    };
}
