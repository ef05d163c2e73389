/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use std::sync::Once;

/* One-time initialization */
static ENV_LOGGER_INIT: Once = Once::new();

/// Initializes the test environment. The codec under test is pure and stateless, so the only shared set-up is the logger.
pub fn init() {
    ENV_LOGGER_INIT.call_once(env_logger::init);
}
