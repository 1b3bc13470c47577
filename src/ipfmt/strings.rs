// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static HEX_PREFIX: &str = "0x";
pub(crate) static V6_MAPPED_PREFIX: &str = "::ffff:";

// mod.rs
pub(crate) static ERR_UNRECOGNIZED: &str = "could not parse as any known IP format";
pub(crate) static ERR_NUMERAL: &str = "invalid numeral in address";
pub(crate) static ERR_INV_ADDR: &str = "invalid IPv4 address";

// expand.rs
pub(crate) static LBL_STANDARD: &str = "Standard IPv4";
pub(crate) static LBL_DECIMAL: &str = "32-bit decimal";
pub(crate) static LBL_HEX: &str = "32-bit hex";
pub(crate) static LBL_MAPPED: &str = "IPv6 mapped";
pub(crate) static LBL_TRUNCATED: &str = "Truncated";
pub(crate) static LBL_OVERFLOW: &str = "Integer overflow";
pub(crate) static LBL_OCTAL: &str = "Octal";
