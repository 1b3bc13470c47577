// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 address format detection and conversion into the family of
//! alternate textual representations (decimal, hex, IPv6-mapped,
//! truncated, overflow and octal dotted forms).

mod detect;
mod expand;
mod strings;

use std::{error, fmt, net::AddrParseError, num::ParseIntError};
use strings::*;

pub use detect::detect_and_normalize;
pub use expand::{expand, Expansion};

/// one past the top of the octet value range
pub(crate) const OCTET_BASE: u64 = 256;
pub(crate) const OCTET_MAX: u64 = OCTET_BASE - 1;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// input matched none of the known format rules
    Unrecognized(String),
    /// a rule matched structurally, but a numeric component did not parse
    BadNumeral     { text: String, source: ParseIntError },
    /// the normalized candidate is not a valid dotted-quad address
    InvalidAddress { addr: String, source: AddrParseError },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unrecognized(raw) => {
                write!(f, "{ERR_UNRECOGNIZED}: '{raw}'")
            }
            FormatError::BadNumeral { text, source } => {
                write!(f, "{ERR_NUMERAL}: '{text}': {source}")
            }
            FormatError::InvalidAddress { addr, source } => {
                write!(f, "{ERR_INV_ADDR}: '{addr}': {source}")
            }
        }
    }
}

impl error::Error for FormatError {}

/**
Detect and normalize `raw`, then expand the result.

Convenience wrapper chaining [detect_and_normalize] and [expand];
returns the canonical candidate together with every representation
derived from it.
*/
pub fn parse_and_expand(raw: impl AsRef<str>) -> Result<(String, Expansion), FormatError> {
    let canonical: String = detect_and_normalize(raw)?;
    let reps: Expansion = expand(&canonical)?;
    Ok((canonical, reps))
}

/* -------------------------------------------------------------------------- */
