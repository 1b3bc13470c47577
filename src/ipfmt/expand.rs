// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, FormatError, OCTET_BASE};
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr};

/**
Every alternate representation derived from one canonical address.

`truncated` and `overflow` are [None] when the address has no such
shorter form (see [expand]). [fmt::Display] renders the labeled lines
in fixed order, omitting absent forms.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    pub standard: String,
    pub decimal: u32,
    pub hex: String,
    pub v6_mapped: String,
    pub truncated: Option<String>,
    pub overflow: Option<String>,
    pub octal: String,
}

impl Expansion {
    /// Labeled display lines in fixed order, absent forms omitted.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(7);
        out.push(format!("{LBL_STANDARD}: {}", self.standard));
        out.push(format!("{LBL_DECIMAL}: {}", self.decimal));
        out.push(format!("{LBL_HEX}: {}", self.hex));
        out.push(format!("{LBL_MAPPED}: {}", self.v6_mapped));
        if let Some(truncated) = &self.truncated {
            out.push(format!("{LBL_TRUNCATED}: {truncated}"));
        }
        if let Some(overflow) = &self.overflow {
            out.push(format!("{LBL_OVERFLOW}: {overflow}"));
        }
        out.push(format!("{LBL_OCTAL}: {}", self.octal));
        out
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/**
Validate a canonical dotted-quad candidate and derive every alternate
representation from it.

The candidate must be a strict four-octet dotted-quad (each octet in
`0..=255`, no leading zeros); anything else is rejected with
[FormatError::InvalidAddress] and no partial output is produced.
*/
pub fn expand(canonical: impl AsRef<str>) -> Result<Expansion, FormatError> {
    let text: &str = canonical.as_ref().trim();
    let addr: Ipv4Addr = text.parse().map_err(|source| FormatError::InvalidAddress {
        addr: text.into(),
        source,
    })?;

    let octets: [u8; 4] = addr.octets();
    let value: u32 = u32::from(addr);
    let standard: String = addr.to_string();

    Ok(Expansion {
        decimal: value,
        hex: format!("{HEX_PREFIX}{value:08x}"),
        v6_mapped: format!("{V6_MAPPED_PREFIX}{standard}"),
        truncated: truncated(&octets),
        overflow: overflow(&octets),
        octal: octal(&octets),
        standard,
    })
}

/// Shortest dotted prefix whose remaining octets are all zero, or
/// [None] when that prefix is the full address.
fn truncated(octets: &[u8; 4]) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    for (i, octet) in octets.iter().enumerate() {
        parts.push(octet.to_string());
        if octets[i + 1..].iter().all(|&o| o == 0) {
            break;
        }
    }
    if parts.len() == octets.len() {
        return None;
    }
    Some(parts.join(DOT))
}

/// Pack the last two octets into a single integer; [None] when both
/// are zero. The second octet is elided when it is zero as well.
fn overflow(octets: &[u8; 4]) -> Option<String> {
    if octets[2] == 0 && octets[3] == 0 {
        return None;
    }
    let combined: u64 = octets[2] as u64 * OCTET_BASE + octets[3] as u64;
    match octets[1] {
        0 => Some(format!("{}.{combined}", octets[0])),
        _ => Some(format!("{}.{}.{combined}", octets[0], octets[1])),
    }
}

/// Octal rendering: octets >= 8 get a leading zero marker, smaller
/// ones stay a bare single digit.
fn octal(octets: &[u8; 4]) -> String {
    octets
        .iter()
        .map(|&o| {
            if o >= 8 {
                format!("0{o:o}")
            } else {
                format!("{o:o}")
            }
        })
        .collect::<Vec<String>>()
        .join(DOT)
}

/* -------------------------------------------------------------------------- */
