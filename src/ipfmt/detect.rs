// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, FormatError, OCTET_BASE, OCTET_MAX};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use tracing::debug;

lazy_static! {
    /// four dotted decimal groups without leading zeros
    static ref RE_STANDARD: Regex =
        Regex::new(r"^(?:0|[1-9]\d{0,2})(?:\.(?:0|[1-9]\d{0,2})){3}$").unwrap();
    /// two or three dotted groups of bare digits
    static ref RE_PARTIAL: Regex = Regex::new(r"^\d+(?:\.\d+){1,2}$").unwrap();
    /// four dotted groups, the first with a leading zero
    static ref RE_OCTAL: Regex = Regex::new(r"^0\d+(?:\.\d+){3}$").unwrap();
}

/**
Detect the textual format of `raw` and normalize it into a canonical
dotted-quad candidate.

Recognized formats, in priority order (the first matching rule wins):
- Standard dotted-quad: `10.0.0.1` (passed through as-is)
- 32-bit decimal: `167772161`
- 32-bit hexadecimal: `0x0a000001`
- IPv6-mapped: `::ffff:10.0.0.1`
- Overflow dotted form: `10.0.256` (last group packs two octets)
- Truncated dotted form: `10.5` or `10.5.3` (missing octets zero-filled)
- Octal dotted form: `010.2.3.4` (leading-zero groups read as base-8)

NOTE: the result is a canonical-*shaped* candidate; octet range
validation happens at the expansion boundary ([super::expand]), so
f.ex. `999.1.1.1` passes through here and is rejected there.
*/
pub fn detect_and_normalize(raw: impl AsRef<str>) -> Result<String, FormatError> {
    let input: &str = raw.as_ref().trim();
    if input.is_empty() {
        return Err(FormatError::Unrecognized(input.into()));
    }

    // Standard dotted-quad passes through untouched.
    if RE_STANDARD.is_match(input) {
        return Ok(input.to_string());
    }

    // Bare unsigned 32-bit integer, network byte order.
    if input.chars().all(|c| c.is_ascii_digit()) {
        let val: u32 = input.parse().map_err(|source| FormatError::BadNumeral {
            text: input.into(),
            source,
        })?;
        return Ok(Ipv4Addr::from(val).to_string());
    }

    // 32-bit hexadecimal with a 0x prefix.
    if let Some(hex) = input.strip_prefix(HEX_PREFIX) {
        let val: u32 = u32::from_str_radix(hex, 16).map_err(|source| FormatError::BadNumeral {
            text: input.into(),
            source,
        })?;
        return Ok(Ipv4Addr::from(val).to_string());
    }

    // IPv6-mapped: strip the prefix, keep the rest verbatim. A bare
    // prefix with nothing after it matches no rule at all.
    if let Some(rest) = input.strip_prefix(V6_MAPPED_PREFIX) {
        if !rest.is_empty() {
            return Ok(rest.to_string());
        }
    }

    // Overflow and truncated dotted forms (two or three groups).
    if RE_PARTIAL.is_match(input) {
        if let Some(out) = normalize_partial(input) {
            debug!("normalized partial form '{}' to '{}'", input, out);
            return Ok(out);
        }
    }

    // Octal groups, or the broad digits-and-dots fallback.
    if RE_OCTAL.is_match(input) || input.chars().all(|c| c.is_ascii_digit() || c == '.') {
        if let Some(out) = normalize_octal(input) {
            if out != input {
                debug!("normalized octal form '{}' to '{}'", input, out);
            }
            return Ok(out);
        }
    }

    Err(FormatError::Unrecognized(input.into()))
}

/**
Normalize the overflow (`a.b.xyz` with `xyz` > 255) and truncated
(`a.b` / `a.b.c`) dotted forms into four octets.

Returns [None] when the groups fit none of the branches; the caller
falls through to the next detection rule.
*/
fn normalize_partial(input: &str) -> Option<String> {
    let groups: Vec<u64> = input
        .split(DOT)
        .map(|g| g.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    match groups.as_slice() {
        // Overflow form: the last group packs octets 3 and 4. The two
        // leading groups are not range-checked here, expansion is the
        // gatekeeper for those.
        [a, b, combined] if *combined > OCTET_MAX => Some(format!(
            "{a}.{b}.{}.{}",
            combined / OCTET_BASE,
            combined % OCTET_BASE
        )),
        // third group <= 255 here, or the arm above would have taken it
        [a, b, c] if *a <= OCTET_MAX && *b <= OCTET_MAX => Some(format!("{a}.{b}.0.{c}")),
        // An oversized tail spreads over the last two octets. Tails
        // >= 65536 yield an out-of-range third octet and get rejected
        // at the expansion boundary.
        [a, combined] if *a <= OCTET_MAX && *combined > OCTET_MAX => Some(format!(
            "{a}.0.{}.{}",
            combined / OCTET_BASE,
            combined % OCTET_BASE
        )),
        [a, b] if *a <= OCTET_MAX => Some(format!("{a}.0.0.{b}")),
        _ => None,
    }
}

/**
Reinterpret leading-zero groups as base-8, leaving other groups as-is.

Returns [None] when a leading-zero group is not a valid octal numeral,
in which case the whole rule does not apply.
*/
fn normalize_octal(input: &str) -> Option<String> {
    let mut converted: Vec<String> = Vec::with_capacity(4);
    for group in input.split(DOT) {
        if group.len() > 1 && group.starts_with('0') {
            let val: u64 = u64::from_str_radix(group, 8).ok()?;
            converted.push(val.to_string());
        } else {
            converted.push(group.to_string());
        }
    }
    Some(converted.join(DOT))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const STD: &str = "10.20.30.40";
    const STD_OOR: &str = "999.1.1.1";
    const DEC: &str = "167772161";
    const DEC_HUGE: &str = "4294967296"; // u32::MAX + 1
    const HEX: &str = "0x0a000001";
    const HEX_BAD: &str = "0xzz";
    const MAPPED: &str = "::ffff:192.168.1.1";
    const OVERFLOW_3: &str = "10.0.256";
    const TRUNC_2: &str = "10.5";
    const TRUNC_2_BIG: &str = "10.999";
    const TRUNC_2_HUGE: &str = "10.65536";
    const TRUNC_3: &str = "10.5.3";
    const OCTAL: &str = "010.2.3.4";
    const OCTAL_FULL: &str = "0377.0.0.01";
    const OCTAL_BAD: &str = "08.1.2.3";

    #[test]
    fn test_standard_passthrough() {
        assert_eq!(detect_and_normalize(STD).unwrap(), STD);
        // out-of-range octets are not this rule's problem
        assert_eq!(detect_and_normalize(STD_OOR).unwrap(), STD_OOR);
    }

    #[test]
    fn test_standard_wins_over_octal_fallback() {
        // digits-and-dots input also satisfies the octal fallback
        // pattern, but rule order keeps that overlap inert
        assert_eq!(detect_and_normalize("10.0.0.1").unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(detect_and_normalize(DEC).unwrap(), "10.0.0.1");
        assert_eq!(detect_and_normalize("0").unwrap(), "0.0.0.0");
        assert_eq!(detect_and_normalize("4294967295").unwrap(), "255.255.255.255");
    }

    #[test]
    fn test_decimal_too_large() {
        let result = detect_and_normalize(DEC_HUGE);
        assert!(matches!(result, Err(FormatError::BadNumeral { .. })));
    }

    #[test]
    fn test_hex() {
        assert_eq!(detect_and_normalize(HEX).unwrap(), "10.0.0.1");
        assert_eq!(detect_and_normalize("0xFFFFFFFF").unwrap(), "255.255.255.255");
    }

    #[test]
    fn test_hex_invalid_remainder() {
        let result = detect_and_normalize(HEX_BAD);
        assert!(matches!(result, Err(FormatError::BadNumeral { .. })));
    }

    #[test]
    fn test_v6_mapped() {
        assert_eq!(detect_and_normalize(MAPPED).unwrap(), "192.168.1.1");
        // the remainder is taken verbatim, garbage included
        assert_eq!(detect_and_normalize("::ffff:999.1.1.1").unwrap(), STD_OOR);
    }

    #[test]
    fn test_overflow_form() {
        assert_eq!(detect_and_normalize(OVERFLOW_3).unwrap(), "10.0.1.0");
        assert_eq!(detect_and_normalize("1.2.300").unwrap(), "1.2.1.44");
        assert_eq!(detect_and_normalize("1.2.772").unwrap(), "1.2.3.4");
    }

    #[test]
    fn test_truncated_two_groups() {
        assert_eq!(detect_and_normalize(TRUNC_2).unwrap(), "10.0.0.5");
        assert_eq!(detect_and_normalize(TRUNC_2_BIG).unwrap(), "10.0.3.231");
    }

    #[test]
    fn test_truncated_two_groups_huge_tail() {
        // the candidate carries an out-of-range third octet on purpose
        assert_eq!(detect_and_normalize(TRUNC_2_HUGE).unwrap(), "10.0.256.0");
    }

    #[test]
    fn test_truncated_three_groups() {
        assert_eq!(detect_and_normalize(TRUNC_3).unwrap(), "10.5.0.3");
    }

    #[test]
    fn test_partial_out_of_range_falls_through() {
        // first group > 255 disqualifies the truncated branches; the
        // octal fallback then passes the text through unchanged
        assert_eq!(detect_and_normalize("300.5").unwrap(), "300.5");
    }

    #[test]
    fn test_octal() {
        assert_eq!(detect_and_normalize(OCTAL).unwrap(), "8.2.3.4");
        assert_eq!(detect_and_normalize(OCTAL_FULL).unwrap(), "255.0.0.1");
    }

    #[test]
    fn test_octal_invalid_digit_is_unrecognized() {
        let result = detect_and_normalize(OCTAL_BAD);
        assert!(matches!(result, Err(FormatError::Unrecognized(_))));
    }

    #[test]
    fn test_unrecognized() {
        assert!(detect_and_normalize("banana").is_err());
        assert!(detect_and_normalize("").is_err());
        assert!(detect_and_normalize("   ").is_err());
        assert!(detect_and_normalize("10.0.0.1.2.3x").is_err());
        assert!(detect_and_normalize("::ffff:").is_err());
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(detect_and_normalize("  10.0.0.1\n").unwrap(), "10.0.0.1");
    }
}
