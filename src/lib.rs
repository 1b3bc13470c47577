// Copyright (c) 2026 Mikko Tanner. All rights reserved.

mod ipfmt;

pub use ipfmt::{detect_and_normalize, expand, parse_and_expand, Expansion, FormatError};
