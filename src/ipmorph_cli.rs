// Copyright (c) 2026 Mikko Tanner. All rights reserved.

use ipmorph::{detect_and_normalize, expand};
use std::{env, process::exit};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <IP_address_or_format>", args[0]);
        exit(1);
    }

    let canonical: String = match detect_and_normalize(&args[1]) {
        Ok(canonical) => canonical,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    println!("Parsed as: {canonical}");
    println!();

    // Conversion failures are reported as text, not as exit codes.
    match expand(&canonical) {
        Ok(reps) => println!("{reps}"),
        Err(err) => println!("Error: {err}"),
    }
}
