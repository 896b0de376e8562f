// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numeral::prelude::*;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // One value from each side
    let twelve = RomanValue::from_numeral("XII")?;
    let year = RomanValue::from_integer(1987)?;

    twelve.print_integer(&mut out)?;
    twelve.print_numeral(&mut out)?;

    year.print_integer(&mut out)?;
    year.print_numeral(&mut out)?;

    // Rejected input under the default strict policy
    writeln!(out)?;
    for numeral in ["IIII", "XAI"] {
        if let Err(err) = RomanValue::from_numeral(numeral) {
            writeln!(out, "{}", err)?;
        }
    }
    if let Err(err) = RomanValue::from_integer(4000) {
        writeln!(out, "{}", err)?;
    }

    // The same input read leniently
    let lenient = ConversionConfig::lenient();
    let garbage = RomanValue::from_numeral_with("XAI", &lenient)?;
    writeln!(out, "\nLenient {:?} -> {}", garbage.numeral(), garbage.integer())?;

    Ok(())
}
