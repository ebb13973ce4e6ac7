// ============================================================================
// Basic Usage Example
// ============================================================================

use bcd_codec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== BCD Codec Example ===\n");
    println!(
        "Word width: {} ({} digits, buffer of {} bytes)\n",
        Width::current(),
        MAX_BCD_DIGITS,
        BCD_BUF_SIZE
    );

    let mut error = None;

    // Binary <-> BCD
    let x = binary_to_bcd(12).report(&mut error);
    let y = binary_to_bcd(255).report(&mut error);
    println!("binary 12  -> BCD {:#x}", x);
    println!("binary 255 -> BCD {:#x}", y);
    println!("BCD {:#x} -> binary {}", y, bcd_to_binary(y).report(&mut error));

    // Arithmetic
    let sum = bcd_add(x, Bcd::from_raw(0x09)).report(&mut error);
    let product = bcd_multiply(x, Bcd::from_raw(0x03)).report(&mut error);
    println!("\n{} + 9 = {}", x, sum);
    println!("{} * 3 = {}", x, product);

    // Formatting into a caller-owned buffer and parsing back
    let mut buf = [0u8; BCD_BUF_SIZE];
    let len = bcd_to_str(product, &mut buf).report(&mut error);
    let text = String::from_utf8_lossy(&buf[..len]);
    let (parsed, rest) = str_to_bcd("1234 apples").report(&mut error);
    println!("\nformatted: {:?} ({} chars)", text, len);
    println!("parsed {:?} from \"1234 apples\", stopped at {:?}", parsed, rest);

    println!("\nerror so far: {:?}", error);

    // Error cases
    println!("\n=== Error Detection ===");
    let checked = bcd_add(Bcd::max_value(), Bcd::from_raw(0x1));
    println!("{} + 1 -> {:?}", Bcd::<DefaultWord>::max_value(), checked.error());

    let checked = bcd_to_binary(Bcd::from_raw(0x1A));
    println!("binary of {:#x} -> {:?}", Bcd::<DefaultWord>::from_raw(0x1A), checked.error());

    let mut small = [0u8; 2];
    let checked = bcd_to_str(Bcd::from_raw(0x42), &mut small);
    println!("format into 2 bytes -> {:?}", checked.error());

    match "12x".parse::<Bcd32>() {
        Ok(value) => println!("parsed {}", value),
        Err(err) => println!("strict parse of \"12x\" -> {}", err),
    }
}
