// ============================================================================
// Basic Usage Example
// ============================================================================

use eos_asset::prelude::*;

fn main() -> Result<(), AssetError> {
    #[cfg(feature = "logging")]
    if let Err(err) = eos_asset::logging::init(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", err);
    }

    println!("=== EOS Asset Example ===\n");

    // Parse and canonicalize
    for input in ["10.0012 EOS", "0010.0012 EOS", "-0.00 EOS", "1. EOS", ".5 EOS"] {
        let asset: Asset = input.parse()?;
        println!("{:>16} -> {}", input, asset);
    }

    // Exact arithmetic
    println!("\nArithmetic...");
    let price = Asset::parse("2.00 USD")?;
    let total = price.checked_mul(3)?;
    println!("2.00 USD * 3  = {}", total);
    println!("6.00 USD / 4  = {}", total.checked_div(4)?);
    println!("1.23 EOS / 10 = {}", Asset::parse("1.23 EOS")?.checked_div(10)?);
    println!("6.00 USD + 0.50 USD = {}", total.checked_add("0.50 USD")?);

    // Rejected operations
    println!("\nRejections...");
    match price.checked_add("3 USD") {
        Ok(sum) => println!("unexpected sum {}", sum),
        Err(err) => println!("2.00 USD + 3 USD: {}", err),
    }
    match price.checked_mul(2.5) {
        Ok(product) => println!("unexpected product {}", product),
        Err(err) => println!("2.00 USD * 2.5: {}", err),
    }
    match Asset::new(1i64 << 62, "EOS", 0) {
        Ok(asset) => println!("unexpected asset {}", asset),
        Err(err) => println!("2^62 EOS: {}", err),
    }

    // Comparison
    println!("\nComparison...");
    let six = Asset::parse("6.00 EOS")?;
    println!("6.00 EOS > 5.00 EOS: {}", six.greater_than("5.00 EOS")?);
    println!("6.00 EOS == 2 EOS:   {}", six.equals("2 EOS")?);
    match six.greater_than("2 EOS") {
        Ok(answer) => println!("unexpected answer {}", answer),
        Err(err) => println!("6.00 EOS > 2 EOS: {}", err),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
