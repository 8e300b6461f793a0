//! Basic usage example for the calculator API

use strcalc_api::{sum_text, Config, StringCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    println!("1,2,3\\n4 = {}", sum_text("1,2,3\n4")?);
    println!("//[***]\\n1***2***3 = {}\n", sum_text("//[***]\n1***2***3")?);

    // Method 2: Custom configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder()
        .add_default_delimiter("|")
        .max_value(100)
        .build()?;
    let calculator = StringCalculator::with_config(config)?;
    println!("1|2|500 = {}\n", calculator.sum("1|2|500")?);

    // Method 3: Detailed report
    println!("=== Method 3: Detailed Report ===");
    let report = calculator.evaluate_text("//[*][%]\n1*2%3000")?;
    println!("total: {}", report.total);
    println!("ignored: {:?}", report.ignored);
    println!("delimiters: {:?}", report.delimiters);

    // Errors list every negative value
    match sum_text("1;-2;3;-9") {
        Ok(total) => println!("unexpected total {total}"),
        Err(err) => println!("error: {err}"),
    }

    Ok(())
}
