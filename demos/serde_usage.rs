//! Bridging a parsed `Value` to `serde_json`, with the `serde` feature
//! enabled. This is not a NestedText-to-struct deserializer — NestedText has
//! no scalar types, so a `Value` only ever carries strings, lists, and
//! mappings. It round-trips through any `serde`-compatible format.

#[cfg(feature = "serde")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use nestedtext::{parse_string, ParseOptions};

    let text = r#"
name: Example App
version: 0.1.0
author: Jane Example
database:
    host: localhost
    port: 5432
"#;

    let value = parse_string(text, &ParseOptions::new())?
        .ok_or("expected a document, got an empty input")?;

    let json = serde_json::to_string_pretty(&value)?;
    println!("{}", json);

    let round_tripped: nestedtext::Value = serde_json::from_str(&json)?;
    assert_eq!(round_tripped, value);
    println!("\nround-trip through serde_json succeeded");

    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature to be enabled.");
    println!("Run with: cargo run --example serde_usage --features serde");
}
