//! Basic NestedText parsing example using the `Value` API

use nestedtext::{parse_string, ParseOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"
# Application configuration
name: Example App
version: 0.1.0
author: Jane Example

# Database settings
database:
    host: localhost
    port: 5432
    credentials:
        username: admin
        password: secret

# Feature flags
features:
    - hot-reload
    - script-generation
    - multi-platform
"#;

    println!("Parsing NestedText document...\n");
    let value = parse_string(text, &ParseOptions::new())?
        .ok_or("expected a document, got an empty input")?;
    let root = value.as_mapping().ok_or("expected the root to be a mapping")?;

    println!("Application Info:");
    println!("  Name: {}", root.get("name").and_then(|v| v.as_str()).unwrap_or(""));
    println!("  Version: {}", root.get("version").and_then(|v| v.as_str()).unwrap_or(""));
    println!("  Author: {}", root.get("author").and_then(|v| v.as_str()).unwrap_or(""));

    println!("\nDatabase configuration:");
    if let Some(database) = root.get("database").and_then(|v| v.as_mapping()) {
        for (key, value) in database.iter() {
            match value.as_str() {
                Some(s) => println!("  {}: {}", key, s),
                None => println!("  {}: <nested>", key),
            }
        }
    }

    println!("\nUsing nested access:");
    let username = root
        .get("database")
        .and_then(|v| v.as_mapping())
        .and_then(|db| db.get("credentials"))
        .and_then(|v| v.as_mapping())
        .and_then(|creds| creds.get("username"))
        .and_then(|v| v.as_str())
        .unwrap_or("<missing>");
    println!("  DB username: {}", username);

    println!("\nFeature flags:");
    if let Some(features) = root.get("features").and_then(|v| v.as_list()) {
        for feature in features {
            println!("  - {}", feature.as_str().unwrap_or(""));
        }
    }

    Ok(())
}
