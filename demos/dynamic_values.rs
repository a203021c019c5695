//! Inspecting declarations and values at runtime.
//!
//! Run with: cargo run --example dynamic_values

use kvconf::{config, parse, ser, ConfigValue, Error as ConfigError, TextOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let document = parse(include_str!("app.conf"))?;

    for declaration in &document {
        let value = declaration.value();
        println!(
            "line {:>2}: {:<10} {:<8} {}",
            declaration.line(),
            declaration.key(),
            value.type_name(),
            value
        );
    }

    if let Ok(ConfigValue::Number(port)) = document.get("port") {
        println!("\nport as f64: {}", port.as_f64());
    }

    match document.get("replicas") {
        Err(ConfigError::InvalidKey(key)) => println!("no value for {:?}", key),
        other => println!("unexpected: {:?}", other),
    }

    // Layer overrides on top of the parsed map; later inserts win
    let mut merged = document.to_map();
    for (key, value) in config!({ "debug": true, "replicas": 3 }) {
        merged.insert(key, value);
    }
    println!("\n{}", ser::to_text(&merged, &TextOptions::pretty())?);

    // Errors carry their position
    for broken in ["price = $5", "just words here"] {
        if let Err(err) = parse(broken) {
            println!("{:<16} -> {}", broken, err);
        }
    }

    Ok(())
}
