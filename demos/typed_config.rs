//! Deserializing a configuration straight into Rust types.
//!
//! Run with: cargo run --example typed_config

use kvconf::from_str;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(dead_code)]
enum LogLevel {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Service {
    name: String,
    host: String,
    port: u16,
    timeout: f64,
    debug: bool,
    log_level: LogLevel,
    log_file: Option<String>,
    replicas: Option<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let service: Service = from_str(include_str!("app.conf"))?;

    println!("{:#?}", service);
    println!(
        "{} listens on {}:{} (replicas: {})",
        service.name,
        service.host,
        service.port,
        service.replicas.unwrap_or(1)
    );

    // Mistyped values are reported, not coerced
    if let Err(err) = from_str::<Service>("name = x\nhost = y\nport = http") {
        println!("Error: {}", err);
    }

    Ok(())
}
