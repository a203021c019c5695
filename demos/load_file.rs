//! Load a configuration file and print it as indented JSON.
//!
//! Run with: cargo run --example load_file -- demos/app.conf
//! Set RUST_LOG=kvconf=trace to watch the tokenizer.

use kvconf::parse_reader;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/app.conf".to_string());

    let file = File::open(&path).map_err(|e| format!("cannot open {}: {}", path, e))?;
    let document = parse_reader(BufReader::new(file))?;

    println!("{}", document.to_text(Some(4))?);
    Ok(())
}
