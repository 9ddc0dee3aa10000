//! Decodes the layout dump files given on the command line and prints them as JSON.
//!
//! `RUST_LOG=debug cargo run --example decode_layout -- path/to/layout.rly`
use std::error::Error;

use railos_parser::RlyParser;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut parser = RlyParser::new();
    for rly_file in std::env::args().skip(1) {
        let layout = parser.parse(&rly_file)?;
        log::info!(
            "{rly_file}: {} active, {} inactive elements",
            layout.active_elements().len(),
            layout.inactive_elements().len()
        );
        println!("{}", serde_json::to_string_pretty(layout)?);
    }
    Ok(())
}
