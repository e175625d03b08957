//! Build a strip from synthetic records and write it to PNG, no window.
//!
//! cargo run -p hexstrip_cli --example headless -- [out.png]

use std::env;
use std::fs::File;
use std::io::{BufWriter, Cursor};

fn main() -> anyhow::Result<()> {
    let out = env::args().nth(1).unwrap_or_else(|| "strip.png".to_string());

    let pixels = hexstrip_core::RECORD_BYTES / 4;
    let mut input = String::new();
    for color in ["FF0000FF", "00FF00FF", "0000FFFF", "FFFFFF80"] {
        input.push_str(&color.repeat(pixels));
        input.push('\n');
    }

    let images = hexstrip_core::load(Cursor::new(input), &Default::default())?;
    let strip = hexstrip_core::composite(&images)?;
    hexstrip_core::export::write_png(&strip, BufWriter::new(File::create(&out)?))?;
    println!("Headless strip: {}x{} -> {}", strip.width(), strip.height(), out);
    Ok(())
}
