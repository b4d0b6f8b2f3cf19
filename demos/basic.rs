//! Basic example of using snipgen as a library
//!
//! This example shows the simplest way to turn one source file into a
//! snippet file.

use std::fs;

fn main() -> anyhow::Result<()> {
    // Create a small source file to work on
    fs::write("hello.py", "print('Hello, world!')\n")?;

    // Convert it; the snippet key comes from the file name
    let written = snipgen::convert_file("hello.py", "hello.json")?;

    println!("✓ Snippet written to: {}", written.display());
    println!("\n{}", fs::read_to_string(&written)?);

    Ok(())
}
