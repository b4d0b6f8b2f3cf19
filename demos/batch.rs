//! Batch conversion over a directory of sources
//!
//! This example prepares a few source files, converts the whole directory
//! in one run and prints the report.

use snipgen::{Batch, Config};
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    fs::create_dir_all("scripts")?;
    fs::write("scripts/rotate.py", "obj.rotation_euler.z += 0.5\n")?;
    fs::write("scripts/noise.osl", "shader noise() {}\n")?;
    fs::write("scripts/readme.txt", "not a source file\n")?;

    // Collect the snippets into one directory instead of next to the sources
    let config = Config::builder().out_dir("./snippets").build()?;

    let report = Batch::new(config).run(&[PathBuf::from("scripts")])?;

    report.print_summary();

    println!(
        "✓ Converted {} of {} candidates",
        report.converted(),
        report.outcomes.len()
    );

    Ok(())
}
