//! Building a snippet from in-memory lines
//!
//! This example converts lines that never touch the filesystem, the way an
//! editor integration would hand over its current buffer.

use std::fs;

fn main() -> anyhow::Result<()> {
    let lines = vec![
        "import bpy\n".to_string(),
        "\n".to_string(),
        "for obj in bpy.context.selected_objects:\n".to_string(),
        "    print(obj.name)\n".to_string(),
    ];

    // The destination name provides the snippet key: "list_objects"
    let written = snipgen::convert_buffer(lines, "list objects.json")?;

    println!("✓ Snippet written to: {}", written.display());
    println!("\n{}", fs::read_to_string(&written)?);

    Ok(())
}
