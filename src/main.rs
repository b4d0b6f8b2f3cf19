use anyhow::Context;
use clap::{Parser, Subcommand};
use snipgen::{Batch, Config};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "snipgen",
    version,
    about = "Convert source files into editor snippet files",
    long_about = "Convert source files into JSON snippet files for code editors.\n\n\
    Each source becomes one snippet: the file name provides the key and \
    trigger prefix, the file's lines become the body, and a placeholder \
    description is left to fill in by hand.\n\n\
    USAGE EXAMPLES:\n  \
      # Convert one script, writing hello.json next to it\n  \
      snipgen files hello.py\n\n  \
      # Convert every .py/.osl file in a directory into ./snippets\n  \
      snipgen files ./scripts --out-dir ./snippets\n\n  \
      # Allow extra extensions\n  \
      snipgen files ./shaders --ext vert --ext frag\n\n  \
      # Build a snippet from standard input\n  \
      cat hello.py | snipgen buffer hello.json"
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert source files or directories into snippet files
    Files {
        /// Source files or directories to convert
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Write snippet files into this directory instead of alongside
        /// their sources
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Additional source extension to allow, on top of .py and .osl
        /// (can be used multiple times)
        #[arg(long = "ext", value_name = "EXT")]
        ext: Vec<String>,
    },
    /// Convert lines read from standard input into a snippet file
    Buffer {
        /// Snippet file to write; its base name provides the snippet key
        #[arg(value_name = "DEST")]
        dest: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    match cli.command {
        Command::Files {
            paths,
            out_dir,
            ext,
        } => run_files(&paths, out_dir, ext),
        Command::Buffer { dest } => run_buffer(&dest),
    }
}

fn run_files(
    paths: &[PathBuf],
    out_dir: Option<PathBuf>,
    ext: Vec<String>,
) -> anyhow::Result<()> {
    let mut builder = Config::builder();
    for extension in ext {
        builder = builder.extension(extension);
    }
    if let Some(dir) = out_dir {
        builder = builder.out_dir(dir);
    }
    let config = builder.build().context("Failed to build configuration")?;

    let report = Batch::new(config)
        .run(paths)
        .context("Batch conversion failed")?;
    report.print_summary();

    if report.all_failed() {
        anyhow::bail!("no file could be converted");
    }
    Ok(())
}

fn run_buffer(dest: &Path) -> anyhow::Result<()> {
    let text =
        std::io::read_to_string(std::io::stdin()).context("Failed to read standard input")?;
    let lines = snipgen::split_lines(&text);

    let written = snipgen::convert_buffer(lines, dest)
        .with_context(|| format!("Failed to write snippet file '{}'", dest.display()))?;
    println!("Wrote {}", written.display());

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("snipgen=info"),
        1 => EnvFilter::new("snipgen=debug"),
        _ => EnvFilter::new("snipgen=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}
