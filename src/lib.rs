//! # snipgen
//!
//! A library for converting source files into editor snippet files.
//!
//! Each source becomes a JSON object keyed by its normalized name, holding
//! the trigger prefix, the file's lines as the snippet body and a
//! placeholder description ready to be filled in by hand.
//!
//! ## Features
//!
//! - Byte-faithful bodies: lines keep their terminators untouched
//! - Stable output: 4-space indentation, insertion order preserved
//! - Batch conversion with an extension allow-list and per-file failure
//!   isolation
//! - In-memory buffer conversion for editor integrations
//!
//! ## Quick Start
//!
//! ```no_run
//! use snipgen::{Batch, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Single file: hello.py -> hello.json next to it.
//! snipgen::convert_file("hello.py", "hello.json")?;
//!
//! // Whole directory of .py / .osl sources.
//! let config = Config::builder().out_dir("./snippets").build()?;
//! let report = Batch::new(config).run(&[PathBuf::from("./scripts")])?;
//! report.print_summary();
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is a short, synchronous pipeline:
//! 1. **Source**: Reads UTF-8 text and splits it into terminator-keeping lines
//! 2. **Builder**: Derives the key and prefix and assembles the record
//! 3. **Serializer**: Renders the ordered JSON artifact
//! 4. **Batch**: Drives the above over many files, isolating failures

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod config;
mod convert;
mod error;
mod serializer;
mod snippet;
mod source;

pub use batch::{Batch, BatchOutcome, BatchReport};
pub use config::{Config, ConfigBuilder, DEFAULT_EXTENSIONS};
pub use convert::{convert_buffer, convert_file};
pub use error::{Error, Result};
pub use snippet::{
    key_from_name, prefix_from_key, SnippetFile, SnippetRecord, DESCRIPTION_PLACEHOLDER,
};
pub use source::split_lines;
