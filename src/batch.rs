//! Batch conversion over many sources with per-file failure isolation.

use crate::config::Config;
use crate::convert;
use crate::error::{Error, Result};
use crate::source;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// The result of one batch candidate.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The source was converted and its snippet file written.
    Converted {
        /// The source file that was read.
        source: PathBuf,
        /// The snippet file that was written.
        dest: PathBuf,
    },
    /// The source extension is not on the allow-list; nothing was written.
    Skipped {
        /// The candidate that was passed over.
        source: PathBuf,
    },
    /// Conversion failed; remaining candidates were still processed.
    Failed {
        /// The candidate that failed.
        source: PathBuf,
        /// What went wrong.
        error: Error,
    },
}

impl BatchOutcome {
    /// The source path this outcome is about.
    #[must_use]
    pub fn source(&self) -> &Path {
        match self {
            Self::Converted { source, .. }
            | Self::Skipped { source }
            | Self::Failed { source, .. } => source,
        }
    }
}

/// Statistics and per-candidate outcomes from a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Outcome for every candidate, in processing order.
    pub outcomes: Vec<BatchOutcome>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl BatchReport {
    fn new(outcomes: Vec<BatchOutcome>, duration: Duration) -> Self {
        Self { outcomes, duration }
    }

    /// Number of candidates converted successfully.
    #[must_use]
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BatchOutcome::Converted { .. }))
            .count()
    }

    /// Number of candidates passed over by the allow-list.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BatchOutcome::Skipped { .. }))
            .count()
    }

    /// Number of candidates that failed to convert.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BatchOutcome::Failed { .. }))
            .count()
    }

    /// Returns `true` when at least one candidate failed and none succeeded.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.failed() > 0 && self.converted() == 0
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n╔═══════════════════════════════════════╗");
        println!("║       Batch Conversion Summary        ║");
        println!("╠═══════════════════════════════════════╣");
        println!("║ Candidates:      {:>8}             ║", self.outcomes.len());
        println!("║   - Converted:   {:>8}             ║", self.converted());
        println!("║   - Skipped:     {:>8}             ║", self.skipped());
        println!("║   - Failed:      {:>8}             ║", self.failed());
        println!("║                                       ║");
        println!(
            "║ Duration:        {:>7.2}s             ║",
            self.duration.as_secs_f64()
        );
        println!("╚═══════════════════════════════════════╝\n");

        if self.failed() > 0 {
            println!("Failures:");
            for outcome in &self.outcomes {
                if let BatchOutcome::Failed { source, error } = outcome {
                    println!("  ✗ {}: {}", source.display(), error);
                }
            }
            println!();
        }
    }
}

/// Drives conversion over a list of files and directories.
///
/// Every candidate gets exactly one [`BatchOutcome`]; a failure on one
/// never aborts the rest of the run.
pub struct Batch {
    config: Config,
}

impl Batch {
    /// Creates a new batch driver with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Converts all candidates among `paths` and returns the report.
    ///
    /// File arguments are taken as-is: one not on the allow-list becomes a
    /// [`BatchOutcome::Skipped`]. Directory arguments expand to their
    /// allowed files one level deep, sorted by name; hidden and
    /// binary-looking entries are left out of the expansion entirely.
    ///
    /// Each snippet file lands next to its source with the extension
    /// swapped, or inside the configured output directory, which is created
    /// on demand.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created.
    /// Per-candidate failures are reported through the outcomes instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snipgen::{Batch, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let report = Batch::new(Config::default()).run(&[PathBuf::from("scripts")])?;
    /// report.print_summary();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, paths), fields(requested = paths.len()))]
    pub fn run(&self, paths: &[PathBuf]) -> Result<BatchReport> {
        let start = Instant::now();

        if let Some(dir) = &self.config.out_dir {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }

        let candidates = self.collect_candidates(paths);
        info!("Converting {} candidate files", candidates.len());

        let mut outcomes = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            outcomes.push(self.convert_one(candidate));
        }

        let report = BatchReport::new(outcomes, start.elapsed());
        info!(
            "✓ Batch finished: {} converted, {} skipped, {} failed in {:.2}s",
            report.converted(),
            report.skipped(),
            report.failed(),
            report.duration.as_secs_f64()
        );

        Ok(report)
    }

    fn collect_candidates(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for path in paths {
            if path.is_dir() {
                candidates.extend(self.expand_dir(path));
            } else {
                candidates.push(path.clone());
            }
        }
        candidates
    }

    /// Lists the convertible files directly inside `dir`, sorted by name.
    ///
    /// Hidden files are skipped; ignore rules from git are not consulted.
    fn expand_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .standard_filters(false)
            .hidden(true)
            .build();

        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !self.config.allows(&path) {
                debug!("Ignoring {} (extension not allowed)", path.display());
                continue;
            }
            match source::is_likely_binary(&path) {
                Ok(true) => {
                    warn!("Skipping binary-looking file {}", path.display());
                    continue;
                }
                Ok(false) => {}
                // Let conversion surface the real error.
                Err(e) => debug!("Could not sniff {}: {}", path.display(), e),
            }

            found.push(path);
        }
        found.sort();
        found
    }

    fn convert_one(&self, source: &Path) -> BatchOutcome {
        if !self.config.allows(source) {
            debug!("Skipping {} (extension not allowed)", source.display());
            return BatchOutcome::Skipped {
                source: source.to_path_buf(),
            };
        }

        let dest = self.dest_for(source);
        match convert::convert_file(source, &dest) {
            Ok(dest) => {
                info!("✓ {} -> {}", source.display(), dest.display());
                BatchOutcome::Converted {
                    source: source.to_path_buf(),
                    dest,
                }
            }
            Err(error) => {
                warn!("✗ {}: {}", source.display(), error);
                BatchOutcome::Failed {
                    source: source.to_path_buf(),
                    error,
                }
            }
        }
    }

    fn dest_for(&self, source: &Path) -> PathBuf {
        let renamed = source.with_extension(&self.config.snippet_extension);
        match (&self.config.out_dir, renamed.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => renamed,
        }
    }
}
