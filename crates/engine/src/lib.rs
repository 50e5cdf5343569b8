// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod language;
pub mod report;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::ProjectStats;
use std::path::Path;

/// Walk the project and collect per-language file and line counts.
///
/// Per-file read failures never abort the run: they are logged and the
/// file contributes zero lines (or is treated as untyped Vue).
///
/// # Errors
///
/// Returns an error only if the root is not a directory.
pub fn analyze(config: &Config) -> Result<ProjectStats> {
    let mut stats = ProjectStats::new();
    filesystem::walk_files(config, |path| record_file(&mut stats, path))?;
    log::debug!(
        "Analyzed {} files ({} classified) under {}",
        stats.total_files,
        stats.classified_files(),
        config.root.display()
    );
    Ok(stats)
}

fn record_file(stats: &mut ProjectStats, path: &Path) {
    let ext = language::extension_of(path);
    match language::language_for_extension(ext) {
        Some(label) => {
            let language = language::classify(path, ext, label);
            stats.record(language, counter::count_lines_or_zero(path));
        }
        None => stats.record_unclassified(),
    }
}
