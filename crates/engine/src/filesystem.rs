use crate::config::Config;
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::Path;

/// Serial depth-first walk that hands every regular file to `visit`.
///
/// Hidden files and VCS ignore rules are not applied: only the configured
/// directory names are skipped, and their contents are never listed.
/// Entries that cannot be read (unlistable directories, link loops) are skipped.
///
/// # Errors
/// Returns [`EngineError::NotADirectory`] if the root is not a directory.
pub fn walk_files<F>(config: &Config, mut visit: F) -> Result<()>
where
    F: FnMut(&Path),
{
    if !config.root.is_dir() {
        return Err(EngineError::NotADirectory(config.root.clone()));
    }

    let ignore_dirs = config.ignore_dirs.clone();
    let mut builder = WalkBuilder::new(&config.root);
    builder
        .standard_filters(false)
        .follow_links(config.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !ignore_dirs.iter().any(|d| *d == name)
        });

    for entry in builder.build() {
        match entry {
            Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => visit(entry.path()),
            Ok(_) => {}
            Err(e) => log::debug!("Skipping unreadable entry: {e}"),
        }
    }

    Ok(())
}
