use crate::error::{EngineError, Result};
use crate::stats::{ProjectStats, round_half_up};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// `yyyyMMdd_HHmmss`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const FALLBACK_NAME: &str = "project";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Plain-text summary of a [`ProjectStats`].
pub struct Report<'a> {
    stats: &'a ProjectStats,
}

impl<'a> Report<'a> {
    #[must_use]
    pub const fn new(stats: &'a ProjectStats) -> Self {
        Self { stats }
    }

    /// Writes the report into `options.output_dir` and returns its path.
    ///
    /// # Errors
    /// Returns [`EngineError::ReportWrite`] if the file cannot be written.
    pub fn write(
        &self,
        project_dir: &Path,
        started: &DateTime<Local>,
        options: &ReportOptions,
    ) -> Result<PathBuf> {
        let path = options.output_dir.join(report_file_name(project_dir, started));
        fs::write(&path, self.to_string()).map_err(|e| EngineError::ReportWrite {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Report written to {}", path.display());
        Ok(path)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        writeln!(f, "Total files: {}", stats.total_files)?;
        writeln!(f)?;
        writeln!(f, "Language file statistics")?;
        for lang in stats.languages() {
            writeln!(
                f,
                "{}: {} files ({:.2}%)",
                lang.language,
                lang.files,
                round_half_up(stats.percentage(lang.files))
            )?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Language line statistics:")?;
        for lang in stats.languages() {
            writeln!(f, "{}: {} lines", lang.language, lang.lines)?;
        }
        writeln!(f, "Total lines of code: {}", stats.total_lines())?;
        writeln!(
            f,
            "Kilometers of code: {:.2}",
            round_half_up(stats.kilometers_of_code())
        )
    }
}

/// `<directory-basename>_<yyyyMMdd_HHmmss>.txt`
#[must_use]
pub fn report_file_name(project_dir: &Path, started: &DateTime<Local>) -> String {
    format!(
        "{}_{}.txt",
        project_name(project_dir),
        started.format(TIMESTAMP_FORMAT)
    )
}

/// Base name of the project directory.
///
/// Paths such as `.` or `..` have no base name of their own, so the
/// canonical path is consulted before falling back to a fixed name.
#[must_use]
pub fn project_name(project_dir: &Path) -> String {
    if let Some(name) = project_dir.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(project_dir)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn started() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap()
    }

    #[test]
    fn file_name_uses_basename_and_timestamp() {
        assert_eq!(
            report_file_name(Path::new("/work/shop-frontend"), &started()),
            "shop-frontend_20240307_090502.txt"
        );
        assert_eq!(
            report_file_name(Path::new("relative/api/"), &started()),
            "api_20240307_090502.txt"
        );
    }

    #[test]
    fn dot_path_resolves_to_current_directory_name() {
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd
            .file_name()
            .map_or_else(|| FALLBACK_NAME.to_string(), |n| n.to_string_lossy().into_owned());
        assert_eq!(project_name(Path::new(".")), expected);
    }

    #[test]
    fn renders_sections_in_order() {
        let mut stats = ProjectStats::new();
        stats.record("VueTS", 120);
        stats.record("TypeScript", 30);
        stats.record("VueTS", 80);
        stats.record_unclassified();

        let expected = "\
Total files: 4

Language file statistics
VueTS: 2 files (50.00%)
TypeScript: 1 files (25.00%)


Language line statistics:
VueTS: 200 lines
TypeScript: 30 lines
Total lines of code: 230
Kilometers of code: 0.93
";
        assert_eq!(Report::new(&stats).to_string(), expected);
    }

    #[test]
    fn renders_empty_project_without_dividing_by_zero() {
        let stats = ProjectStats::new();
        let expected = "\
Total files: 0

Language file statistics


Language line statistics:
Total lines of code: 0
Kilometers of code: 0.00
";
        assert_eq!(Report::new(&stats).to_string(), expected);
    }

    #[test]
    fn percentage_ties_round_up() {
        let mut stats = ProjectStats::new();
        stats.record("CSS", 4);
        for _ in 0..31 {
            stats.record_unclassified();
        }
        let report = Report::new(&stats).to_string();
        assert!(report.contains("CSS: 1 files (3.13%)\n"), "{report}");
    }

    #[test]
    fn write_creates_file_in_output_dir() {
        let out = tempfile::tempdir().unwrap();
        let mut stats = ProjectStats::new();
        stats.record("CSS", 12);
        let options = ReportOptions {
            output_dir: out.path().to_path_buf(),
        };

        let path = Report::new(&stats)
            .write(Path::new("site"), &started(), &options)
            .unwrap();

        assert_eq!(path, out.path().join("site_20240307_090502.txt"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Total files: 1\n"));
        assert!(content.contains("CSS: 1 files (100.00%)\n"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let out = tempfile::tempdir().unwrap();
        let options = ReportOptions {
            output_dir: out.path().join("missing"),
        };
        let result = Report::new(&ProjectStats::new()).write(Path::new("site"), &started(), &options);
        assert!(matches!(result, Err(EngineError::ReportWrite { .. })));
    }
}
