/// Average characters on one editor line.
pub const CHARS_PER_LINE: u32 = 47;
/// Width of that line on screen, in centimeters.
pub const SCREEN_LINE_CM: f64 = 19.0;

/// Files and lines attributed to one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: &'static str,
    pub files: usize,
    pub lines: usize,
}

/// Accumulated result of one traversal.
///
/// Languages keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total_files: usize,
    languages: Vec<LanguageStats>,
}

impl ProjectStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A file that counts toward the total but maps to no language.
    pub fn record_unclassified(&mut self) {
        self.total_files += 1;
    }

    pub fn record(&mut self, language: &'static str, lines: usize) {
        self.total_files += 1;
        if let Some(entry) = self.languages.iter_mut().find(|s| s.language == language) {
            entry.files += 1;
            entry.lines += lines;
        } else {
            self.languages.push(LanguageStats {
                language,
                files: 1,
                lines,
            });
        }
    }

    #[must_use]
    pub fn languages(&self) -> &[LanguageStats] {
        &self.languages
    }

    #[must_use]
    pub fn language(&self, name: &str) -> Option<&LanguageStats> {
        self.languages.iter().find(|s| s.language == name)
    }

    #[must_use]
    pub fn classified_files(&self) -> usize {
        self.languages.iter().map(|s| s.files).sum()
    }

    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.languages.iter().map(|s| s.lines).sum()
    }

    /// Share of all files, in percent. Zero when no files were seen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, files: usize) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        files as f64 / self.total_files as f64 * 100.0
    }

    #[must_use]
    pub fn kilometers_of_code(&self) -> f64 {
        lines_to_kilometers(self.total_lines())
    }
}

/// Rounds to two decimals with ties going up (`3.125` becomes `3.13`).
///
/// `{:.2}` alone rounds ties to even, so report values go through this first.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a line count into the report's "kilometers of code".
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lines_to_kilometers(lines: usize) -> f64 {
    let chars_per_unit = f64::from(CHARS_PER_LINE) * 100.0 / SCREEN_LINE_CM;
    lines as f64 / chars_per_unit
}
