//! Extension to language classification.

use std::fs;
use std::path::Path;

/// Extension reserved for single-file components that are refined by content.
pub const VUE_EXTENSION: &str = "vue";
pub const VUE_TS: &str = "VueTS";
pub const VUE_JS: &str = "VueJS";

/// Lowercase extension to language label.
pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("java", "java"),
    (VUE_EXTENSION, "Vue"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
];

/// Script tags that mark a Vue component as TypeScript.
pub const VUE_TS_MARKERS: &[&str] = &[
    r#"<script setup lang="ts">"#,
    r#"<script lang="ts">"#,
    r#"<script lang="ts" setup>"#,
];

/// Substring after the last `.` of the file name, or `""` when there is none.
///
/// Unlike [`Path::extension`], a leading dot counts: `.bashrc` yields `bashrc`.
#[must_use]
pub fn extension_of(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|name| name.rfind('.').map(|i| &name[i + 1..]))
        .unwrap_or("")
}

#[must_use]
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}

/// Final label for a file whose extension is already known to map to `language`.
///
/// Only `.vue` files are read; everything else keeps its table label.
#[must_use]
pub fn classify(path: &Path, ext: &str, language: &'static str) -> &'static str {
    if ext != VUE_EXTENSION {
        return language;
    }
    if is_typescript_vue(path) { VUE_TS } else { VUE_JS }
}

/// Unreadable files are treated as plain JavaScript components.
fn is_typescript_vue(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => contains_ts_marker(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::warn!("Failed to read '{}' for script detection: {e}", path.display());
            false
        }
    }
}

#[must_use]
pub fn contains_ts_marker(content: &str) -> bool {
    VUE_TS_MARKERS.iter().any(|m| content.contains(m))
}
