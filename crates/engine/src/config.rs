use derive_builder::Builder;
use std::path::PathBuf;

/// Directory names that are never descended into, at any depth.
pub const IGNORED_DIRS: &[&str] = &["node_modules", "__pycache__", ".idea", ".git", "public"];

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub root: PathBuf,
    #[builder(default = "default_ignore_dirs()")]
    pub ignore_dirs: Vec<String>,
    /// Symlinked directories are followed; `ignore` reports loops as walk errors.
    #[builder(default = "true")]
    pub follow_links: bool,
}

fn default_ignore_dirs() -> Vec<String> {
    IGNORED_DIRS.iter().map(|d| (*d).to_string()).collect()
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match &self.root {
            Some(root) if root.as_os_str().is_empty() => {
                Err("root path must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl Config {
    /// Configuration with the built-in ignore list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_dirs: default_ignore_dirs(),
            follow_links: true,
        }
    }

    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }
}
