// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A throwaway project tree plus a separate working directory for reports.
pub struct TempWorkspace {
    project: TempDir,
    cwd: TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            project: tempfile::Builder::new().prefix("sample_app").tempdir().unwrap(),
            cwd: tempfile::tempdir().unwrap(),
        }
    }

    /// ファイルを作成
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.project.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn project(&self) -> &Path {
        self.project.path()
    }

    pub fn cwd(&self) -> &Path {
        self.cwd.path()
    }

    /// Reports written to the working directory, sorted by name.
    pub fn reports(&self) -> Vec<PathBuf> {
        let mut reports: Vec<_> = fs::read_dir(self.cwd())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|e| e == "txt"))
            .collect();
        reports.sort();
        reports
    }

    pub fn only_report(&self) -> String {
        let reports = self.reports();
        assert_eq!(reports.len(), 1, "expected exactly one report: {reports:?}");
        fs::read_to_string(&reports[0]).unwrap()
    }
}
