// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: project_analyzer <project_directory>";

#[derive(Parser, Debug)]
#[command(
    name = "project_analyzer",
    version,
    about = "言語別のファイル数/行数を集計してレポートを書き出す"
)]
pub struct Args {
    /// 解析対象のプロジェクトディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub project_dir: PathBuf,
}
