//! Command surface and user-facing message layer.
//!
//! The library never prints; this module turns [`SiftEvent`]s into the
//! tool's Chinese console output and maps the exit-code policy:
//! invalid input paths print an error and still exit 0 (historical
//! behavior), only interrupts and unexpected errors exit 1.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use docsift::{DestConfig, SiftConfig, SiftError, SiftEvent, SourceConfig, Strategy, output};

/// 非投资建议 docx 文件复制工具
#[derive(Debug, Parser)]
#[command(name = "docsift", version, about)]
pub struct Cli {
    /// 单个 docx 文件路径（省略时递归扫描源目录）
    file: Option<PathBuf>,

    /// 源目录
    #[arg(long, default_value = "results")]
    source: PathBuf,

    /// 目标基目录（自动追加 YYYY.MM.DD 日期子目录）
    #[arg(long, default_value = "results")]
    dest: PathBuf,

    /// 排除模式（glob 格式，可重复）
    #[arg(long)]
    exclude: Vec<String>,

    /// 强制使用文件名判断策略
    #[arg(long)]
    by_filename: bool,

    /// 以 JSON 输出运行报告（关闭逐文件消息）
    #[arg(long)]
    json: bool,

    /// 日志详细程度（-v info，-vv debug）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
}

fn print_event(event: &SiftEvent<'_>) {
    match event {
        SiftEvent::DestinationReady { dir } => println!("📁 目标目录: {}", dir.display()),
        SiftEvent::Scanned { count } => println!("🔍 找到 {count} 个docx文件"),
        SiftEvent::SingleFile { source } => println!("🔍 处理单个文件: {}", file_name(source)),
        SiftEvent::Copied { source, .. } => println!("✅ 已复制: {}", file_name(source)),
        SiftEvent::Skipped { source } => {
            println!("⏭️  跳过 (以'投资建议'开头): {}", file_name(source));
        }
        SiftEvent::ReadIssue { source, message } => {
            println!(
                "{}",
                format!("⚠️  无法读取文件 {}: {message}", source.display()).yellow()
            );
        }
        SiftEvent::CopyFailed { source, message } => {
            println!(
                "{}",
                format!("❌ 处理文件时出错 {}: {message}", file_name(source)).red()
            );
        }
        _ => {}
    }
}

fn print_banner() {
    println!("📄 docsift 非投资建议docx文件复制工具");
    println!("{}", "=".repeat(50));
    if !docsift::content_available() {
        println!("⚠️  未启用 docx 解析能力，将使用文件名方式判断");
        println!();
    }
}

/// Run the CLI to completion.
///
/// # Errors
///
/// Returns unexpected errors only; `main` prints them and exits 1. Invalid
/// input paths are reported on stdout and produce `Ok(())` (exit 0).
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        ctrlc::set_handler(move || cancel.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
    }

    if !cli.json {
        print_banner();
    }

    let mut source = SourceConfig::default();
    source.root = cli.source;
    source.single_file = cli.file;
    source.exclude = cli.exclude;

    let mut dest = DestConfig::default();
    dest.base = cli.dest;

    let mut config = SiftConfig::default();
    if cli.by_filename {
        config.strategy = Strategy::Filename;
    }

    let quiet = cli.json;
    let result = docsift::sift_fs(&source, &dest, &config, &cancel, |event| {
        if !quiet {
            print_event(event);
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(SiftError::MissingSourceDir(path)) => {
            // Historical behavior: report the bad input, exit 0.
            println!("{}", format!("❌ 源目录不存在: {}", path.display()).red());
            return Ok(());
        }
        Err(SiftError::InvalidSingleFile(path)) => {
            println!(
                "{}",
                format!("❌ 无效的文件路径或非docx文件: {}", path.display()).red()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if report.interrupted {
        eprintln!("\n{}", "⚠️  用户中断操作".yellow());
        std::process::exit(1);
    }

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        output::write_json(&report, &mut stdout)?;
    } else {
        output::write_human(&report, &mut stdout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_historical_paths() {
        let cli = Cli::parse_from(["docsift"]);
        assert_eq!(cli.source, PathBuf::from("results"));
        assert_eq!(cli.dest, PathBuf::from("results"));
        assert!(cli.file.is_none());
        assert!(!cli.by_filename);
    }

    #[test]
    fn test_positional_file_argument() {
        let cli = Cli::parse_from(["docsift", "results/C.docx"]);
        assert_eq!(cli.file, Some(PathBuf::from("results/C.docx")));
    }
}
