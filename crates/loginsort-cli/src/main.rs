use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use loginsort_core::{build_sorter, organize_path, parse_entries, SortOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "loginsort", version, about = "Organize the login list of .dev backup files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 整理单个 .dev 文件或目录下的全部 .dev 文件
    Sort {
        /// 输入文件或目录
        #[arg(long)]
        input: PathBuf,

        /// 输出文件（单文件）或输出目录（目录输入）；默认写在输入旁边，文件名加 _organized
        #[arg(long)]
        output: Option<PathBuf>,

        /// 规则文件路径（TOML）；默认使用内置规则
        #[arg(long)]
        rules: Option<PathBuf>,

        /// 线程数（仅目录输入时并行；"auto"=CPU 核心数，或正整数）
        #[arg(long, default_value = "auto", value_parser = parse_threads)]
        threads: Threads,

        /// 单行输出（默认 2 空格缩进）
        #[arg(long)]
        compact: bool,
    },
    /// 按排序结果逐行打印条目类别（JSON Lines），用于核对规则
    Inspect {
        /// 输入文件
        #[arg(long)]
        input: PathBuf,

        /// 规则文件路径（TOML）
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { input, output, rules, threads, compact } => {
            info!(?input, ?output, "starting sort");

            let opts = SortOptions {
                output,
                rules_path: rules,
                pretty: !compact,
                threads: threads.count(),
            };
            let report = organize_path(&input, &opts).context("organize failed")?;

            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok(entries) => info!(input = ?outcome.input, output = ?outcome.output, entries, "organized"),
                    Err(err) => error!(input = ?outcome.input, "skipped: {err:#}"),
                }
            }
            let stats = &report.stats;
            info!(
                files_organized = stats.files_organized,
                files_failed = stats.files_failed,
                entries_sorted = stats.entries_sorted,
                "sort finished"
            );
            if report.outcomes.is_empty() {
                info!(?input, "no .dev files found");
            }
            if stats.files_failed > 0 {
                bail!("{} file(s) could not be organized", stats.files_failed);
            }
        }
        Commands::Inspect { input, rules } => {
            let opts = SortOptions { rules_path: rules, ..SortOptions::default() };
            let sorter = build_sorter(&opts)?;
            let text = std::fs::read_to_string(&input).with_context(|| format!("read {}", input.display()))?;
            let entries = parse_entries(&text, &sorter.rules().wrapper_key).context("parse document")?;

            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for (position, entry) in sorter.sort(entries).iter().enumerate() {
                let line = serde_json::json!({
                    "position": position,
                    "category": sorter.classify(entry.name()).as_str(),
                    "name": entry.name(),
                    "url": entry.url(),
                });
                serde_json::to_writer(&mut out, &line)?;
                writeln!(out)?;
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// 日志输出到 stderr，stdout 留给 inspect；默认只显示本程序的 info 日志
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("loginsort=info,loginsort_core=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--threads` 的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Threads {
    Auto,
    Fixed(usize),
}

impl Threads {
    /// None 交给核心库按 CPU 核数决定
    fn count(self) -> Option<usize> {
        match self {
            Threads::Auto => None,
            Threads::Fixed(n) => Some(n),
        }
    }
}

fn parse_threads(s: &str) -> Result<Threads, String> {
    if s.eq_ignore_ascii_case("auto") {
        return Ok(Threads::Auto);
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(Threads::Fixed(n)),
        _ => Err(format!("expected \"auto\" or a positive integer, got {s:?}")),
    }
}
