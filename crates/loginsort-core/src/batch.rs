//! 文件/目录整理主流程与并行调度
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::document::organize_str;
use crate::options::{SortOptions, SortStats};
use crate::rules::{load_rule_set, RuleSet};
use crate::sort::LoginSorter;

/// 备份文件扩展名
pub const BACKUP_EXTENSION: &str = "dev";
/// 整理后文件名的后缀（位于扩展名之前）
pub const ORGANIZED_SUFFIX: &str = "_organized";

/// 单个文件的整理结果；成功时为条目数
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<usize>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// 按输入文件名排序，与完成先后无关
    pub outcomes: Vec<FileOutcome>,
    pub stats: SortStats,
}

/// 按选项加载规则并构建排序器
pub fn build_sorter(opts: &SortOptions) -> Result<LoginSorter> {
    let rules = match &opts.rules_path {
        Some(path) => load_rule_set(path).with_context(|| format!("load rules from {}", path.display()))?,
        None => RuleSet::default(),
    };
    LoginSorter::new(rules).context("build sorter")
}

/// `backup.dev` → `backup_organized.dev`
pub fn organized_file_name(path: &Path) -> Option<OsString> {
    let mut name = path.file_stem()?.to_os_string();
    name.push(ORGANIZED_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}

/// 整理单个文件并写出，返回条目数
pub fn organize_file(input: &Path, output: &Path, sorter: &LoginSorter, pretty: bool) -> Result<usize> {
    let text = std::fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let organized = organize_str(&text, sorter, pretty).with_context(|| format!("organize {}", input.display()))?;
    std::fs::write(output, organized.output).with_context(|| format!("write {}", output.display()))?;
    Ok(organized.entries)
}

/// 整理一个文件，或目录下（深度 1）的全部 `.dev` 文件
///
/// 目录模式下单个文件失败不影响其他文件，失败记录在报告中。
pub fn organize_path(input: &Path, opts: &SortOptions) -> Result<BatchReport> {
    let sorter = build_sorter(opts)?;
    let meta = std::fs::metadata(input).with_context(|| format!("stat {}", input.display()))?;

    let jobs = if meta.is_dir() {
        directory_jobs(input, opts.output.as_deref())?
    } else {
        let output = match &opts.output {
            Some(out) => out.clone(),
            None => {
                let name = organized_file_name(input)
                    .ok_or_else(|| anyhow!("input path has no file name: {}", input.display()))?;
                input.with_file_name(name)
            }
        };
        vec![(input.to_path_buf(), output)]
    };

    // 决策：线程数>1 且文件数>1 时并行，否则串行
    let threads = opts.threads.unwrap_or_else(num_cpus::get);
    let outcomes = if threads > 1 && jobs.len() > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("build thread pool")?;
        pool.install(|| {
            jobs.par_iter()
                .map(|(inp, out)| run_job(inp, out, &sorter, opts.pretty))
                .collect::<Vec<_>>()
        })
    } else {
        jobs.iter()
            .map(|(inp, out)| run_job(inp, out, &sorter, opts.pretty))
            .collect()
    };

    let mut stats = SortStats::default();
    for outcome in &outcomes {
        match &outcome.result {
            Ok(n) => {
                stats.files_organized += 1;
                stats.entries_sorted += n;
            }
            Err(_) => stats.files_failed += 1,
        }
    }
    Ok(BatchReport { outcomes, stats })
}

fn run_job(input: &Path, output: &Path, sorter: &LoginSorter, pretty: bool) -> FileOutcome {
    FileOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        result: organize_file(input, output, sorter, pretty),
    }
}

/// 收集目录下待整理的文件，按文件名排序保证结果顺序稳定
fn directory_jobs(dir: &Path, out_dir: Option<&Path>) -> Result<Vec<(PathBuf, PathBuf)>> {
    let out_dir = out_dir.unwrap_or(dir).to_path_buf();
    std::fs::create_dir_all(&out_dir).with_context(|| format!("create output dir {}", out_dir.display()))?;

    let mut files: Vec<PathBuf> = vec![];
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        // 列目录失败时整体报错，避免返回一个看似“没有文件”的空报告
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        if entry.file_type().is_file() && is_pending_backup(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .filter_map(|path| {
            let name = organized_file_name(&path)?;
            let output = out_dir.join(name);
            Some((path, output))
        })
        .collect())
}

/// `.dev` 且不是之前整理产出的文件
fn is_pending_backup(path: &Path) -> bool {
    let is_backup = path.extension().is_some_and(|ext| ext == BACKUP_EXTENSION);
    let organized = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.ends_with(ORGANIZED_SUFFIX));
    is_backup && !organized
}
