//! 整理选项与统计信息（模块）
use std::path::PathBuf;

/// 整理选项
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// 输出路径：单文件输入时为输出文件，目录输入时为输出目录；为空则写在输入旁边
    pub output: Option<PathBuf>,
    /// 规则文件路径（TOML）；为空则使用内置规则
    pub rules_path: Option<PathBuf>,
    /// 是否以 2 空格缩进输出
    pub pretty: bool,
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            output: None,
            rules_path: None,
            pretty: true,
            threads: None,
        }
    }
}

/// 整理统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortStats {
    pub files_organized: usize,
    pub files_failed: usize,
    pub entries_sorted: usize,
}
