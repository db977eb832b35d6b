//! 登录备份整理核心库
//!
//! 设计要点：
//! - 排序规则编码为每个条目一次性构建的 `SortKey`，其派生 `Ord` 即完整的比较级联，
//!   保证全序（反对称、可传递）。
//! - 使用稳定排序，比较相等的条目保持输入顺序。
//! - 条目按 `serde_json::Map`（保留字段顺序）原样搬移，只改变条目之间的顺序。
//! - 所有符号匹配都在解码后的 UTF-8 文本上进行，不对字节做匹配。

mod batch;
mod classify;
mod compare;
mod document;
mod options;
mod priority;
mod rules;
mod sort;
mod types;

pub use batch::{
    build_sorter, organize_file, organize_path, organized_file_name, BatchReport, FileOutcome,
    BACKUP_EXTENSION, ORGANIZED_SUFFIX,
};
pub use classify::{Category, Classifier};
pub use compare::SortKey;
pub use document::{organize_str, parse_entries, render_document, DocumentError, Organized};
pub use options::{SortOptions, SortStats};
pub use priority::{PriorityKey, PriorityTable};
pub use rules::{
    load_rule_set, RuleError, RuleSet, DEFAULT_FLAG, DEFAULT_PRIORITY, DEFAULT_SENTINEL,
    DEFAULT_WRAPPER_KEY,
};
pub use sort::LoginSorter;
pub use types::Entry;
