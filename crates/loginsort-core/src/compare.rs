//! 排序键与比较规则
//!
//! 比较规则按顺序逐级判定，前一级相等才看下一级：
//! 1. 类别：标记（👎）→ 含字母 → 纯符号 → 保留名
//! 2. 类别内部：
//!    - 标记：name 升序，url 降序
//!    - 含字母：末尾单词降序 → 符号优先级升序 → url 降序
//!    - 纯符号：符号优先级升序 → url 降序
//!    - 保留名：url 降序
//!
//! 规则直接编码为 `SortKey` 的派生 `Ord`：变体顺序即类别顺序，字段顺序即
//! 类别内部的比较顺序，降序字段用 `Reverse` 包装。

use std::cmp::{Ordering, Reverse};

use crate::classify::{Category, Classifier};
use crate::priority::{PriorityKey, PriorityTable};
use crate::types::Entry;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Flagged {
        name: &'a str,
        url: Reverse<&'a str>,
    },
    Worded {
        token: Reverse<&'a str>,
        glyphs: PriorityKey,
        url: Reverse<&'a str>,
    },
    PureSymbol {
        glyphs: PriorityKey,
        url: Reverse<&'a str>,
    },
    Sentinel {
        url: Reverse<&'a str>,
    },
}

impl SortKey<'_> {
    pub fn category(&self) -> Category {
        match self {
            SortKey::Flagged { .. } => Category::Flagged,
            SortKey::Worded { .. } => Category::Worded,
            SortKey::PureSymbol { .. } => Category::PureSymbol,
            SortKey::Sentinel { .. } => Category::Sentinel,
        }
    }
}

/// 为单个条目构建排序键（一次排序内每个条目只构建一次）
pub(crate) fn build_key<'a>(
    classifier: &Classifier,
    table: &PriorityTable,
    entry: &'a Entry,
) -> SortKey<'a> {
    let name = entry.name();
    let url = Reverse(entry.url());
    match classifier.classify(name) {
        Category::Sentinel => SortKey::Sentinel { url },
        Category::Flagged => SortKey::Flagged { name, url },
        Category::Worded => SortKey::Worded {
            token: Reverse(classifier.trailing_token(name)),
            glyphs: table.key(name),
            url,
        },
        Category::PureSymbol => SortKey::PureSymbol {
            glyphs: table.key(name),
            url,
        },
    }
}

pub(crate) fn compare_entries(
    classifier: &Classifier,
    table: &PriorityTable,
    a: &Entry,
    b: &Entry,
) -> Ordering {
    build_key(classifier, table, a).cmp(&build_key(classifier, table, b))
}
