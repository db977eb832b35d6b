//! 名称分类器
use regex::Regex;
use std::fmt;

use crate::rules::{RuleError, RuleSet};

/// 可识别的字母集合：ASCII 字母 + 固定的带重音拉丁字母（含大写）
const WORDED_CLASS: &str = "[a-zA-ZàáâãèéêíïóôõöúüçÀÁÂÃÈÉÊÍÏÓÔÕÖÚÜÇ]";
/// 单词字符：字母、十进制数字、下划线
///
/// 不用 `\w`：它还包含组合符号（U+FE0F、U+20E3）与连接控制符（U+200D），
/// 会把 emoji 的尾部当成单词。
const WORD_RUN: &str = r"[\p{Alphabetic}\p{Nd}_]+";

/// 条目类别，由 name 推导，互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Flagged,
    Worded,
    PureSymbol,
    Sentinel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flagged => "flagged",
            Category::Worded => "worded",
            Category::PureSymbol => "pure_symbol",
            Category::Sentinel => "sentinel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分类器：判定顺序为 保留名 → 标记符号 → 含字母 → 纯符号
#[derive(Debug, Clone)]
pub struct Classifier {
    sentinel: String,
    flag: String,
    worded: Regex,
    word_run: Regex,
}

impl Classifier {
    pub fn from_rules(rules: &RuleSet) -> Result<Self, RuleError> {
        Ok(Self {
            sentinel: rules.sentinel.clone(),
            flag: rules.flag.clone(),
            worded: Regex::new(WORDED_CLASS)?,
            word_run: Regex::new(WORD_RUN)?,
        })
    }

    pub fn classify(&self, name: &str) -> Category {
        // 保留名需完全相等（区分大小写，不去空白）
        if name == self.sentinel {
            return Category::Sentinel;
        }
        if name.contains(self.flag.as_str()) {
            return Category::Flagged;
        }
        if self.worded.is_match(name) {
            return Category::Worded;
        }
        Category::PureSymbol
    }

    /// 名称中最后一段连续单词字符；名称末尾的符号/空白不计入
    pub fn trailing_token<'a>(&self, name: &'a str) -> &'a str {
        self.word_run.find_iter(name).last().map_or("", |m| m.as_str())
    }
}
