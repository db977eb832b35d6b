//! 符号优先级表（Aho-Corasick 扫描）
//!
//! 表中每个符号的位置即其优先级，下标越小越优先。符号可以是多码点字符串
//! （例如带变体选择符的 emoji），因此按子串而非单个 char 匹配。

use aho_corasick::{AhoCorasick, MatchKind};

use crate::rules::RuleError;

/// 名称的优先级键
///
/// - `Ranked`：从左到右出现的已识别符号下标序列，按字典序比较（前缀更小）
/// - `Unranked`：名称中没有任何已识别符号，排在所有 `Ranked` 之后
///
/// 变体声明顺序即比较顺序，派生的 `Ord` 依赖于此。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityKey {
    Ranked(Vec<usize>),
    Unranked,
}

#[derive(Debug, Clone)]
pub struct PriorityTable {
    glyphs: Vec<String>,
    ac: AhoCorasick,
}

impl PriorityTable {
    pub fn new(glyphs: &[String]) -> Result<Self, RuleError> {
        // leftmost-first：同一位置上表中靠前的符号优先
        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(glyphs)?;
        Ok(Self { glyphs: glyphs.to_vec(), ac })
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// 某个符号在表中的下标
    pub fn rank_of(&self, glyph: &str) -> Option<usize> {
        self.glyphs.iter().position(|g| g == glyph)
    }

    pub fn key(&self, name: &str) -> PriorityKey {
        let ranks: Vec<usize> = self
            .ac
            .find_iter(name)
            .map(|m| m.pattern().as_usize())
            .collect();
        if ranks.is_empty() {
            PriorityKey::Unranked
        } else {
            PriorityKey::Ranked(ranks)
        }
    }
}
