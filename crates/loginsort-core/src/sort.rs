//! 条目排序器
use std::cmp::Ordering;

use crate::classify::{Category, Classifier};
use crate::compare::{build_key, compare_entries, SortKey};
use crate::priority::PriorityTable;
use crate::rules::{RuleError, RuleSet};
use crate::types::Entry;

/// 按规则集对登录条目排序
///
/// 构建后只读，可跨线程共享（批处理时每个文件一个任务）。
#[derive(Debug, Clone)]
pub struct LoginSorter {
    rules: RuleSet,
    classifier: Classifier,
    table: PriorityTable,
}

impl LoginSorter {
    pub fn new(rules: RuleSet) -> Result<Self, RuleError> {
        rules.validate()?;
        let classifier = Classifier::from_rules(&rules)?;
        let table = PriorityTable::new(&rules.priority)?;
        Ok(Self { rules, classifier, table })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify(&self, name: &str) -> Category {
        self.classifier.classify(name)
    }

    pub fn sort_key<'a>(&self, entry: &'a Entry) -> SortKey<'a> {
        build_key(&self.classifier, &self.table, entry)
    }

    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        compare_entries(&self.classifier, &self.table, a, b)
    }

    /// 稳定排序：比较结果相等的条目保持输入中的相对顺序
    pub fn sort(&self, entries: Vec<Entry>) -> Vec<Entry> {
        // 先对下标排序（键借用条目），再按下标搬移条目
        let order: Vec<usize> = {
            let keys: Vec<SortKey<'_>> = entries.iter().map(|e| self.sort_key(e)).collect();
            let mut order: Vec<usize> = (0..entries.len()).collect();
            order.sort_by(|&i, &j| keys[i].cmp(&keys[j]));
            order
        };

        let mut slots: Vec<Option<Entry>> = entries.into_iter().map(Some).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }
}
