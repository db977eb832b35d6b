//! 排序规则集加载（TOML）
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// 保留名称：始终排在最后
pub const DEFAULT_SENTINEL: &str = "Teste";
/// 标记符号（👎）：非保留条目中最优先
pub const DEFAULT_FLAG: &str = "👎";
/// 文档中条目列表所在的键
pub const DEFAULT_WRAPPER_KEY: &str = "multi_users";
/// 符号优先级表，靠前者优先
pub const DEFAULT_PRIORITY: [&str; 6] = ["❌", "📺", "🔞", "🟢", "💧", "🔥"];

/// 规则集加载/构建错误
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to read rule file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid rule set: {0}")]
    Invalid(String),
    #[error("failed to build pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to build glyph matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// 规则文件结构（所有字段可选，缺省取内置值）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    #[serde(default)]
    sentinel: Option<String>,
    #[serde(default)]
    flag: Option<String>,
    #[serde(default)]
    wrapper_key: Option<String>,
    #[serde(default)]
    priority: Option<Vec<String>>,
}

/// 归一化后的规则集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub sentinel: String,
    pub flag: String,
    pub wrapper_key: String,
    pub priority: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            flag: DEFAULT_FLAG.to_string(),
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
            priority: DEFAULT_PRIORITY.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl RuleSet {
    /// 从 TOML 文本解析规则集，并做合法性校验
    pub fn from_toml_str(txt: &str) -> Result<Self, RuleError> {
        let parsed: RuleFile = toml::from_str(txt)?;
        let defaults = Self::default();
        let rules = Self {
            sentinel: parsed.sentinel.unwrap_or(defaults.sentinel),
            flag: parsed.flag.unwrap_or(defaults.flag),
            wrapper_key: parsed.wrapper_key.unwrap_or(defaults.wrapper_key),
            priority: parsed.priority.unwrap_or(defaults.priority),
        };
        rules.validate()?;
        Ok(rules)
    }

    /// 空符号会匹配任意名称，重复符号会让优先级含义不明，均视为配置错误
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.flag.is_empty() {
            return Err(RuleError::Invalid("flag glyph must not be empty".into()));
        }
        if self.wrapper_key.is_empty() {
            return Err(RuleError::Invalid("wrapper_key must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for (idx, glyph) in self.priority.iter().enumerate() {
            if glyph.is_empty() {
                return Err(RuleError::Invalid(format!("priority glyph #{idx} is empty")));
            }
            if !seen.insert(glyph.as_str()) {
                return Err(RuleError::Invalid(format!("priority glyph {glyph:?} listed twice")));
            }
        }
        Ok(())
    }
}

/// 从规则文件加载规则集
pub fn load_rule_set(path: &Path) -> Result<RuleSet, RuleError> {
    let txt = std::fs::read_to_string(path)?;
    RuleSet::from_toml_str(&txt)
}
