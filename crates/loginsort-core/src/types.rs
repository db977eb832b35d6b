//! 公共类型（对外暴露）
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 单个登录条目（对应 multi_users 数组的一个元素）
///
/// 保留原始对象的全部字段及其顺序，排序只读取 `name` 与 `url`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    /// 仅含 name/url 的条目
    pub fn new(name: &str, url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.into()));
        fields.insert("url".into(), Value::String(url.into()));
        Self(fields)
    }

    /// 缺失或非字符串时视为空串
    pub fn name(&self) -> &str {
        self.text("name")
    }

    pub fn url(&self) -> &str {
        self.text("url")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or("")
    }
}

impl From<Map<String, Value>> for Entry {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
