//! 备份文档（.dev，JSON）的解析与输出
use serde_json::{Map, Value};
use thiserror::Error;

use crate::sort::LoginSorter;
use crate::types::Entry;

/// 文档处理错误；出现任一错误时不做任何排序
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 文本不是合法 JSON
    #[error("invalid input document: {0}")]
    InvalidInput(#[from] serde_json::Error),
    /// 顶层不是对象，或缺少条目列表键
    #[error("document does not contain the `{key}` key")]
    MissingData { key: String },
    /// 字段类型不符合预期（例如列表元素不是对象）
    #[error("unexpected value at {path}: expected {expected}")]
    UnexpectedType { path: String, expected: &'static str },
    #[error("failed to render document: {0}")]
    Render(#[source] serde_json::Error),
}

/// 单个文档的处理结果
#[derive(Debug, Clone)]
pub struct Organized {
    pub output: String,
    pub entries: usize,
}

/// 解析文档并取出 `key` 对应的条目列表
///
/// 只校验排序会读到的部分：列表本身、元素为对象、`name`/`url` 若存在须为字符串。
pub fn parse_entries(text: &str, key: &str) -> Result<Vec<Entry>, DocumentError> {
    let doc: Value = serde_json::from_str(text)?;
    let missing = || DocumentError::MissingData { key: key.to_string() };
    let list = match doc {
        Value::Object(mut top) => top.remove(key).ok_or_else(missing)?,
        _ => return Err(missing()),
    };
    let items = match list {
        Value::Array(items) => items,
        _ => {
            return Err(DocumentError::UnexpectedType { path: key.to_string(), expected: "an array" })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(fields) => {
                check_text_field(&fields, key, idx, "name")?;
                check_text_field(&fields, key, idx, "url")?;
                Ok(Entry::from(fields))
            }
            _ => Err(DocumentError::UnexpectedType {
                path: format!("{key}[{idx}]"),
                expected: "an object",
            }),
        })
        .collect()
}

fn check_text_field(
    fields: &Map<String, Value>,
    key: &str,
    idx: usize,
    field: &str,
) -> Result<(), DocumentError> {
    match fields.get(field) {
        None | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(DocumentError::UnexpectedType {
            path: format!("{key}[{idx}].{field}"),
            expected: "a string",
        }),
    }
}

/// 输出只包含条目列表的新文档：`{"<key>": [...]}`
pub fn render_document(entries: Vec<Entry>, key: &str, pretty: bool) -> Result<String, DocumentError> {
    let list: Vec<Value> = entries.into_iter().map(|e| Value::Object(e.into_fields())).collect();
    let mut doc = Map::new();
    doc.insert(key.to_string(), Value::Array(list));
    let doc = Value::Object(doc);

    let rendered = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    };
    rendered.map_err(DocumentError::Render)
}

/// 解析 → 排序 → 输出
pub fn organize_str(text: &str, sorter: &LoginSorter, pretty: bool) -> Result<Organized, DocumentError> {
    let key = sorter.rules().wrapper_key.as_str();
    let entries = sorter.sort(parse_entries(text, key)?);
    let count = entries.len();
    let output = render_document(entries, key, pretty)?;
    Ok(Organized { output, entries: count })
}
