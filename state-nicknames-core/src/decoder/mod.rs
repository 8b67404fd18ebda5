//! 负载解码
//!
//! 将原始字节（JSON 对象数组）解码为 `StateRecord` 列表。
//! 键名先经过 snake_case 转换，再通过显式的字段映射表取值。
//! 解码是全有或全无的：任何一个条目出错，整个负载都被丢弃。

mod key_strategy;

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::StateRecord;
use crate::utils::log_sanitizer::payload_for_log;

pub use key_strategy::convert_from_snake_case;

/// 字段映射表
///
/// 记录每个字段从哪个（转换后的）源键读取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    /// 提供 `name` 的键
    pub name: String,
    /// 提供 `nickname` 的键
    pub nickname: String,
}

impl FieldMap {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
        }
    }
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::new("Names", "Nicknames")
    }
}

/// 记录解码器
#[derive(Debug, Clone, Default)]
pub struct RecordDecoder {
    fields: FieldMap,
}

impl RecordDecoder {
    #[must_use]
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// 解码整个负载
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<StateRecord>, DecodeError> {
        let entries: Vec<Map<String, Value>> = serde_json::from_slice(payload).map_err(|e| {
            log::debug!("Raw payload: {}", payload_for_log(payload));
            DecodeError::Malformed(e.to_string())
        })?;

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| self.decode_entry(index, entry))
            .collect()
    }

    fn decode_entry(
        &self,
        index: usize,
        entry: Map<String, Value>,
    ) -> Result<StateRecord, DecodeError> {
        let mut normalized: Map<String, Value> = entry
            .into_iter()
            .map(|(key, value)| (convert_from_snake_case(&key).into_owned(), value))
            .collect();

        let name = take_string(&mut normalized, index, &self.fields.name)?;
        let nickname = take_string(&mut normalized, index, &self.fields.nickname)?;
        Ok(StateRecord::new(name, nickname))
    }
}

fn take_string(
    entry: &mut Map<String, Value>,
    index: usize,
    key: &str,
) -> Result<String, DecodeError> {
    match entry.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::WrongType {
            index,
            key: key.to_string(),
        }),
        None => Err(DecodeError::MissingField {
            index,
            key: key.to_string(),
        }),
    }
}
