//! 记录类型

/// 行文本中名称与别名之间的分隔符
pub const ROW_SEPARATOR: &str = " - ";

/// 一条州名记录（名称 + 别名）
///
/// 解码后不可变，按负载中的数组顺序保存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    name: String,
    nickname: String,
}

impl StateRecord {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
        }
    }

    /// 显示名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 显示别名
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// 行文本：`"<name> - <nickname>"`
    pub fn row_text(&self) -> String {
        format!("{}{ROW_SEPARATOR}{}", self.name, self.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_joins_with_separator() {
        let record = StateRecord::new("Oklahoma", "Sooner State");
        assert_eq!(record.row_text(), "Oklahoma - Sooner State");
    }

    #[test]
    fn row_text_keeps_empty_fields() {
        let record = StateRecord::new("", "");
        assert_eq!(record.row_text(), " - ");
    }
}
