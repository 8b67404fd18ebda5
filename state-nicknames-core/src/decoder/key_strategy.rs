//! snake_case 键名转换

use std::borrow::Cow;

/// 将 snake_case 键名转换为驼峰形式
///
/// - 不含内部 `_` 的键原样返回
/// - 保留开头和结尾的 `_`
/// - 第一个单词全部小写，其后每个单词首字母大写、其余小写
///
/// `state_nick_name` → `stateNickName`，`Display_Name` → `displayName`，
/// `Names` → `Names`，`_a_b_` → `_aB_`
pub fn convert_from_snake_case(key: &str) -> Cow<'_, str> {
    let trimmed = key.trim_matches('_');
    if trimmed.is_empty() || !trimmed.contains('_') {
        return Cow::Borrowed(key);
    }

    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut words = trimmed.split('_').filter(|w| !w.is_empty());
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);
    if let Some(first) = words.next() {
        out.push_str(&first.to_lowercase());
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out.push_str(&key[key.len() - trailing..]);

    Cow::Owned(out)
}
