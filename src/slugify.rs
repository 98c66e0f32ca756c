//! 西里尔字母转写模块
//!
//! 将俄语姓名转换为forebears.io URL中使用的拉丁字母slug，
//! 例如 "Максим" -> "maksim"。
//!
//! 转写采用最长匹配：先查两个字符的组合，再查单个字符，
//! 其余ASCII字母和数字原样保留，其他字符一律变成连字符。

// 标准库导入
use std::collections::HashMap;

// 第三方crate导入
use once_cell::sync::Lazy;
use regex::Regex;

/// 俄语字母转写表（键均为小写）
static TRANSLIT_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("а", "a"), ("б", "b"), ("в", "v"), ("г", "g"), ("д", "d"), ("е", "e"), ("ё", "yo"),
        ("ж", "zh"), ("з", "z"), ("и", "i"), ("й", "y"), ("к", "k"), ("л", "l"), ("м", "m"),
        ("н", "n"), ("о", "o"), ("п", "p"), ("р", "r"), ("с", "s"), ("т", "t"), ("у", "u"),
        ("ф", "f"), ("х", "h"), ("ц", "ts"), ("ч", "ch"), ("ш", "sh"), ("щ", "sch"),
        ("ъ", ""), ("ы", "y"), ("ь", ""), ("э", "e"), ("ю", "yu"), ("я", "ya"),
        // 双字符组合
        ("вя", "vya"), ("ля", "lya"), ("ня", "nya"),
    ])
});

static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// 将任意文本转写为小写拉丁字母slug
///
/// 对任何输入都不会失败，空输入返回空字符串。
/// 结果只包含 `[a-z0-9-]`，不会出现连续连字符，首尾也不会是连字符。
///
/// # Examples
///
/// ```rust
/// use name_stats::slugify::transliterate;
///
/// assert_eq!(transliterate("Ярослав"), "yaroslav");
/// assert_eq!(transliterate("Анна Мария"), "anna-mariya");
/// ```
pub fn transliterate(text: &str) -> String {
    transliterate_with(&TRANSLIT_TABLE, text)
}

/// 使用指定转写表进行转写
fn transliterate_with(table: &HashMap<&'static str, &'static str>, text: &str) -> String {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut raw = String::with_capacity(chars.len() * 2);
    let mut pair = String::with_capacity(8);
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            pair.clear();
            pair.push(chars[i]);
            pair.push(chars[i + 1]);
            if let Some(mapped) = table.get(pair.as_str()) {
                raw.push_str(mapped);
                i += 2;
                continue;
            }
        }

        let ch = chars[i];
        let mut buf = [0u8; 4];
        if let Some(mapped) = table.get(&*ch.encode_utf8(&mut buf)) {
            raw.push_str(mapped);
        } else if ch.is_ascii_alphanumeric() {
            raw.push(ch);
        } else {
            raw.push('-');
        }
        i += 1;
    }

    normalize_hyphens(&raw)
}

/// 合并连续连字符并去掉首尾连字符
fn normalize_hyphens(raw: &str) -> String {
    HYPHEN_RUNS
        .replace_all(raw, "-")
        .trim_matches('-')
        .to_string()
}
