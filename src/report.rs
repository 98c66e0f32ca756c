//! 结果输出格式化

use std::time::Duration;

use serde_json::{json, Value};

use crate::extractor::{ForenameDescription, ForenameStats};

/// 统计数据的JSON表示，字段名与站点原始数据保持一致
pub fn stats_to_json(stats: &ForenameStats) -> Value {
    json!({
        "name": stats.name,
        "count-in-world": stats.count_in_world,
        "most-prevalent-country": stats.most_prevalent_country,
    })
}

/// 描述文字的JSON表示
pub fn description_to_json(desc: &ForenameDescription) -> Value {
    json!({
        "name": desc.name,
        "prevalence": desc.prevalence,
        "count-summary": desc.count_summary,
        "text": desc.to_string(),
    })
}

/// 统计数据的文本表示
pub fn format_stats_text(stats: &ForenameStats) -> String {
    format!(
        "📊 名字: {}\n   全球人数: {}\n   最常见国家: {}",
        stats.name,
        group_thousands(stats.count_in_world),
        stats.most_prevalent_country
    )
}

/// 千位分隔，如 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
