//! 页面字段提取模块
//!
//! 提供HTML解析、按标签和class查找元素以及提取统计字段的功能

// 标准库导入
use std::fmt;

// 第三方crate导入
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

// 本地模块导入
use crate::error::{NameStatsError, Result};
use crate::name_stats_error;
use crate::site_constants::page_selectors;

/// 名字统计数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForenameStats {
    /// 查询使用的slug
    pub name: String,
    /// 全球人数
    pub count_in_world: u64,
    /// 最常见的国家
    pub most_prevalent_country: String,
}

/// 名字描述文字（语言由配置决定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForenameDescription {
    pub name: String,
    /// 全球常见度统计，如 "is the 1,024th most common forename in the world"
    pub prevalence: String,
    /// 人数说明
    pub count_summary: String,
}

impl fmt::Display for ForenameDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name {} {}\n{}", self.name, self.prevalence, self.count_summary)
    }
}

/// 解析HTML为DOM
pub fn parse_html(content: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut content.as_bytes())
        .map_err(|e| name_stats_error!(parse, e))
}

/// 从页面中提取统计数据
pub fn extract_forename_stats(content: &str, name: &str) -> Result<ForenameStats> {
    let dom = parse_html(content)?;
    let block = find_info_block(&dom, name)?;

    let most_prevalent_country = required_text(
        &block,
        page_selectors::COUNTRY_TAG,
        page_selectors::COUNTRY_CLASS,
        name,
    )?;
    let count_text = required_text(
        &block,
        page_selectors::COUNT_TAG,
        page_selectors::COUNT_CLASS,
        name,
    )?;
    let count_in_world = parse_count(&count_text)?;

    debug!("提取结果: count={}, country={}", count_in_world, most_prevalent_country);

    Ok(ForenameStats {
        name: name.to_string(),
        count_in_world,
        most_prevalent_country,
    })
}

/// 从页面中提取描述文字
pub fn extract_forename_description(content: &str, name: &str) -> Result<ForenameDescription> {
    let dom = parse_html(content)?;
    let block = find_info_block(&dom, name)?;

    let prevalence = required_text(
        &block,
        page_selectors::PREVALENCE_TAG,
        page_selectors::PREVALENCE_CLASS,
        name,
    )?;
    let count_summary = required_text(
        &block,
        page_selectors::COUNT_SUMMARY_TAG,
        page_selectors::COUNT_SUMMARY_CLASS,
        name,
    )?;

    Ok(ForenameDescription {
        name: name.to_string(),
        prevalence,
        count_summary,
    })
}

/// 解析带千位分隔符的人数，如 "1,234,567"
pub fn parse_count(text: &str) -> Result<u64> {
    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    digits
        .parse::<u64>()
        .map_err(|e| name_stats_error!(parse, format!("无法解析人数 '{}': {}", text.trim(), e)))
}

fn find_info_block(dom: &RcDom, name: &str) -> Result<Handle> {
    find_first(&dom.document, |node| {
        is_element(node, "div") && class_attr(node).as_deref() == Some(page_selectors::INFO_BLOCK_CLASS)
    })
    .ok_or_else(|| name_stats_error!(not_found, name))
}

fn required_text(root: &Handle, tag: &str, class: &str, name: &str) -> Result<String> {
    find_first(root, |node| is_element(node, tag) && has_class(node, class))
        .map(|node| text_content(&node))
        .ok_or_else(|| {
            debug!("未找到元素 {}.{}", tag, class);
            NameStatsError::NameNotFound { name: name.to_string() }
        })
}

/// 按文档顺序（深度优先、先序）查找第一个满足条件的节点
fn find_first<F>(root: &Handle, predicate: F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            return Some(node);
        }
        // 逆序入栈，保证先访问靠前的子节点
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    None
}

fn is_element(node: &Handle, tag: &str) -> bool {
    match node.data {
        NodeData::Element { ref name, .. } => name.local.as_ref() == tag,
        _ => false,
    }
}

fn class_attr(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == "class")
            .map(|attr| attr.value.trim().to_string()),
        _ => None,
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    class_attr(node)
        .map(|value| value.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// 拼接所有后代文本节点
fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_string()
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}
