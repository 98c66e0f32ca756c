//! Name Stats - 姓名统计查询工具库
//!
//! 这个库提供了西里尔字母姓名转写、forebears.io页面抓取、统计字段提取和结果格式化等核心功能。

pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod report;
pub mod site_constants;
pub mod slugify;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use client::{build_url, is_valid_slug, NameStatistics};
pub use error::{NameStatsError, Result};
pub use extractor::{ForenameDescription, ForenameStats};
pub use slugify::transliterate;
