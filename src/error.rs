//! 统一错误处理模块
//!
//! 提供姓名统计查询的统一错误类型定义。转写本身不会失败，
//! 这里的错误全部来自请求、解析和slug校验环节。

// 标准库导入
use std::fmt;

/// 姓名统计查询统一错误类型
#[derive(Debug)]
pub enum NameStatsError {
    /// 网络请求失败
    RequestFailed {
        /// 请求地址
        url: String,
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// HTML或字段值解析失败
    ParseFailed {
        /// 具体错误信息
        details: String,
    },

    /// 页面中找不到预期的元素：姓名不存在或页面结构已变化
    NameNotFound {
        /// 查询使用的slug
        name: String,
    },

    /// slug校验失败，尚未发出任何请求
    InvalidSlug {
        /// 被拒绝的slug
        slug: String,
        /// 拒绝原因
        reason: String,
    },

    /// 输入验证错误（URL、配置等）
    InvalidInput {
        /// 输入值
        input: String,
        /// 验证失败原因
        reason: String,
    },
}

impl fmt::Display for NameStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStatsError::RequestFailed { url, message, status_code } => {
                if let Some(code) = status_code {
                    write!(f, "请求失败 [{}] {}: {}", code, url, message)
                } else {
                    write!(f, "请求失败 {}: {}", url, message)
                }
            },
            NameStatsError::ParseFailed { details } => {
                write!(f, "HTML解析失败: {}", details)
            },
            NameStatsError::NameNotFound { name } => {
                write!(f, "姓名 \"{}\" 不存在或页面结构已变化", name)
            },
            NameStatsError::InvalidSlug { slug, reason } => {
                write!(f, "无效的slug '{}': {}", slug, reason)
            },
            NameStatsError::InvalidInput { input, reason } => {
                write!(f, "输入验证失败 [{}]: {}", input, reason)
            },
        }
    }
}

impl std::error::Error for NameStatsError {}

/// 姓名统计结果类型别名
pub type Result<T> = std::result::Result<T, NameStatsError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! name_stats_error {
    (request, $url:expr, $msg:expr) => {
        $crate::error::NameStatsError::RequestFailed {
            url: $url.to_string(),
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (request, $url:expr, $msg:expr, $code:expr) => {
        $crate::error::NameStatsError::RequestFailed {
            url: $url.to_string(),
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (parse, $details:expr) => {
        $crate::error::NameStatsError::ParseFailed {
            details: $details.to_string(),
        }
    };
    (not_found, $name:expr) => {
        $crate::error::NameStatsError::NameNotFound {
            name: $name.to_string(),
        }
    };
    (invalid_slug, $slug:expr, $reason:expr) => {
        $crate::error::NameStatsError::InvalidSlug {
            slug: $slug.to_string(),
            reason: $reason.to_string(),
        }
    };
    (invalid_input, $input:expr, $reason:expr) => {
        $crate::error::NameStatsError::InvalidInput {
            input: $input.to_string(),
            reason: $reason.to_string(),
        }
    };
}

/// 从reqwest::Error转换为NameStatsError
impl From<reqwest::Error> for NameStatsError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        NameStatsError::RequestFailed {
            url,
            message: error.to_string(),
            status_code,
        }
    }
}
