//! 页面抓取模块
//!
//! 此模块负责：
//! - 校验待抓取的URL
//! - 使用reqwest发出单次GET请求并返回页面HTML
//!
//! 不做缓存和重试，失败直接返回给调用方。

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

// 本地模块导入
use crate::config::NameStatisticsConfig;
use crate::error::{NameStatsError, Result};
use crate::name_stats_error;

/// 页面抓取器
///
/// 内部持有一个 `reqwest::Client`，多次抓取复用同一连接池。
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    user_agent: String,
}

impl PageFetcher {
    /// 创建新的抓取器
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| name_stats_error!(invalid_input, "http client", e))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// 根据客户端配置创建抓取器
    pub fn from_config(config: &NameStatisticsConfig) -> Result<Self> {
        Self::new(config.user_agent(), config.timeout_secs())
    }

    /// 抓取页面并返回HTML内容
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = validate_url(url)?;
        info!("🕷️ 开始抓取页面: {}", url);
        debug!("User-Agent: {}", self.user_agent);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(name_stats_error!(
                request,
                url,
                status.canonical_reason().unwrap_or("HTTP error"),
                status.as_u16()
            ));
        }

        let content = response.text().await?;
        info!("✅ 页面抓取完成，大小: {} 字节", content.len());

        Ok(content)
    }
}

/// 验证URL格式，只接受http/https
pub fn validate_url(input: &str) -> Result<Url> {
    if input.is_empty() {
        return Err(name_stats_error!(invalid_input, input, "URL不能为空"));
    }

    let url = Url::parse(input)
        .map_err(|e| NameStatsError::InvalidInput {
            input: input.to_string(),
            reason: format!("解析URL失败: {}", e),
        })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(name_stats_error!(invalid_input, input, "URL必须以http://或https://开头"));
    }

    Ok(url)
}
