//! 配置管理模块
//!
//! 提供CLI参数解析和查询客户端配置管理功能

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::site_constants::{random_user_agent, request_config, site_config};

/// 查询客户端配置结构体
///
/// 支持Builder模式进行链式配置。
///
/// # Examples
///
/// ```rust
/// use name_stats::config::NameStatisticsConfig;
///
/// let config = NameStatisticsConfig::new()
///     .language("ru")
///     .with_timeout(10)
///     .auto_slug_cyrillic(true);
/// assert_eq!(config.language_code(), "ru");
/// ```
#[derive(Debug, Clone)]
pub struct NameStatisticsConfig {
    /// 描述文字的语言代码 (如: en, ru, de)
    language: String,
    /// 站点地址
    base_url: String,
    /// 请求使用的User-Agent
    user_agent: String,
    /// 请求超时时间（秒）
    timeout_secs: u64,
    /// 是否先把输入的西里尔字母姓名转写为slug
    auto_slug_cyrillic: bool,
}

impl NameStatisticsConfig {
    /// 创建新的配置实例
    ///
    /// 默认值：
    /// - 语言: 英文 ("en")
    /// - 站点: https://forebears.io
    /// - User-Agent: 随机浏览器字符串
    /// - 超时: 30秒
    /// - 自动转写: 关闭
    pub fn new() -> Self {
        Self {
            language: site_config::DEFAULT_LANGUAGE.to_string(),
            base_url: site_config::DEFAULT_BASE_URL.to_string(),
            user_agent: random_user_agent().to_string(),
            timeout_secs: request_config::DEFAULT_TIMEOUT_SECONDS,
            auto_slug_cyrillic: false,
        }
    }

    /// 获取语言代码
    pub fn language_code(&self) -> &str {
        &self.language
    }

    /// 获取站点地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 获取User-Agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// 获取超时时间（秒）
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// 检查是否启用自动转写
    pub fn is_auto_slug_enabled(&self) -> bool {
        self.auto_slug_cyrillic
    }

    /// 设置语言代码
    pub fn language(mut self, lang: &str) -> Self {
        self.language = lang.to_string();
        self
    }

    /// 设置站点地址
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// 设置User-Agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// 设置超时时间
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// 设置是否自动转写西里尔字母
    pub fn auto_slug_cyrillic(mut self, enable: bool) -> Self {
        self.auto_slug_cyrillic = enable;
        self
    }
}

impl Default for NameStatisticsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(author, version, about = "姓名统计查询CLI工具 - 查询名字在全球的人数和分布", long_about = None)]
pub struct Cli {
    /// 要查询的名字或slug (如: maksim，配合 --auto-slug 可直接输入 Максим)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// 描述文字的语言代码 (如: en, ru, de)
    #[arg(short, long, default_value = site_config::DEFAULT_LANGUAGE)]
    pub lang: String,

    /// 自动把西里尔字母名字转写为slug
    #[arg(long)]
    pub auto_slug: bool,

    /// 只输出转写后的slug，不发出请求
    #[arg(long)]
    pub slug_only: bool,

    /// 查询描述文字而不是统计数据
    #[arg(short, long)]
    pub description: bool,

    /// 以JSON格式输出
    #[arg(long)]
    pub json: bool,

    /// 站点地址
    #[arg(long, default_value = site_config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// 自定义User-Agent字符串 (默认随机)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出结果)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// 根据命令行参数生成客户端配置
    pub fn to_config(&self) -> NameStatisticsConfig {
        let mut config = NameStatisticsConfig::new()
            .language(&self.lang)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout)
            .auto_slug_cyrillic(self.auto_slug);

        if let Some(ua) = &self.user_agent {
            config = config.with_user_agent(ua);
        }

        config
    }
}
