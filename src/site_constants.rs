/// 目标站点配置常量
///
/// 该文件定义了forebears.io相关的地址、页面结构和请求配置，方便统一管理和维护

/// 站点地址配置
pub mod site_config {
    /// 默认站点地址
    pub const DEFAULT_BASE_URL: &str = "https://forebears.io";

    /// 默认语言；英文页面的URL不带语言前缀
    pub const DEFAULT_LANGUAGE: &str = "en";

    /// 名字页面的路径段
    pub const FORENAMES_PATH: &str = "forenames";

    /// 站点提供的页面语言
    pub const SUPPORTED_LANGUAGES: &[&str] = &[
        "en", "ru", "de", "es", "fr", "it", "pt", "nl", "pl", "sv",
        "ja", "zh", "ko", "ar", "tr", "uk",
    ];
}

/// 页面结构配置
///
/// 页面结构由第三方控制，变化时只需修改这里
pub mod page_selectors {
    /// 信息块的完整class
    pub const INFO_BLOCK_CLASS: &str = "content-box-content medium-text tablet-slim";

    /// 最常见国家
    pub const COUNTRY_TAG: &str = "div";
    pub const COUNTRY_CLASS: &str = "detail";

    /// 全球人数
    pub const COUNT_TAG: &str = "span";
    pub const COUNT_CLASS: &str = "accent";

    /// 全球常见度统计
    pub const PREVALENCE_TAG: &str = "div";
    pub const PREVALENCE_CLASS: &str = "statistic-single";

    /// 人数说明文字
    pub const COUNT_SUMMARY_TAG: &str = "p";
    pub const COUNT_SUMMARY_CLASS: &str = "text-center";
}

/// 请求配置
pub mod request_config {
    /// 请求超时时间（秒）
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// 随机选择的浏览器User-Agent
    pub const USER_AGENTS: &[&str] = &[
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
    ];
}

/// 随机选择一个User-Agent
pub fn random_user_agent() -> &'static str {
    use rand::prelude::IndexedRandom;

    let mut rng = rand::rng();
    request_config::USER_AGENTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(request_config::USER_AGENTS[0])
}

/// 验证语言代码是否支持
pub fn is_supported_language(lang: &str) -> bool {
    site_config::SUPPORTED_LANGUAGES.contains(&lang)
}

/// 验证站点地址是否有效
pub fn is_valid_base_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
