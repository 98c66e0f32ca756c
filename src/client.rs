//! 姓名统计查询客户端
//!
//! 组合slug转写、URL构建、页面抓取和字段提取，对外提供
//! [`NameStatistics::get_forename_stats`] 和
//! [`NameStatistics::get_forename_description`] 两个查询入口。

// 第三方crate导入
use tracing::{debug, info, warn};

// 本地模块导入
use crate::config::NameStatisticsConfig;
use crate::error::Result;
use crate::extractor::{
    extract_forename_description, extract_forename_stats, ForenameDescription, ForenameStats,
};
use crate::fetcher::PageFetcher;
use crate::name_stats_error;
use crate::site_constants::{is_supported_language, is_valid_base_url, site_config};
use crate::slugify::transliterate;

/// 检查slug是否只由拉丁字母组成
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphabetic())
}

/// 构建名字页面地址
///
/// 英文页面没有语言前缀：
/// - `en` -> `{base}/forenames/{slug}`
/// - 其他 -> `{base}/{lang}/forenames/{slug}`
pub fn build_url(base: &str, language_code: &str, slug: &str) -> String {
    let base = base.trim_end_matches('/');
    let slug = slug.to_lowercase();

    if language_code.is_empty() || language_code == site_config::DEFAULT_LANGUAGE {
        format!("{}/{}/{}", base, site_config::FORENAMES_PATH, slug)
    } else {
        format!("{}/{}/{}/{}", base, language_code, site_config::FORENAMES_PATH, slug)
    }
}

/// forebears.io 姓名统计客户端
pub struct NameStatistics {
    config: NameStatisticsConfig,
    fetcher: PageFetcher,
}

impl NameStatistics {
    /// 创建新的客户端
    pub fn new(config: NameStatisticsConfig) -> Result<Self> {
        if !is_valid_base_url(config.base_url()) {
            return Err(name_stats_error!(
                invalid_input,
                config.base_url(),
                "站点地址必须以http://或https://开头"
            ));
        }
        if !is_supported_language(config.language_code()) {
            warn!("⚠️  未知的语言代码: {}", config.language_code());
        }

        let fetcher = PageFetcher::from_config(&config)?;
        Ok(Self { config, fetcher })
    }

    /// 使用默认配置创建客户端
    pub fn with_defaults() -> Result<Self> {
        Self::new(NameStatisticsConfig::default())
    }

    /// 获取当前配置
    pub fn config(&self) -> &NameStatisticsConfig {
        &self.config
    }

    /// 把输入的名字转换为经过校验的slug
    ///
    /// 启用自动转写时先把西里尔字母转写为拉丁字母。校验失败时不会发出请求。
    /// 保留调用方输入的大小写，URL中的小写化由 [`build_url`] 负责。
    pub fn resolve_slug(&self, name: &str) -> Result<String> {
        let slug = if self.config.is_auto_slug_enabled() {
            let slug = transliterate(name);
            debug!("转写: {} -> {}", name, slug);
            slug
        } else {
            name.trim().to_string()
        };

        if !is_valid_slug(&slug) {
            return Err(name_stats_error!(
                invalid_slug,
                slug,
                "slug只能包含拉丁字母 (a-z)，不能有空格或特殊字符"
            ));
        }

        Ok(slug)
    }

    /// 构建名字对应的页面地址
    pub fn forename_url(&self, name: &str) -> Result<String> {
        let slug = self.resolve_slug(name)?;
        Ok(build_url(self.config.base_url(), self.config.language_code(), &slug))
    }

    /// 查询名字的统计数据
    pub async fn get_forename_stats(&self, name: &str) -> Result<ForenameStats> {
        let slug = self.resolve_slug(name)?;
        let url = build_url(self.config.base_url(), self.config.language_code(), &slug);

        info!("🔍 查询名字统计: {}", slug);
        let content = self.fetcher.fetch(&url).await?;
        extract_forename_stats(&content, &slug)
    }

    /// 查询名字的描述文字
    pub async fn get_forename_description(&self, name: &str) -> Result<ForenameDescription> {
        let slug = self.resolve_slug(name)?;
        let url = build_url(self.config.base_url(), self.config.language_code(), &slug);

        info!("🔍 查询名字描述: {} ({})", slug, self.config.language_code());
        let content = self.fetcher.fetch(&url).await?;
        extract_forename_description(&content, &slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameStatsError;
    use crate::test_support::serve_once;

    const NAME_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="content-box-content medium-text tablet-slim">
  <div class="statistic-single">is the 412th most common forename in the world</div>
  <p class="text-center">It is borne by around 1,234,567 people</p>
  <div class="statistic">
    <div class="detail">Russia</div>
    <span class="accent">1,234,567</span>
  </div>
</div>
</body></html>"#;

    fn client_for(base: &str, language: &str) -> NameStatistics {
        let config = NameStatisticsConfig::new()
            .language(language)
            .with_base_url(base)
            .with_user_agent("test-agent")
            .with_timeout(5);
        NameStatistics::new(config).unwrap()
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("maksim"));
        assert!(is_valid_slug("Maksim"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("anna-mariya"));
        assert!(!is_valid_slug("maksim2"));
        assert!(!is_valid_slug("Максим"));
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("https://forebears.io", "en", "Maksim"),
            "https://forebears.io/forenames/maksim"
        );
        assert_eq!(
            build_url("https://forebears.io/", "ru", "maksim"),
            "https://forebears.io/ru/forenames/maksim"
        );
        assert_eq!(
            build_url("https://forebears.io", "", "maksim"),
            "https://forebears.io/forenames/maksim"
        );
    }

    #[test]
    fn test_resolve_slug_plain() {
        let client = NameStatistics::with_defaults().unwrap();
        assert_eq!(client.resolve_slug("Maksim").unwrap(), "Maksim");
        assert_eq!(client.resolve_slug(" maksim ").unwrap(), "maksim");
        assert!(matches!(
            client.resolve_slug("Максим"),
            Err(NameStatsError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_resolve_slug_auto_cyrillic() {
        let config = NameStatisticsConfig::new().auto_slug_cyrillic(true);
        let client = NameStatistics::new(config).unwrap();
        assert_eq!(client.resolve_slug("Максим").unwrap(), "maksim");
        assert_eq!(client.resolve_slug("Ярослав").unwrap(), "yaroslav");
        assert!(matches!(
            client.resolve_slug("Анна Мария"),
            Err(NameStatsError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_forename_url() {
        let config = NameStatisticsConfig::new()
            .language("ru")
            .auto_slug_cyrillic(true);
        let client = NameStatistics::new(config).unwrap();
        assert_eq!(
            client.forename_url("Максим").unwrap(),
            "https://forebears.io/ru/forenames/maksim"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = NameStatisticsConfig::new().with_base_url("forebears.io");
        assert!(matches!(
            NameStatistics::new(config),
            Err(NameStatsError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_forename_stats() {
        let (base, server) = serve_once("200 OK", NAME_PAGE).await;
        let client = client_for(&base, "en");

        let stats = client.get_forename_stats("Maksim").await.unwrap();
        assert_eq!(
            stats,
            ForenameStats {
                name: "Maksim".to_string(),
                count_in_world: 1_234_567,
                most_prevalent_country: "Russia".to_string(),
            }
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /forenames/maksim "));
    }

    #[tokio::test]
    async fn test_get_forename_description() {
        let (base, server) = serve_once("200 OK", NAME_PAGE).await;
        let client = client_for(&base, "ru");

        let desc = client.get_forename_description("Maksim").await.unwrap();
        assert_eq!(
            desc.to_string(),
            "Name Maksim is the 412th most common forename in the world\nIt is borne by around 1,234,567 people"
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /ru/forenames/maksim "));
    }

    #[tokio::test]
    async fn test_get_forename_stats_not_found_status() {
        let (base, _server) = serve_once("404 Not Found", "missing").await;
        let client = client_for(&base, "en");

        let result = client.get_forename_stats("qwzx").await;
        assert!(matches!(
            result,
            Err(NameStatsError::RequestFailed { status_code: Some(404), .. })
        ));
    }

    #[tokio::test]
    async fn test_get_forename_stats_page_without_block() {
        let (base, _server) = serve_once("200 OK", "<html><body>nothing here</body></html>").await;
        let client = client_for(&base, "en");

        match client.get_forename_stats("qwzx").await {
            Err(NameStatsError::NameNotFound { name }) => assert_eq!(name, "qwzx"),
            other => panic!("Wrong result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_slug_fails_before_request() {
        // 无法连接的地址：如果发出了请求会得到RequestFailed
        let config = NameStatisticsConfig::new().with_base_url("http://127.0.0.1:9");
        let client = NameStatistics::new(config).unwrap();
        let result = client.get_forename_stats("max 2").await;
        assert!(matches!(result, Err(NameStatsError::InvalidSlug { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_site() {
        let config = NameStatisticsConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(2);
        let client = NameStatistics::new(config).unwrap();
        let result = client.get_forename_description("maksim").await;
        assert!(matches!(result, Err(NameStatsError::RequestFailed { .. })));
    }
}
