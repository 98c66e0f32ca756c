use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use name_stats::config::Cli;
use name_stats::report::{description_to_json, format_duration, format_stats_text, stats_to_json};
use name_stats::slugify::transliterate;
use name_stats::utils::init_logging;
use name_stats::NameStatistics;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    // 只转写，不发请求
    if cli.slug_only {
        println!("{}", transliterate(&cli.name));
        return Ok(());
    }

    if !cli.quiet {
        info!("🚀 开始查询: {}", cli.name);
        info!("🌐 语言: {}", cli.lang);
    }

    let start = Instant::now();

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            if !cli.quiet {
                info!("✅ 查询完成！耗时: {}", format_duration(start.elapsed()));
            }
        }
        Err(e) => {
            error!("❌ 查询失败: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// 执行查询并返回待输出的文本
async fn run(cli: &Cli) -> Result<String> {
    let client = NameStatistics::new(cli.to_config()).context("创建查询客户端失败")?;

    if cli.description {
        let desc = client
            .get_forename_description(&cli.name)
            .await
            .with_context(|| format!("获取名字描述失败: {}", cli.name))?;

        if cli.json {
            Ok(serde_json::to_string_pretty(&description_to_json(&desc))?)
        } else {
            Ok(desc.to_string())
        }
    } else {
        let stats = client
            .get_forename_stats(&cli.name)
            .await
            .with_context(|| format!("获取名字统计失败: {}", cli.name))?;

        if cli.json {
            Ok(serde_json::to_string_pretty(&stats_to_json(&stats))?)
        } else {
            Ok(format_stats_text(&stats))
        }
    }
}
