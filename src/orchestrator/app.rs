//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：加载规范顺序、启动或连接浏览器、等待页面稳定
//! 2. **运行抓取**：委托 [`CurriculumAggregator`] 完成分组遍历
//! 3. **输出结果**：抓取完整成功后才写出课程表
//! 4. **资源管理**：持有 Browser 和 ChromiumPage，确保生命周期正确

use std::time::Instant;

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::ChromiumPage;
use crate::models::{load_canonical_order_or_default, Curriculum};
use crate::orchestrator::CurriculumAggregator;
use crate::services::CurriculumWriter;
use crate::utils::logging::{log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    /// 由本程序启动的浏览器在结束时关闭，连接的浏览器保持原样
    owns_browser: bool,
    page: ChromiumPage,
    aggregator: CurriculumAggregator,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let order = load_canonical_order_or_default(config.canonical_order_file.as_deref())
            .await
            .context("加载规范分组顺序失败")?;

        let (browser, page, owns_browser) = match config.browser_debug_port {
            Some(port) => {
                let (browser, page) =
                    browser::connect_to_browser_and_page(port, &config.roadmap_url)
                        .await
                        .with_context(|| format!("无法连接到浏览器 (端口: {})", port))?;
                (browser, page, false)
            }
            None => {
                let (browser, page) = browser::launch_headless_browser(&config)
                    .await
                    .context("无法启动浏览器")?;
                (browser, page, true)
            }
        };

        // 等待页面异步渲染稳定
        debug!("等待页面稳定 {}ms", config.settle_delay_ms);
        sleep(config.settle_delay()).await;

        let aggregator = CurriculumAggregator::new(&config, order);

        Ok(Self {
            config,
            browser,
            owns_browser,
            page: ChromiumPage::new(page),
            aggregator,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<Curriculum> {
        let started = Instant::now();

        let curriculum = self
            .aggregator
            .run(&self.page)
            .await
            .with_context(|| format!("抓取路线图失败: {}", self.config.roadmap_url))?;

        let writer = CurriculumWriter::from_option(self.config.output_file.as_deref());
        writer
            .write(&curriculum)
            .await
            .context("输出课程表失败")?;

        print_final_stats(&curriculum, writer.target(), started.elapsed());

        Ok(curriculum)
    }

    /// 释放浏览器资源
    pub async fn shutdown(mut self) {
        if !self.owns_browser {
            return;
        }
        if let Err(e) = self.browser.close().await {
            warn!("⚠️ 关闭浏览器失败: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("⚠️ 等待浏览器退出失败: {}", e);
        }
    }
}
