//! 行提取服务 - 业务能力层
//!
//! 只负责把一行表格变成一条 [`ProblemRecord`]，不关心分组的展开和关闭

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{Config, Selectors};
use crate::error::{AppError, AppResult};
use crate::infrastructure::{wait_until, PageDriver};
use crate::models::{Difficulty, ProblemRecord};
use crate::services::link_classifier::{ClassifiedLinks, LinkClassifier};
use crate::utils::normalize_text;

/// 行提取服务
///
/// 职责：
/// - 等待题目单元格和难度单元格可见
/// - 读取名称、难度、链接
/// - 校验必填字段
/// - 不修改页面状态
pub struct RowExtractor {
    selectors: Selectors,
    classifier: LinkClassifier,
    render_timeout: Duration,
    poll_interval: Duration,
}

impl RowExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            selectors: config.selectors.clone(),
            classifier: LinkClassifier::from_config(config),
            render_timeout: config.render_timeout(),
            poll_interval: config.poll_interval(),
        }
    }

    /// 提取一行
    ///
    /// # 参数
    /// - `driver`: 页面能力
    /// - `row`: 行元素
    /// - `group`: 所属分组名（仅用于错误信息）
    /// - `row_index`: 行号，从 1 开始（仅用于错误信息）
    pub async fn extract<D: PageDriver>(
        &self,
        driver: &D,
        row: &D::Element,
        group: &str,
        row_index: usize,
    ) -> AppResult<ProblemRecord> {
        let cells = driver.find_within(row, &self.selectors.cells).await?;
        let problem_cell = cells
            .get(self.selectors.problem_cell_index)
            .ok_or_else(|| AppError::missing_field(group, row_index, "problem cell"))?;
        let difficulty_cell = cells
            .get(self.selectors.difficulty_cell_index)
            .ok_or_else(|| AppError::missing_field(group, row_index, "difficulty cell"))?;

        let rendered = wait_until(self.render_timeout, self.poll_interval, || async move {
            Ok::<_, AppError>(
                driver.is_visible(problem_cell).await? && driver.is_visible(difficulty_cell).await?,
            )
        })
        .await?;
        if !rendered {
            return Err(AppError::RenderTimeout {
                group: group.to_string(),
                row: row_index,
                timeout: self.render_timeout,
            });
        }

        let name = normalize_text(&driver.text(problem_cell).await?);
        let difficulty_label = self.read_difficulty_label(driver, difficulty_cell).await?;
        let links = self.collect_links(driver, problem_cell, group, row_index).await?;

        if name.is_empty() {
            return Err(AppError::missing_field(group, row_index, "name"));
        }
        if difficulty_label.is_empty() {
            return Err(AppError::missing_field(group, row_index, "difficulty"));
        }
        let difficulty =
            Difficulty::from_label(&difficulty_label).ok_or_else(|| AppError::InvalidDifficulty {
                group: group.to_string(),
                row: row_index,
                value: difficulty_label.clone(),
            })?;
        let primary_link = links
            .primary
            .filter(|link| !link.is_empty())
            .ok_or_else(|| AppError::missing_field(group, row_index, "primary_link"))?;

        debug!("[{}] 第 {} 行: {} ({})", group, row_index, name, difficulty);

        Ok(ProblemRecord {
            name,
            difficulty,
            primary_link,
            secondary_link: links.secondary.unwrap_or_default(),
        })
    }

    /// 读取难度标签文本（小写），单元格内没有标签时视为空
    async fn read_difficulty_label<D: PageDriver>(
        &self,
        driver: &D,
        difficulty_cell: &D::Element,
    ) -> AppResult<String> {
        let labels = driver
            .find_within(difficulty_cell, &self.selectors.difficulty_label)
            .await?;
        match labels.first() {
            Some(label) => Ok(normalize_text(&driver.text(label).await?).to_lowercase()),
            None => Ok(String::new()),
        }
    }

    /// 按文档顺序遍历题目单元格中的链接并分类
    async fn collect_links<D: PageDriver>(
        &self,
        driver: &D,
        problem_cell: &D::Element,
        group: &str,
        row_index: usize,
    ) -> AppResult<ClassifiedLinks> {
        let mut links = ClassifiedLinks::default();

        for anchor in driver.find_within(problem_cell, &self.selectors.anchors).await? {
            let Some(href) = driver.href(&anchor).await? else {
                continue;
            };
            let Some(class) = self.classifier.classify(&href) else {
                continue;
            };
            if let Some(previous) = links.record(class, href) {
                // 同类链接以最后一个为准
                warn!(
                    "[{}] 第 {} 行有多个 {:?} 链接，'{}' 被后面的链接覆盖",
                    group, row_index, class, previous
                );
            }
        }

        Ok(links)
    }
}
