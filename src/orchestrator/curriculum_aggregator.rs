//! 课程表汇总器 - 编排层
//!
//! ## 职责
//!
//! 1. **发现分组**：按文档顺序找到所有分组标签
//! 2. **逐个处理**：展开 → 提取每一行 → 关闭，严格串行
//! 3. **规范排序**：按规范顺序重排分组
//!
//! 任何一步失败都会中止整次运行，已收集的分组直接丢弃。

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageDriver;
use crate::models::{CanonicalOrder, Curriculum, GroupRecord, ProblemRecord};
use crate::services::RowExtractor;
use crate::utils::logging::{log_group_complete, log_group_start, log_groups_discovered};
use crate::utils::normalize_text;
use crate::workflow::{ExpandedGroup, GroupCtx, GroupNavigator};

/// 课程表汇总器
pub struct CurriculumAggregator {
    config: Config,
    order: CanonicalOrder,
    extractor: RowExtractor,
}

impl CurriculumAggregator {
    pub fn new(config: &Config, order: CanonicalOrder) -> Self {
        Self {
            config: config.clone(),
            order,
            extractor: RowExtractor::new(config),
        }
    }

    pub fn order(&self) -> &CanonicalOrder {
        &self.order
    }

    /// 遍历页面上的所有分组，返回排好序的课程表
    pub async fn run<D: PageDriver>(&self, driver: &D) -> AppResult<Curriculum> {
        let handles = driver
            .find_all(&self.config.selectors.group_labels)
            .await?;

        let mut names = Vec::with_capacity(handles.len());
        for handle in &handles {
            names.push(normalize_text(&driver.text(handle).await?));
        }
        log_groups_discovered(&names);

        let total = handles.len();
        let mut groups = Vec::with_capacity(total);
        let mut navigator = GroupNavigator::new(driver, &self.config);

        for (index, (handle, name)) in handles.iter().zip(names).enumerate() {
            let ctx = GroupCtx::new(index + 1, total, name);
            log_group_start(&ctx);

            let expanded = navigator.open(handle, ctx).await?;
            let questions = self.extract_rows(driver, &expanded).await?;
            let ctx = expanded.ctx().clone();
            navigator = expanded.close().await?;

            log_group_complete(&ctx, questions.len());
            groups.push(GroupRecord {
                group_name: ctx.name,
                questions,
            });
        }

        let curriculum = sort_groups(&self.order, groups)?;
        info!(
            "✓ 已按规范顺序排列 {} 个分组, 共 {} 道题目",
            curriculum.groups().len(),
            curriculum.total_questions()
        );
        Ok(curriculum)
    }

    /// 提取展开分组中的所有行（表格行顺序）
    async fn extract_rows<D: PageDriver>(
        &self,
        driver: &D,
        expanded: &ExpandedGroup<'_, D>,
    ) -> AppResult<Vec<ProblemRecord>> {
        let group = &expanded.ctx().name;
        let rows = expanded.rows().await?;

        let mut questions = Vec::with_capacity(rows.len());
        for (index, row) in rows.enumerate() {
            let question = self.extractor.extract(driver, &row, group, index + 1).await?;
            questions.push(question);
        }
        Ok(questions)
    }
}

/// 按规范排名升序排列分组；任何一个分组不在规范顺序中都会失败
pub fn sort_groups(order: &CanonicalOrder, groups: Vec<GroupRecord>) -> AppResult<Curriculum> {
    let mut ranked = groups
        .into_iter()
        .map(|group| -> AppResult<(usize, GroupRecord)> {
            Ok((order.rank_of(&group.group_name)?, group))
        })
        .collect::<AppResult<Vec<_>>>()?;

    ranked.sort_by_key(|(rank, _)| *rank);

    Ok(Curriculum::from_sorted(
        ranked.into_iter().map(|(_, group)| group).collect(),
    ))
}
