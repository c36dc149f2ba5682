//! 分组导航 - 流程层
//!
//! 管理一个分组的 展开 → 读取 → 关闭 交互周期。
//!
//! 状态用类型表达：[`GroupNavigator`] 是"收起"状态，[`ExpandedGroup`] 是"展开"状态。
//! `open` 会消耗导航器，`close` 再把它交还，所以在一个分组展开期间不可能再打开另一个分组：
//!
//! ```compile_fail
//! # use roadmap_scrape::infrastructure::PageDriver;
//! # use roadmap_scrape::workflow::{GroupCtx, GroupNavigator};
//! # async fn demo<D: PageDriver>(navigator: GroupNavigator<'_, D>, a: &D::Element, b: &D::Element) {
//! let expanded = navigator.open(a, GroupCtx::new(1, 2, "A")).await.unwrap();
//! let again = navigator.open(b, GroupCtx::new(2, 2, "B")).await;
//! # }
//! ```
//!
//! 行序列借用展开状态，关闭之后不能再读取：
//!
//! ```compile_fail
//! # use roadmap_scrape::infrastructure::PageDriver;
//! # use roadmap_scrape::workflow::{GroupCtx, GroupNavigator};
//! # async fn demo<D: PageDriver>(navigator: GroupNavigator<'_, D>, a: &D::Element) {
//! let expanded = navigator.open(a, GroupCtx::new(1, 1, "A")).await.unwrap();
//! let rows = expanded.rows().await.unwrap();
//! let navigator = expanded.close().await.unwrap();
//! for _row in rows {}
//! # }
//! ```

use std::marker::PhantomData;

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::PageDriver;
use crate::utils::normalize_text;
use crate::workflow::group_ctx::GroupCtx;

/// 收起状态的分组导航器
pub struct GroupNavigator<'a, D: PageDriver> {
    driver: &'a D,
    rows_selector: String,
    close_selector: String,
    close_label: String,
}

impl<'a, D: PageDriver> GroupNavigator<'a, D> {
    pub fn new(driver: &'a D, config: &Config) -> Self {
        Self {
            driver,
            rows_selector: config.selectors.rows.clone(),
            close_selector: config.selectors.close_buttons.clone(),
            close_label: config.close_label.clone(),
        }
    }

    /// 展开分组（点击分组标签）
    pub async fn open(self, handle: &D::Element, ctx: GroupCtx) -> AppResult<ExpandedGroup<'a, D>> {
        debug!("{} 展开分组", ctx);
        self.driver.click(handle).await?;
        Ok(ExpandedGroup {
            navigator: self,
            ctx,
        })
    }
}

/// 展开状态的分组
pub struct ExpandedGroup<'a, D: PageDriver> {
    navigator: GroupNavigator<'a, D>,
    ctx: GroupCtx,
}

impl<'a, D: PageDriver> ExpandedGroup<'a, D> {
    pub fn ctx(&self) -> &GroupCtx {
        &self.ctx
    }

    /// 当前渲染出来的行（文档顺序），只能在关闭前遍历
    pub async fn rows(&self) -> AppResult<Rows<'_, D::Element>> {
        let rows = self
            .navigator
            .driver
            .find_all(&self.navigator.rows_selector)
            .await?;
        debug!("{} 找到 {} 行", self.ctx, rows.len());
        Ok(Rows {
            inner: rows.into_iter(),
            _expanded: PhantomData,
        })
    }

    /// 关闭分组：点击文字恰好为关闭标签的按钮
    ///
    /// 找不到按钮是致命错误，否则后续分组的展开状态会错乱
    pub async fn close(self) -> AppResult<GroupNavigator<'a, D>> {
        let navigator = self.navigator;
        let buttons = navigator.driver.find_all(&navigator.close_selector).await?;

        for button in &buttons {
            let label = normalize_text(&navigator.driver.text(button).await?);
            if label == navigator.close_label {
                navigator.driver.click(button).await?;
                debug!("{} 已关闭", self.ctx);
                return Ok(navigator);
            }
        }

        Err(AppError::CloseControlNotFound {
            group: self.ctx.name,
            label: navigator.close_label,
        })
    }
}

/// 展开分组中的行序列
///
/// 借用 [`ExpandedGroup`]，分组关闭后不可再用
pub struct Rows<'g, E> {
    inner: std::vec::IntoIter<E>,
    _expanded: PhantomData<&'g ()>,
}

impl<E> Iterator for Rows<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Rows<'_, E> {}
