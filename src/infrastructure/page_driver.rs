//! 页面能力接口 - 基础设施层
//!
//! 上层只通过这个 trait 操作页面：查找元素、点击、判断可见性、读取文本和链接。
//! 真实实现是 [`ChromiumPage`](super::ChromiumPage)，测试里可以换成内存中的假 DOM。

use crate::error::AppResult;

/// 页面自动化能力
///
/// 所有方法都只读或只做单次交互，不包含等待策略；
/// 有界等待由 [`wait_until`](super::wait_until) 在调用方组合。
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    /// 元素句柄
    type Element;

    /// 在整个文档中按选择器查找，返回文档顺序
    async fn find_all(&self, selector: &str) -> AppResult<Vec<Self::Element>>;

    /// 在某个元素内部按选择器查找，返回文档顺序
    async fn find_within(
        &self,
        parent: &Self::Element,
        selector: &str,
    ) -> AppResult<Vec<Self::Element>>;

    async fn click(&self, element: &Self::Element) -> AppResult<()>;

    async fn is_visible(&self, element: &Self::Element) -> AppResult<bool>;

    /// 元素的显示文本（未渲染时为空字符串）
    async fn text(&self, element: &Self::Element) -> AppResult<String>;

    /// 超链接的目标地址（解析后的绝对地址），没有时为 None
    async fn href(&self, element: &Self::Element) -> AppResult<Option<String>>;
}
