//! Chromium 页面 - 基础设施层
//!
//! 持有唯一的 page 资源，通过 CDP 实现 [`PageDriver`] 能力

use chromiumoxide::element::Element;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::PageDriver;

/// 判断元素是否真正渲染出来（display / visibility / 尺寸）
const IS_VISIBLE_JS: &str = r#"
function() {
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') {
        return false;
    }
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}
"#;

/// 读取解析后的 href（相对地址会被浏览器补全）
const HREF_JS: &str = r#"
function() {
    return this.href ? String(this.href) : null;
}
"#;

/// Chromium 页面
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露查找 / 点击 / 可见性 / 文本能力
/// - 不认识分组和题目
pub struct ChromiumPage {
    page: Page,
}

impl ChromiumPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 在元素上执行 JS 函数并返回 JSON 结果
    async fn eval_on(&self, element: &Element, function_declaration: &str) -> AppResult<JsonValue> {
        let returns = element.call_js_fn(function_declaration, false).await?;
        Ok(returns.result.value.unwrap_or(JsonValue::Null))
    }
}

impl PageDriver for ChromiumPage {
    type Element = Element;

    async fn find_all(&self, selector: &str) -> AppResult<Vec<Element>> {
        let elements = self.page.find_elements(selector).await?;
        debug!("选择器 '{}' 匹配到 {} 个元素", selector, elements.len());
        Ok(elements)
    }

    async fn find_within(&self, parent: &Element, selector: &str) -> AppResult<Vec<Element>> {
        Ok(parent.find_elements(selector).await?)
    }

    async fn click(&self, element: &Element) -> AppResult<()> {
        element.click().await?;
        Ok(())
    }

    async fn is_visible(&self, element: &Element) -> AppResult<bool> {
        let value = self.eval_on(element, IS_VISIBLE_JS).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn text(&self, element: &Element) -> AppResult<String> {
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    async fn href(&self, element: &Element) -> AppResult<Option<String>> {
        let value = self.eval_on(element, HREF_JS).await?;
        Ok(value.as_str().map(str::to_string))
    }
}
