use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::AppResult;

/// 连接到已运行的浏览器（远程调试端口）并打开路线图页面
pub async fn connect_to_browser_and_page(port: u16, target_url: &str) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        e
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = open_page(&browser, target_url).await?;
    Ok((browser, page))
}

/// 新建标签页并导航到目标地址
pub(crate) async fn open_page(browser: &Browser, target_url: &str) -> AppResult<Page> {
    debug!("创建新页面并导航到: {}", target_url);
    let page = browser.new_page(target_url).await.map_err(|e| {
        error!("导航到 {} 失败: {}", target_url, e);
        e
    })?;
    page.wait_for_navigation().await?;
    info!("✓ 已导航到: {}", target_url);
    Ok(page)
}
