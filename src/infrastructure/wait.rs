use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::error::AppResult;

/// 有界等待：按固定间隔轮询条件，直到满足或超时
///
/// # 返回
/// - `Ok(true)`: 条件在超时前满足
/// - `Ok(false)`: 超时
/// - `Err(_)`: 条件本身报错（立即返回，不再轮询）
pub async fn wait_until<F, Fut>(timeout: Duration, poll_interval: Duration, mut predicate: F) -> AppResult<bool>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let deadline = Instant::now() + timeout;

    loop {
        if predicate().await? {
            return Ok(true);
        }

        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }

        sleep(poll_interval.min(deadline - now)).await;
    }
}
