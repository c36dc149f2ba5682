use anyhow::Result;
use roadmap_scrape::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    let result = app.run().await;
    app.shutdown().await;

    result.map(|_| ())
}
