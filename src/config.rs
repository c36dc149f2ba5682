use std::time::Duration;

/// 页面结构选择器
///
/// 路线图页面的 DOM 结构，按结构而非按具体页面写死在代码里
#[derive(Clone, Debug)]
pub struct Selectors {
    /// 分组标签（点击展开）
    pub group_labels: String,
    /// 展开后表格中的行
    pub rows: String,
    /// 行内单元格
    pub cells: String,
    /// 题目单元格在行内的下标
    pub problem_cell_index: usize,
    /// 难度单元格在行内的下标
    pub difficulty_cell_index: usize,
    /// 难度单元格内的标签元素
    pub difficulty_label: String,
    /// 题目单元格内的超链接
    pub anchors: String,
    /// 侧边栏关闭按钮
    pub close_buttons: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            group_labels: ".node-group label".to_string(),
            rows: "table tbody tr".to_string(),
            cells: "td".to_string(),
            problem_cell_index: 2,
            difficulty_cell_index: 3,
            difficulty_label: "b".to_string(),
            anchors: "a".to_string(),
            close_buttons: ".my-sidebar .close-container button".to_string(),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 路线图页面URL
    pub roadmap_url: String,
    /// 浏览器调试端口（设置后连接已有浏览器，否则启动新浏览器）
    pub browser_debug_port: Option<u16>,
    /// 是否以无头模式启动
    pub headless: bool,
    /// 浏览器可执行文件路径
    pub chrome_executable: Option<String>,
    /// 页面加载后的稳定等待（毫秒）
    pub settle_delay_ms: u64,
    /// 单行渲染超时（毫秒）
    pub render_timeout_ms: u64,
    /// 可见性轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 主链接（判题平台）域名标记
    pub primary_link_token: String,
    /// 免费资源链接域名标记
    pub secondary_link_token: String,
    /// 关闭按钮文字
    pub close_label: String,
    /// 规范分组顺序文件（TOML），为空时使用内置顺序
    pub canonical_order_file: Option<String>,
    /// 输出文件，为空时输出到 stdout
    pub output_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    pub selectors: Selectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roadmap_url: "https://neetcode.io/roadmap".to_string(),
            browser_debug_port: None,
            headless: true,
            chrome_executable: None,
            settle_delay_ms: 500,
            render_timeout_ms: 2000,
            poll_interval_ms: 100,
            primary_link_token: "leetcode".to_string(),
            secondary_link_token: "neetcode".to_string(),
            close_label: "ESC".to_string(),
            canonical_order_file: None,
            output_file: None,
            verbose_logging: false,
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            roadmap_url: std::env::var("ROADMAP_URL").unwrap_or(default.roadmap_url),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).or(default.browser_debug_port),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().or(default.chrome_executable),
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_delay_ms),
            render_timeout_ms: std::env::var("RENDER_TIMEOUT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.render_timeout_ms),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_ms),
            primary_link_token: std::env::var("PRIMARY_LINK_TOKEN").unwrap_or(default.primary_link_token),
            secondary_link_token: std::env::var("SECONDARY_LINK_TOKEN").unwrap_or(default.secondary_link_token),
            close_label: std::env::var("CLOSE_LABEL").unwrap_or(default.close_label),
            canonical_order_file: std::env::var("CANONICAL_ORDER_FILE").ok().or(default.canonical_order_file),
            output_file: std::env::var("OUTPUT_FILE").ok().or(default.output_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            selectors: default.selectors,
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_millis(self.render_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
