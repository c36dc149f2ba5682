//! # Roadmap Scrape
//!
//! 从动态渲染的路线图页面抓取刷题课程表，按规范分组顺序输出 JSON
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 页面能力接口：查找、点击、可见性、文本
//! - `ChromiumPage` - 唯一的 page owner，基于 CDP 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单行 / 单个链接
//! - `RowExtractor` - 表格行 → 题目记录
//! - `LinkClassifier` - 主链接 / 免费资源链接分类
//! - `CurriculumWriter` - 输出 JSON 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个分组"的交互周期
//! - `GroupCtx` - 上下文封装（分组位置 + 名称）
//! - `GroupNavigator` - 收起 → 展开 → 收起 状态机
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/curriculum_aggregator` - 遍历所有分组并按规范顺序排序
//! - `orchestrator/app` - 应用生命周期，管理浏览器资源
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, Selectors};
pub use error::{AppError, AppResult};
pub use infrastructure::{ChromiumPage, PageDriver};
pub use models::{CanonicalOrder, Curriculum, Difficulty, GroupRecord, ProblemRecord};
pub use orchestrator::{App, CurriculumAggregator};
pub use workflow::{GroupCtx, GroupNavigator};
