//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理应用生命周期（初始化、运行、清理）
//! - 管理浏览器资源（Browser、ChromiumPage）
//! - 抓取成功后输出课程表和统计信息
//!
//! ### `curriculum_aggregator` - 课程表汇总器
//! - 发现并逐个处理分组（`Vec<GroupRecord>`）
//! - 按规范顺序排序
//!
//! ## 层次关系
//!
//! ```text
//! app (持有 Browser)
//!     ↓
//! curriculum_aggregator (处理所有分组)
//!     ↓
//! workflow::GroupNavigator (单个分组的展开 / 关闭)
//!     ↓
//! services (能力层：行提取 / 链接分类 / 输出)
//!     ↓
//! infrastructure (基础设施：PageDriver)
//! ```

pub mod app;
pub mod curriculum_aggregator;

// 重新导出主要类型
pub use app::App;
pub use curriculum_aggregator::{sort_groups, CurriculumAggregator};
