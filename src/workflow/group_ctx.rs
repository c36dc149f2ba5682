//! 分组处理上下文
//!
//! 封装"我正在处理第几个分组、叫什么"这一信息

use std::fmt::Display;

/// 分组处理上下文
#[derive(Debug, Clone)]
pub struct GroupCtx {
    /// 分组在页面中的位置（从1开始，仅用于日志显示）
    pub index: usize,

    /// 页面中的分组总数
    pub total: usize,

    /// 分组名（已规整空白）
    pub name: String,
}

impl GroupCtx {
    pub fn new(index: usize, total: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            total,
            name: name.into(),
        }
    }
}

impl Display for GroupCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[分组 {}/{} {}]", self.index, self.total, self.name)
    }
}
