//! 规范分组顺序
//!
//! 输出中分组的顺序由这里决定，而不是页面上的发现顺序

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// 内置的路线图分组顺序
pub const DEFAULT_GROUPS: [&str; 18] = [
    "Arrays & Hashing",
    "Stack",
    "Two Pointers",
    "Sliding Window",
    "Binary Search",
    "Linked List",
    "Trees",
    "Tries",
    "Backtracking",
    "Graphs",
    "Heap / Priority Queue",
    "Advanced Graphs",
    "Intervals",
    "Greedy",
    "1-D DP",
    "2-D DP",
    "Bit Manipulation",
    "Math & Geometry",
];

/// 规范分组顺序（排序策略）
///
/// 构造后不可变；每个合法分组名都有唯一的排名
#[derive(Debug, Clone)]
pub struct CanonicalOrder {
    names: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl CanonicalOrder {
    /// 从分组名列表创建，列表不能为空，也不能有重复
    pub fn new<I, S>(names: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AppError::InvalidCanonicalOrder("分组列表为空".to_string()));
        }

        let mut ranks = HashMap::with_capacity(names.len());
        for (rank, name) in names.iter().enumerate() {
            if ranks.insert(name.clone(), rank).is_some() {
                return Err(AppError::InvalidCanonicalOrder(format!(
                    "分组重复: '{}'",
                    name
                )));
            }
        }

        Ok(Self { names, ranks })
    }

    /// 获取分组的排名
    pub fn rank_of(&self, group_name: &str) -> AppResult<usize> {
        self.ranks
            .get(group_name)
            .copied()
            .ok_or_else(|| AppError::UnknownGroup {
                group: group_name.to_string(),
            })
    }

    pub fn contains(&self, group_name: &str) -> bool {
        self.ranks.contains_key(group_name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CanonicalOrder {
    fn default() -> Self {
        Self {
            names: DEFAULT_GROUPS.iter().map(|s| s.to_string()).collect(),
            ranks: DEFAULT_GROUPS
                .iter()
                .enumerate()
                .map(|(rank, name)| (name.to_string(), rank))
                .collect(),
        }
    }
}
