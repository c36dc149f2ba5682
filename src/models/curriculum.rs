use serde::{Deserialize, Serialize};

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 从页面标签解析（忽略大小写和首尾空白）
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单道题目
///
/// 只能由行提取器构造；名称、难度、主链接都保证非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(rename = "lc_link")]
    pub primary_link: String,
    /// 免费资源链接，缺失时为空字符串
    #[serde(rename = "free_link", default)]
    pub secondary_link: String,
}

impl ProblemRecord {
    pub fn secondary_link(&self) -> Option<&str> {
        if self.secondary_link.is_empty() {
            None
        } else {
            Some(&self.secondary_link)
        }
    }
}

/// 一个分组及其题目（按表格行顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group_name: String,
    pub questions: Vec<ProblemRecord>,
}

/// 完整课程表，按规范顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    groups: Vec<GroupRecord>,
}

impl Curriculum {
    /// 只应传入已经按规范顺序排好的分组
    pub(crate) fn from_sorted(groups: Vec<GroupRecord>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[GroupRecord] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<GroupRecord> {
        self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 所有分组的题目总数
    pub fn total_questions(&self) -> usize {
        self.groups.iter().map(|g| g.questions.len()).sum()
    }

    /// 按扁平下标（从 0 开始，超出总数时取模）定位题目
    ///
    /// 用于"每日一题"：第 N 天对应课程表中的第 N 道题
    pub fn question_at(&self, index: usize) -> Option<(&GroupRecord, &ProblemRecord)> {
        let total = self.total_questions();
        if total == 0 {
            return None;
        }

        let mut idx = index % total;
        for group in &self.groups {
            if idx < group.questions.len() {
                return Some((group, &group.questions[idx]));
            }
            idx -= group.questions.len();
        }
        None
    }
}
