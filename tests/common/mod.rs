//! 测试用的内存假 DOM
//!
//! 模拟路线图页面：分组标签、点击后出现的表格、侧边栏关闭按钮。
//! 选择器按 [`Selectors`] 中的字符串精确匹配。

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use roadmap_scrape::{AppResult, Config, PageDriver, Selectors};

/// 假 DOM 节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    GroupLabel(usize),
    /// 当前展开分组中的第几行
    Row(usize),
    Cell { row: usize, col: usize },
    DifficultyLabel(usize),
    Anchor { row: usize, index: usize },
    CloseButton(usize),
}

#[derive(Debug, Clone)]
pub struct FakeRow {
    pub name: String,
    pub difficulty: Option<String>,
    pub links: Vec<Option<String>>,
    pub cell_count: usize,
    /// None: 永远不可见；Some(n): 前 n 次轮询不可见
    pub visible_after: Option<usize>,
}

impl FakeRow {
    pub fn new(name: &str, difficulty: &str, links: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            difficulty: Some(difficulty.to_string()),
            links: links.iter().map(|l| Some(l.to_string())).collect(),
            cell_count: 4,
            visible_after: Some(0),
        }
    }

    /// 一道普通题目：一个判题平台链接 + 一个免费资源链接
    pub fn problem(name: &str, difficulty: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        Self::new(
            name,
            difficulty,
            &[
                format!("https://leetcode.com/problems/{}/", slug).as_str(),
                format!("https://neetcode.io/problems/{}", slug).as_str(),
            ],
        )
    }

    pub fn hidden_for(mut self, polls: usize) -> Self {
        self.visible_after = Some(polls);
        self
    }

    pub fn never_visible(mut self) -> Self {
        self.visible_after = None;
        self
    }

    pub fn without_difficulty_label(mut self) -> Self {
        self.difficulty = None;
        self
    }

    pub fn with_anchor_without_href(mut self) -> Self {
        self.links.insert(0, None);
        self
    }

    pub fn with_cells(mut self, count: usize) -> Self {
        self.cell_count = count;
        self
    }
}

#[derive(Debug, Clone)]
pub struct FakeGroup {
    pub name: String,
    pub rows: Vec<FakeRow>,
}

impl FakeGroup {
    pub fn new(name: &str, rows: Vec<FakeRow>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    expanded: Option<usize>,
    /// (分组, 行) → 题目单元格被轮询的次数
    polls: HashMap<(usize, usize), usize>,
    clicks: Vec<String>,
    overlapping_opens: usize,
}

/// 内存中的路线图页面
pub struct FakePage {
    selectors: Selectors,
    groups: Vec<FakeGroup>,
    close_labels: Vec<String>,
    state: Mutex<State>,
}

impl FakePage {
    pub fn new(groups: Vec<FakeGroup>) -> Self {
        Self {
            selectors: Selectors::default(),
            groups,
            close_labels: vec!["Close".to_string(), "ESC".to_string()],
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_close_labels(mut self, labels: &[&str]) -> Self {
        self.close_labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    /// 点击记录，如 `open:Stack` / `close:ESC`
    pub fn clicks(&self) -> Vec<String> {
        self.state.lock().unwrap().clicks.clone()
    }

    /// 已有分组展开时又点击了另一个分组的次数
    pub fn overlapping_opens(&self) -> usize {
        self.state.lock().unwrap().overlapping_opens
    }

    pub fn expanded_group(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.expanded.map(|g| self.groups[g].name.clone())
    }

    fn expanded_row(&self, row: usize) -> (usize, FakeRow) {
        let state = self.state.lock().unwrap();
        let group = state.expanded.expect("读取行时应该有分组处于展开状态");
        (group, self.groups[group].rows[row].clone())
    }
}

impl PageDriver for FakePage {
    type Element = Node;

    async fn find_all(&self, selector: &str) -> AppResult<Vec<Node>> {
        let nodes = if selector == self.selectors.group_labels {
            (0..self.groups.len()).map(Node::GroupLabel).collect()
        } else if selector == self.selectors.rows {
            match self.state.lock().unwrap().expanded {
                Some(group) => (0..self.groups[group].rows.len()).map(Node::Row).collect(),
                None => Vec::new(),
            }
        } else if selector == self.selectors.close_buttons {
            (0..self.close_labels.len()).map(Node::CloseButton).collect()
        } else {
            Vec::new()
        };
        Ok(nodes)
    }

    async fn find_within(&self, parent: &Node, selector: &str) -> AppResult<Vec<Node>> {
        let nodes = match parent {
            Node::Row(row) if selector == self.selectors.cells => {
                let (_, fake) = self.expanded_row(*row);
                (0..fake.cell_count)
                    .map(|col| Node::Cell { row: *row, col })
                    .collect()
            }
            Node::Cell { row, col }
                if *col == self.selectors.problem_cell_index && selector == self.selectors.anchors =>
            {
                let (_, fake) = self.expanded_row(*row);
                (0..fake.links.len())
                    .map(|index| Node::Anchor { row: *row, index })
                    .collect()
            }
            Node::Cell { row, col }
                if *col == self.selectors.difficulty_cell_index
                    && selector == self.selectors.difficulty_label =>
            {
                let (_, fake) = self.expanded_row(*row);
                if fake.difficulty.is_some() {
                    vec![Node::DifficultyLabel(*row)]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        };
        Ok(nodes)
    }

    async fn click(&self, element: &Node) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        match element {
            Node::GroupLabel(group) => {
                if state.expanded.is_some() {
                    state.overlapping_opens += 1;
                }
                state.expanded = Some(*group);
                state.clicks.push(format!("open:{}", self.groups[*group].name.trim()));
            }
            Node::CloseButton(index) => {
                let label = &self.close_labels[*index];
                if label.trim() == "ESC" {
                    state.expanded = None;
                }
                state.clicks.push(format!("close:{}", label.trim()));
            }
            other => state.clicks.push(format!("{:?}", other)),
        }
        Ok(())
    }

    async fn is_visible(&self, element: &Node) -> AppResult<bool> {
        let Node::Cell { row, col } = element else {
            return Ok(true);
        };
        let (group, fake) = self.expanded_row(*row);

        let mut state = self.state.lock().unwrap();
        let polls = state.polls.entry((group, *row)).or_insert(0);
        if *col == self.selectors.problem_cell_index {
            *polls += 1;
        }
        Ok(match fake.visible_after {
            Some(after) => *polls > after,
            None => false,
        })
    }

    async fn text(&self, element: &Node) -> AppResult<String> {
        let text = match element {
            Node::GroupLabel(group) => self.groups[*group].name.clone(),
            Node::Cell { row, col } if *col == self.selectors.problem_cell_index => {
                self.expanded_row(*row).1.name
            }
            Node::DifficultyLabel(row) => self.expanded_row(*row).1.difficulty.unwrap_or_default(),
            Node::CloseButton(index) => self.close_labels[*index].clone(),
            _ => String::new(),
        };
        Ok(text)
    }

    async fn href(&self, element: &Node) -> AppResult<Option<String>> {
        match element {
            Node::Anchor { row, index } => Ok(self.expanded_row(*row).1.links[*index].clone()),
            _ => Ok(None),
        }
    }
}

/// 缩短等待的配置，避免测试等满 2 秒
pub fn fast_config() -> Config {
    Config {
        render_timeout_ms: 50,
        poll_interval_ms: 5,
        ..Config::default()
    }
}

/// 打开第一个分组，返回它的第 `row` 行
pub async fn open_first_group(page: &FakePage, row: usize) -> Node {
    page.click(&Node::GroupLabel(0)).await.unwrap();
    Node::Row(row)
}
