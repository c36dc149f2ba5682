//! 链接分类服务 - 业务能力层
//!
//! 按域名标记把题目单元格里的链接分成主链接 / 免费资源链接

use crate::config::Config;

/// 链接类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// 判题平台链接
    Primary,
    /// 免费资源链接
    Secondary,
}

/// 链接分类器
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    primary_token: String,
    secondary_token: String,
}

impl LinkClassifier {
    pub fn new(primary_token: impl Into<String>, secondary_token: impl Into<String>) -> Self {
        Self {
            primary_token: primary_token.into(),
            secondary_token: secondary_token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.primary_link_token, &config.secondary_link_token)
    }

    /// 判断链接类别；主标记优先，同时包含两个标记的链接算作主链接
    pub fn classify(&self, url: &str) -> Option<LinkClass> {
        if url.contains(&self.primary_token) {
            Some(LinkClass::Primary)
        } else if url.contains(&self.secondary_token) {
            Some(LinkClass::Secondary)
        } else {
            None
        }
    }
}

/// 一行中分类后的链接
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLinks {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl ClassifiedLinks {
    /// 记录一个链接，同类链接后者覆盖前者
    ///
    /// # 返回
    /// 被覆盖的旧链接（如果有）
    pub fn record(&mut self, class: LinkClass, url: String) -> Option<String> {
        let slot = match class {
            LinkClass::Primary => &mut self.primary,
            LinkClass::Secondary => &mut self.secondary,
        };
        slot.replace(url)
    }
}
