use std::time::Duration;

use thiserror::Error;

/// 应用程序错误类型
///
/// 所有错误都是致命的：任何一个变体出现都会中止整次抓取，不产生部分结果。
#[derive(Debug, Error)]
pub enum AppError {
    /// 行单元格在限定时间内没有变为可见
    #[error("渲染超时: 分组 '{group}' 第 {row} 行在 {timeout:?} 内未显示")]
    RenderTimeout {
        group: String,
        row: usize,
        timeout: Duration,
    },

    /// 必填字段为空（名称 / 难度 / 主链接 / 单元格）
    #[error("缺少必填字段 {field} (分组: '{group}', 第 {row} 行)")]
    MissingField {
        group: String,
        row: usize,
        field: &'static str,
    },

    /// 难度标签不是 easy / medium / hard
    #[error("无法识别的难度 '{value}' (分组: '{group}', 第 {row} 行)")]
    InvalidDifficulty {
        group: String,
        row: usize,
        value: String,
    },

    /// 找不到文字为指定标签的关闭按钮
    #[error("未找到关闭按钮 '{label}' (分组: '{group}')")]
    CloseControlNotFound { group: String, label: String },

    /// 分组名不在规范顺序中
    #[error("未知分组: '{group}'")]
    UnknownGroup { group: String },

    /// 规范顺序本身不合法（为空或有重复）
    #[error("规范顺序无效: {0}")]
    InvalidCanonicalOrder(String),

    /// 浏览器 / CDP 调用失败
    #[error("浏览器错误: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// 浏览器配置或启动失败
    #[error("浏览器启动失败: {0}")]
    Launch(String),

    #[error("文件错误 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML解析失败 ({path}): {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少字段错误
    pub fn missing_field(group: impl Into<String>, row: usize, field: &'static str) -> Self {
        AppError::MissingField {
            group: group.into(),
            row,
            field,
        }
    }

    /// 创建文件读写错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
