//! 课程表输出服务 - 业务能力层
//!
//! 只负责把完整的课程表序列化输出，不关心抓取流程

use std::io::Write;

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::Curriculum;

/// 课程表输出服务
///
/// 只在抓取完整成功后调用一次；输出为 2 空格缩进的 JSON，非 ASCII 字符原样保留
pub struct CurriculumWriter {
    output_file: Option<String>,
}

impl CurriculumWriter {
    /// 输出到 stdout
    pub fn new() -> Self {
        Self { output_file: None }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_file: Some(path.into()),
        }
    }

    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::with_path(path),
            None => Self::new(),
        }
    }

    /// 序列化为 JSON 文本
    pub fn render(curriculum: &Curriculum) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(curriculum)?)
    }

    /// 写出课程表
    ///
    /// # 返回
    /// 实际写出的字节数
    pub async fn write(&self, curriculum: &Curriculum) -> AppResult<usize> {
        let mut json = Self::render(curriculum)?;
        json.push('\n');

        match &self.output_file {
            Some(path) => {
                debug!("写入课程表: {} ({} 字节)", path, json.len());
                tokio::fs::write(path, json.as_bytes())
                    .await
                    .map_err(|e| AppError::io(path, e))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(json.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| AppError::io("<stdout>", e))?;
            }
        }

        Ok(json.len())
    }

    pub fn target(&self) -> &str {
        self.output_file.as_deref().unwrap_or("<stdout>")
    }
}

impl Default for CurriculumWriter {
    fn default() -> Self {
        Self::new()
    }
}
