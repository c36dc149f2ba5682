use crate::error::{AppError, AppResult};
use crate::models::canonical_order::CanonicalOrder;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 规范顺序文件格式
///
/// ```toml
/// groups = ["Arrays & Hashing", "Stack", "Two Pointers"]
/// ```
#[derive(Debug, Deserialize)]
struct CanonicalOrderFile {
    groups: Vec<String>,
}

/// 从 TOML 文件加载规范分组顺序
pub async fn load_canonical_order(toml_file_path: &Path) -> AppResult<CanonicalOrder> {
    let path_display = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::io(&path_display, e))?;

    let file: CanonicalOrderFile = toml::from_str(&content).map_err(|e| AppError::Toml {
        path: path_display.clone(),
        source: e,
    })?;

    tracing::info!("从 {} 加载了 {} 个分组", path_display, file.groups.len());

    CanonicalOrder::new(file.groups)
}

/// 加载规范顺序：指定了文件则读文件，否则使用内置顺序
pub async fn load_canonical_order_or_default(path: Option<&str>) -> AppResult<CanonicalOrder> {
    match path {
        Some(path) => load_canonical_order(Path::new(path)).await,
        None => {
            tracing::debug!("未指定规范顺序文件，使用内置顺序");
            Ok(CanonicalOrder::default())
        }
    }
}
