//! # 加载模块
//!
//! 读取源文件全部字节。`std::fs::read` 内部打开的文件句柄在返回前释放，
//! 无论读取成功还是失败；后续解码只操作内存，不再持有任何句柄。

use std::path::Path;

use super::source::RawImageData;
use super::{IconConfig, IconError, IconResizer};

impl IconResizer {
    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &IconConfig,
    ) -> Result<RawImageData, IconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(IconError::FileSystem(format!(
                "不是普通文件：{}",
                path.display()
            )));
        }

        if metadata.len() > config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

        log::debug!("✅ 源图读取完成 - {} bytes", bytes.len());

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
        })
    }
}
