//! # 写入模块
//!
//! 先在内存中完成 PNG 编码，编码成功后才触碰目标文件，
//! 这样编码失败不会破坏已有的 `AppIcon.png`。目标目录必须已存在。

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use super::source::ResizedIcon;
use super::{IconError, IconResizer};

/// 将位图编码为 PNG 字节。
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, IconError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

impl IconResizer {
    /// 编码并写入目标路径，覆盖已存在的文件。
    pub(super) fn write_png(&self, icon: &ResizedIcon, target_path: &Path) -> Result<(), IconError> {
        let target_dir = target_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if !target_dir.is_dir() {
            return Err(IconError::Write(format!(
                "目标目录不存在：{}",
                target_dir.display()
            )));
        }

        let bytes = encode_png(&icon.image)?;
        log::debug!("🧾 PNG 编码完成 - {} bytes", bytes.len());

        std::fs::write(target_path, &bytes).map_err(|e| {
            IconError::Write(format!("无法写入 {}：{}", target_path.display(), e))
        })?;

        Ok(())
    }
}
