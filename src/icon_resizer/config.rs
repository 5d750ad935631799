//! # 配置模块
//!
//! ## 设计思路
//!
//! 工具没有命令行参数，所有路径都是常量。常量集中在这里，并通过
//! `IconConfig::default()` 组装成一份配置；测试用结构体更新语法替换路径即可。

use std::path::PathBuf;

use image::imageops::FilterType;

/// 源图路径（相对仓库根目录）。
pub const SOURCE_IMAGE_PATH: &str = "assets/opencode_logo.png";

/// Xcode 资源目录中的 AppIcon 集合。
pub const TARGET_DIR: &str = "OpenCodeClient/OpenCodeClient/Assets.xcassets/AppIcon.appiconset";

/// Xcode 15+ 只需要这一张 1024x1024 通用图标。
pub const TARGET_FILENAME: &str = "AppIcon.png";

/// 输出图标边长（像素）。
pub const ICON_SIZE: u32 = 1024;

/// 源图像素上限，约 1.79 亿像素，超过即视为解压炸弹。
pub const MAX_SOURCE_PIXELS: u64 = 178_956_970;

/// 源文件体积上限（1 GiB），与 `MAX_SOURCE_PIXELS` 同量级。
pub const MAX_SOURCE_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图路径。
    pub source_path: PathBuf,
    /// 输出目录，必须已存在，不会自动创建。
    pub target_dir: PathBuf,
    /// 输出文件名。
    pub target_filename: String,
    /// 输出边长，宽高都等于该值。
    pub target_size: u32,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 源文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码前按 header 尺寸校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(SOURCE_IMAGE_PATH),
            target_dir: PathBuf::from(TARGET_DIR),
            target_filename: TARGET_FILENAME.to_string(),
            target_size: ICON_SIZE,
            resize_filter: FilterType::Lanczos3,
            max_file_size: MAX_SOURCE_FILE_SIZE,
            max_decoded_pixels: MAX_SOURCE_PIXELS,
        }
    }
}

impl IconConfig {
    /// 完整输出路径：`target_dir/target_filename`。
    pub fn target_path(&self) -> PathBuf {
        self.target_dir.join(&self.target_filename)
    }
}
