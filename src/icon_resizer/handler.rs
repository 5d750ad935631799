//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconResizer` 只负责流程编排，处理链路固定为：
//! 1. 读取源图字节
//! 2. 解码
//! 3. 缩放到目标尺寸
//! 4. 编码 PNG 并写入目标路径
//!
//! 单线程、同步执行，任一阶段失败立即返回，不重试。
//! 记录 `load/decode/resize/write/total` 阶段耗时，便于诊断。

use std::path::PathBuf;
use std::time::Instant;

use super::{IconConfig, IconError};

/// 图标生成器。
pub struct IconResizer {
    config: IconConfig,
}

impl IconResizer {
    /// 根据配置创建图标生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use resize_icon::icon_resizer::{IconConfig, IconResizer};
    ///
    /// let resizer = IconResizer::new(IconConfig::default());
    /// let saved = resizer.process()?;
    /// println!("Saved {}", saved.display());
    /// # Ok::<(), resize_icon::icon_resizer::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 当前生效的配置。
    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 处理主入口：读取源图、缩放并写出图标，返回写入的路径。
    pub fn process(&self) -> Result<PathBuf, IconError> {
        let config = &self.config;
        let target_path = config.target_path();
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(&config.source_path, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode_source(&raw, config)?;
        let decode_elapsed = decode_start.elapsed();
        drop(raw);

        let resize_start = Instant::now();
        let icon = self.resize_to_icon(decoded, config)?;
        let resize_elapsed = resize_start.elapsed();

        let write_start = Instant::now();
        self.write_png(&icon, &target_path)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - {} {}x{} -> {}x{} load={}ms decode={}ms resize={}ms write={}ms total={}ms",
            target_path.display(),
            icon.source_width,
            icon.source_height,
            icon.image.width(),
            icon.image.height(),
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(target_path)
    }
}
