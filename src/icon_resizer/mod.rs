//! # 应用图标生成模块（icon_resizer）
//!
//! ## 设计思路
//!
//! 把“读取源图 → 解码 → 缩放到 1024x1024 → 编码 PNG → 写入目标路径”
//! 按阶段拆分为多个子模块，每个阶段只负责一件事，错误统一为 `IconError`。
//!
//! - `config`：固定路径、目标尺寸、滤镜与资源上限
//! - `handler`：编排整条处理流水线并记录阶段耗时
//! - `loader`：读取源文件字节
//! - `pipeline`：尺寸预检、解码、精确缩放
//! - `writer`：PNG 编码与落盘
//! - `error/source`：错误与中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（IconResizer::process）
//!    ├─ loader.rs（读取字节，文件句柄仅在读取期间存活）
//!    ├─ pipeline.rs（像素限制 + 解码，Lanczos3 缩放）
//!    └─ writer.rs（内存编码 PNG + 覆盖写入）
//!    ↓
//! 返回目标路径，由 main 输出 `Saved <path>`
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{
    ICON_SIZE, IconConfig, MAX_SOURCE_FILE_SIZE, MAX_SOURCE_PIXELS, SOURCE_IMAGE_PATH, TARGET_DIR,
    TARGET_FILENAME,
};
pub use error::IconError;
pub use handler::IconResizer;
pub use writer::encode_png;
